//! Workbook Parser
//!
//! calamineを使用したワークブック読み込みの実装。
//! 選択した1シートの行を、A1を起点とする固定列数の`Row`列として取り出します。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Cursor, Read, Seek};
use tracing::{debug, info};

use crate::api::SheetSelector;
use crate::error::ExtractError;
use crate::security::SecurityConfig;
use crate::types::{CellValue, Row};

/// ワークブックパーサー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
/// 入力はメモリに読み込んでから解析するため、元のファイルハンドルは
/// `open()`の終了時点で不要になります。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック（形式は自動判定）
    workbook: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `security` - 入力サイズ制限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(ExtractError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(ExtractError::Parse)` - ワークブックとして解析できない場合
    pub fn open<R: Read + Seek>(
        mut reader: R,
        security: &SecurityConfig,
    ) -> Result<Self, ExtractError> {
        // 上限+1バイトまで読み、超過を検出する
        let mut buffer = Vec::new();
        let bytes_read = reader
            .by_ref()
            .take(security.max_input_file_size.saturating_add(1))
            .read_to_end(&mut buffer)?;

        if bytes_read as u64 > security.max_input_file_size {
            return Err(ExtractError::SecurityViolation(format!(
                "Input file size exceeds maximum: more than {} bytes",
                security.max_input_file_size
            )));
        }
        debug!(bytes = bytes_read, "workbook loaded into memory");

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(ExtractError::Parse)?;

        Ok(Self { workbook })
    }

    /// すべてのシート名を取得
    pub fn get_sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシートを1つ選択
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(ExtractError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, ExtractError> {
        let all_sheet_names = self.get_sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names
                .into_iter()
                .next()
                .ok_or_else(|| ExtractError::Config("Workbook contains no sheets".to_string())),

            SheetSelector::Index(index) => {
                all_sheet_names.get(*index).cloned().ok_or_else(|| {
                    ExtractError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    ))
                })
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(ExtractError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートの全行を読み込む
    ///
    /// calamineのRangeは最初の非空セルから始まるため、A1を起点とするよう
    /// 先頭の空行・空列を補います。列数はシート内で固定です。
    pub fn read_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>, ExtractError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(ExtractError::Parse)?;

        let rows = rows_from_range(&range);
        info!(sheet = sheet_name, rows = rows.len(), "sheet rows loaded");

        Ok(rows)
    }
}

/// calamineのRangeを、A1起点の`Row`列に変換
fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let leading_cols = start_col as usize;
    let width = leading_cols + range.width();

    let mut rows = Vec::with_capacity(start_row as usize + range.height());

    for _ in 0..start_row {
        rows.push(Row::new(vec![CellValue::Empty; width]));
    }

    for data_row in range.rows() {
        let mut cells = Vec::with_capacity(width);
        cells.resize(leading_cols, CellValue::Empty);
        cells.extend(data_row.iter().map(convert_cell));
        rows.push(Row::new(cells));
    }

    rows
}

/// calamineのセル値を`CellValue`に変換
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
