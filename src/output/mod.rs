//! Output Module
//!
//! 路線テーブルと時刻表テーブルをCSVファイルとして出力するモジュール。

mod tables;

use crate::error::ExtractError;
use crate::table::FeedTables;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub(crate) use tables::CsvTableWriter;

/// 路線テーブルのファイル名
pub const ROUTES_FILE_NAME: &str = "routes_info.csv";

/// 時刻表テーブルのファイル名
pub const SCHEDULES_FILE_NAME: &str = "schedules_info.csv";

/// 出力テーブルの種類
///
/// 各テーブルのファイル名とヘッダーをenumとして表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputTable {
    Routes,
    Schedules,
}

impl OutputTable {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputTable::Routes => ROUTES_FILE_NAME,
            OutputTable::Schedules => SCHEDULES_FILE_NAME,
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        match self {
            OutputTable::Routes => &["route_id", "Route_Code", "Route_Origin", "Route_Destination"],
            OutputTable::Schedules => &["route_id", "schedule_id"],
        }
    }

    /// テーブルをライターに出力する
    pub fn render<W: Write>(&self, tables: &FeedTables, writer: W) -> Result<(), csv::Error> {
        match self {
            OutputTable::Routes => CsvTableWriter.render(writer, self.header(), &tables.routes),
            OutputTable::Schedules => {
                CsvTableWriter.render(writer, self.header(), &tables.schedules)
            }
        }
    }
}

/// 2つのテーブルを出力ディレクトリに書き込む
///
/// `routes_info.csv`、`schedules_info.csv`の順に書き込みます。
/// 出力ディレクトリは事前に存在している必要があります。
///
/// # 戻り値
///
/// * `Ok(())` - 両ファイルの書き込みに成功した場合
/// * `Err(ExtractError::OutputWrite)` - ファイルの作成・書き込みに失敗した場合
///   （`routes_info.csv`のみ書き込まれている可能性があります）
pub fn write_tables(tables: &FeedTables, output_dir: &Path) -> Result<(), ExtractError> {
    for table in [OutputTable::Routes, OutputTable::Schedules] {
        let path = output_dir.join(table.file_name());

        let file = File::create(&path).map_err(|source| ExtractError::OutputWrite {
            path: path.clone(),
            source,
        })?;

        table
            .render(tables, BufWriter::new(file))
            .map_err(|err| ExtractError::OutputWrite {
                path: path.clone(),
                source: err.into(),
            })?;

        info!(path = %path.display(), "table written");
    }

    Ok(())
}
