//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use crate::formatter::CellFormatter;

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    String(String),

    /// 論理値
    Bool(bool),

    /// 日付・時刻（Excelのシリアル値、1900年エポック）
    DateTime(f64),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 値が空セルまたは空文字列かどうかを判定
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 文字列セルの場合のみ、その内容を返す
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// 値をテキストとして取得（空セルは`None`）
    pub fn to_text(&self) -> Option<String> {
        CellFormatter::format_cell(self)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// シートの1行
///
/// 列数はシート内で固定です。範囲外の列にアクセスした場合は空セルを返します。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// 指定された列のセルを取得（0始まり）
    pub fn cell(&self, col: usize) -> &CellValue {
        self.cells.get(col).unwrap_or(&EMPTY_CELL)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 先頭セルが文字列の場合、その内容を返す
    pub fn first_text(&self) -> Option<&str> {
        self.cell(0).as_str()
    }
}

impl From<Vec<CellValue>> for Row {
    fn from(cells: Vec<CellValue>) -> Self {
        Self::new(cells)
    }
}

/// 時刻表ブロック
///
/// 開始マーカー行から次の開始マーカー行の直前までの連続した行。
/// `index`はシート内での出現順（0始まり）です。
#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    /// 出現順のインデックス
    pub index: usize,

    /// ブロックに含まれる行（先頭は常にマーカー行）
    pub rows: Vec<Row>,
}

/// 時刻表ブロックから抽出した路線情報
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteInfo {
    /// 路線コード（"Route"行が見つからない場合は`None`）
    pub route_code: Option<String>,

    /// 起点（正規化前）
    pub route_origin: Option<String>,

    /// 終点（正規化前）
    pub route_destination: Option<String>,

    /// 時刻表ブロックのインデックス
    pub timetable_id: usize,
}

impl RouteInfo {
    /// すべてのフィールドが未設定のレコードを生成
    pub fn empty(timetable_id: usize) -> Self {
        Self {
            route_code: None,
            route_origin: None,
            route_destination: None,
            timetable_id,
        }
    }
}
