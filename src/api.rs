//! Public API Types
//!
//! 公開APIで使用する列挙型と既定値を定義するモジュール。

/// 時刻表ブロックの開始マーカー（既定値）
///
/// BMTCの時刻表ワークブックでは、各時刻表の先頭行のA列に
/// この文字列が印字されています。
pub const DEFAULT_START_MARKER: &str = "BENGALURU METROPOLITAN TRANSPORT CORPORATION";

/// 路線コード行のラベル（既定値、前方一致）
pub const DEFAULT_ROUTE_LABEL: &str = "route";

/// 起点・終点行のラベル（既定値、完全一致）
pub const DEFAULT_BRAND_LABELS: &[&str] = &["brand", "vajra"];

/// 抽出対象のシートを選択する方式
///
/// 時刻表の抽出は常に1シートのみを対象とします。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 先頭のシート（デフォルト）
    #[default]
    First,

    /// インデックスで指定（0始まり）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use bmtc_gtfs::{ExtractorBuilder, SheetSelector};
    ///
    /// # fn main() -> Result<(), bmtc_gtfs::ExtractError> {
    /// let extractor = ExtractorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Index(usize),

    /// シート名で指定
    Name(String),
}
