//! Builder Module
//!
//! Fluent Builder APIを提供し、`Extractor`インスタンスを段階的に構築する。

use crate::api::{SheetSelector, DEFAULT_BRAND_LABELS, DEFAULT_ROUTE_LABEL, DEFAULT_START_MARKER};
use crate::error::ExtractError;
use crate::extract::RouteInfoExtractor;
use crate::output::write_tables;
use crate::parser::WorkbookParser;
use crate::security::SecurityConfig;
use crate::segment::TimetableSegmenter;
use crate::table::{FeedTables, RouteTableBuilder};
use crate::types::{RouteInfo, Row};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{info, warn};

/// 抽出処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ExtractionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 時刻表ブロックの開始マーカー
    pub start_marker: String,

    /// 路線コード行のラベル（前方一致）
    pub route_label: String,

    /// 起点・終点行のラベル（完全一致）
    pub brand_labels: Vec<String>,

    /// セキュリティ設定
    pub security: SecurityConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            start_marker: DEFAULT_START_MARKER.to_string(),
            route_label: DEFAULT_ROUTE_LABEL.to_string(),
            brand_labels: DEFAULT_BRAND_LABELS.iter().map(|s| s.to_string()).collect(),
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Extractor`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use bmtc_gtfs::{ExtractorBuilder, SheetSelector};
///
/// # fn main() -> Result<(), bmtc_gtfs::ExtractError> {
/// let extractor = ExtractorBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Schedules".to_string()))
///     .with_brand_labels(["brand", "vajra", "vayu vajra"])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExtractorBuilder {
    /// 内部設定（構築中）
    config: ExtractionConfig,
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭のシート
    /// - 開始マーカー: `BENGALURU METROPOLITAN TRANSPORT CORPORATION`
    /// - 路線ラベル: `route`
    /// - ブランドラベル: `brand`, `vajra`
    /// - 入力サイズ上限: 2GB
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// 抽出対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use bmtc_gtfs::{ExtractorBuilder, SheetSelector};
    ///
    /// let builder = ExtractorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(0));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 時刻表ブロックの開始マーカーを指定する
    ///
    /// マーカーは前後の空白を除去して保持されます。比較は大文字小文字を区別します。
    pub fn with_start_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.start_marker = marker.into().trim().to_string();
        self
    }

    /// 路線コード行のラベルを指定する（前方一致、大文字小文字を区別しない）
    pub fn with_route_label(mut self, label: impl Into<String>) -> Self {
        self.config.route_label = label.into();
        self
    }

    /// 起点・終点行のラベルを指定する（完全一致、大文字小文字を区別しない）
    pub fn with_brand_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.brand_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security = SecurityConfig::with_max_input_file_size(bytes);
        self
    }

    /// 設定を検証し、`Extractor`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ExtractError::Config(String)`: 設定の検証に失敗した場合
    ///   * 開始マーカーが空
    ///   * 路線ラベルが空
    ///   * ブランドラベルが空、または空のラベルを含む
    ///   * 入力サイズ上限が0
    pub fn build(self) -> Result<Extractor, ExtractError> {
        // 1. 開始マーカーの検証
        if self.config.start_marker.is_empty() {
            return Err(ExtractError::Config(
                "Start marker must not be empty".to_string(),
            ));
        }

        // 2. ラベルの検証
        if self.config.route_label.trim().is_empty() {
            return Err(ExtractError::Config(
                "Route label must not be empty".to_string(),
            ));
        }
        if self.config.brand_labels.is_empty() {
            return Err(ExtractError::Config(
                "At least one brand label is required".to_string(),
            ));
        }
        if self.config.brand_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ExtractError::Config(
                "Brand labels must not be empty".to_string(),
            ));
        }

        // 3. セキュリティ設定の検証
        self.config.security.validate().map_err(ExtractError::Config)?;

        // 4. Extractorインスタンス生成
        Ok(Extractor::new(self.config))
    }
}

/// 抽出処理のファサード
///
/// ワークブックの読み込みからテーブル出力までを順に実行します。
///
/// 1. 選択したシートの行を読み込む
/// 2. 開始マーカー行で時刻表ブロックに分割する
/// 3. 各ブロックから路線情報を抽出する
/// 4. 路線テーブルと時刻表テーブルを構築する
/// 5. （`convert`系のみ）CSVファイルに書き込む
///
/// # 使用例
///
/// ```rust,no_run
/// use bmtc_gtfs::ExtractorBuilder;
/// use std::path::Path;
///
/// # fn main() -> Result<(), bmtc_gtfs::ExtractError> {
/// let extractor = ExtractorBuilder::new().build()?;
/// let tables = extractor.convert_file(Path::new("bmtc_schedule.xlsx"), Path::new("out"))?;
/// println!("{} routes, {} schedules", tables.routes.len(), tables.schedules.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Extractor {
    /// 抽出設定
    config: ExtractionConfig,

    segmenter: TimetableSegmenter,

    route_extractor: RouteInfoExtractor,

    table_builder: RouteTableBuilder,
}

impl Extractor {
    pub(crate) fn new(config: ExtractionConfig) -> Self {
        Self {
            segmenter: TimetableSegmenter::new(config.start_marker.clone()),
            route_extractor: RouteInfoExtractor::new(
                &config.route_label,
                config.brand_labels.as_slice(),
            ),
            table_builder: RouteTableBuilder::new(),
            config,
        }
    }

    /// ワークブックを読み込み、テーブルを構築する
    ///
    /// # 引数
    ///
    /// * `input` - ワークブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(FeedTables)` - 抽出に成功した場合（時刻表がない場合は空のテーブル）
    /// * `Err(ExtractError)` - 入力を読み込めない、またはシートが見つからない場合
    pub fn extract<R: Read + Seek>(&self, input: R) -> Result<FeedTables, ExtractError> {
        let mut parser = WorkbookParser::open(input, &self.config.security)?;
        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;
        let rows = parser.read_rows(&sheet_name)?;

        Ok(self.extract_rows(rows))
    }

    /// 読み込み済みの行からテーブルを構築する
    pub fn extract_rows<I>(&self, rows: I) -> FeedTables
    where
        I: IntoIterator<Item = Row>,
    {
        let timetables = self.segmenter.segment(rows);
        if timetables.is_empty() {
            warn!(
                marker = %self.config.start_marker,
                "no timetables found; output tables will be empty"
            );
        } else {
            info!(timetables = timetables.len(), "timetables segmented");
        }

        let records: Vec<RouteInfo> = timetables
            .iter()
            .map(|timetable| self.route_extractor.extract_timetable(timetable))
            .collect();

        self.table_builder.build(&records)
    }

    /// ワークブックを読み込み、テーブルを出力ディレクトリに書き込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(FeedTables)` - 書き込んだテーブル
    /// * `Err(ExtractError::OutputWrite)` - 出力ディレクトリに書き込めない場合
    pub fn convert<R: Read + Seek>(
        &self,
        input: R,
        output_dir: &Path,
    ) -> Result<FeedTables, ExtractError> {
        let tables = self.extract(input)?;
        write_tables(&tables, output_dir)?;
        Ok(tables)
    }

    /// ワークブックのパスを指定して変換する
    pub fn convert_file(
        &self,
        input_path: &Path,
        output_dir: &Path,
    ) -> Result<FeedTables, ExtractError> {
        info!(input = %input_path.display(), output = %output_dir.display(), "converting workbook");
        let input = File::open(input_path)?;
        self.convert(input, output_dir)
    }
}
