//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// bmtc-gtfsクレート全体で使用するエラー型
///
/// ワークブックの読み込み、時刻表の抽出、CSV出力の各段階で発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: 入力ファイルの読み込みに失敗したエラー
/// - `Parse`: ワークブックの解析に失敗したエラー（calamine由来）
/// - `Config`: 設定またはシート選択の検証に失敗したエラー
/// - `SecurityViolation`: 入力サイズ制限に違反したエラー
/// - `OutputWrite`: 出力ファイルの作成・書き込みに失敗したエラー
///
/// 時刻表が1つも見つからない場合はエラーではありません。
/// 空のテーブル（ヘッダーのみ）が出力されます。
///
/// # 使用例
///
/// ```rust,no_run
/// use bmtc_gtfs::ExtractError;
/// use std::fs::File;
///
/// fn open_schedule(path: &str) -> Result<(), ExtractError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O操作中に発生したエラー
    ///
    /// 入力ファイルが存在しない、読み込み権限がないなど、入力側で
    /// `std::io::Error`が発生した場合に使用されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイル、Excel形式でないファイルなどが
    /// 原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ExtractorBuilder::build()`時の設定検証、または存在しないシートを
    /// 選択した場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use bmtc_gtfs::{ExtractorBuilder, ExtractError};
    ///
    /// let result = ExtractorBuilder::new()
    ///     .with_start_marker("   ")  // 空白のみのマーカー
    ///     .build();
    ///
    /// match result {
    ///     Err(ExtractError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルのサイズが上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// 出力ファイルの作成・書き込みに失敗したエラー
    ///
    /// 出力ディレクトリが存在しない、書き込み権限がない、CSVのシリアライズに
    /// 失敗したなどが原因です。
    /// 2つの出力ファイル間にトランザクション保証はないため、
    /// `routes_info.csv`のみが書き込まれた状態で発生する場合があります。
    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWrite {
        /// 書き込みに失敗したファイルのパス
        path: PathBuf,
        /// 元のI/Oエラー
        source: std::io::Error,
    },
}
