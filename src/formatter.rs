//! Cell Formatter Module
//!
//! セルの値を路線コード・起点・終点として扱うテキストに変換するモジュール。

use crate::types::CellValue;
use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// 9999-12-31のシリアル値
const MAX_SERIAL: f64 = 2_958_465.0;

/// セルフォーマッター
///
/// `CellValue`をテキストに変換します。空セルは`None`になります。
#[derive(Debug)]
pub(crate) struct CellFormatter;

impl CellFormatter {
    /// セルの値をテキストに変換
    ///
    /// # 変換規則
    ///
    /// - 文字列: そのまま
    /// - 数値: 整数値は小数部なし（`101.0` -> `"101"`）
    /// - 論理値: `TRUE` / `FALSE`
    /// - 日付: `YYYY-MM-DD HH:MM:SS`（1日未満の値は`HH:MM:SS`）
    /// - エラー値: エラーコード文字列
    /// - 空セル: `None`
    pub fn format_cell(value: &CellValue) -> Option<String> {
        match value {
            CellValue::String(s) => Some(s.clone()),
            CellValue::Number(n) => Some(NumberFormatter::format(*n)),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::DateTime(serial) => {
                Some(DateFormatter::format(*serial).unwrap_or_else(|| NumberFormatter::format(*serial)))
            }
            CellValue::Error(e) => Some(e.clone()),
            CellValue::Empty => None,
        }
    }
}

/// 数値フォーマッター
#[derive(Debug)]
pub(crate) struct NumberFormatter;

impl NumberFormatter {
    /// 数値を最短表現の文字列に変換
    ///
    /// `f64`の`Display`は整数値を小数部なしで出力するため、
    /// Excelで`101`と入力されたセルは`"101"`になります。
    pub fn format(value: f64) -> String {
        value.to_string()
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。1900年エポックのみ対応。
#[derive(Debug)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// シリアル値を日付文字列に変換
    ///
    /// # エポックシステム
    ///
    /// - シリアル値1 = 1900年1月1日
    /// - Excelの1900年うるう年バグにより、シリアル値60は存在しない
    ///   1900年2月29日を表す。61以降は1899年12月30日起算で正しい日付になる
    /// - 1未満の値は時刻のみを表す
    ///
    /// 範囲外の値の場合は`None`を返します。
    pub fn format(serial_value: f64) -> Option<String> {
        if !serial_value.is_finite() || !(0.0..=MAX_SERIAL).contains(&serial_value) {
            return None;
        }

        let days = serial_value.floor();
        let seconds = ((serial_value - days) * SECONDS_PER_DAY).round() as i64;

        // シリアル値60以下は1899年12月31日起算
        let epoch = if days < 61.0 {
            NaiveDate::from_ymd_opt(1899, 12, 31)?
        } else {
            NaiveDate::from_ymd_opt(1899, 12, 30)?
        };

        let midnight: NaiveDateTime = epoch
            .checked_add_signed(Duration::days(days as i64))?
            .and_hms_opt(0, 0, 0)?;
        let datetime = midnight.checked_add_signed(Duration::seconds(seconds))?;

        if days < 1.0 {
            Some(datetime.format("%H:%M:%S").to_string())
        } else {
            Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        }
    }
}
