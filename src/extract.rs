//! Route Info Extraction Module
//!
//! 時刻表ブロックのヘッダー行から路線コード・起点・終点を抽出するモジュール。

use crate::types::{Row, RouteInfo, Timetable};
use tracing::{debug, warn};

/// 路線情報エクストラクター
///
/// A列が文字列の行について、前後の空白を除去・小文字化した値をラベルとして判定します。
///
/// - 路線ラベル（前方一致）: B列の値を路線コードとする。後勝ち
/// - ブランドラベル（完全一致）: C列が空でなければ、その値を起点・終点の両方に
///   設定する。それぞれ先勝ち
///
/// 起点と終点は同じセルから設定され、テーブル構築時の正規化
/// （末尾の`TO`・先頭の`TO`の除去）によってのみ区別されます。
#[derive(Debug, Clone)]
pub struct RouteInfoExtractor {
    route_label: String,
    brand_labels: Vec<String>,
}

impl RouteInfoExtractor {
    /// ラベルを指定してエクストラクターを生成
    ///
    /// ラベルは前後の空白を除去して小文字化されます。
    pub fn new<S: AsRef<str>>(route_label: &str, brand_labels: &[S]) -> Self {
        Self {
            route_label: normalize_label(route_label),
            brand_labels: brand_labels
                .iter()
                .map(|label| normalize_label(label.as_ref()))
                .collect(),
        }
    }

    /// 時刻表ブロックから路線情報を抽出
    pub fn extract_timetable(&self, timetable: &Timetable) -> RouteInfo {
        self.extract(&timetable.rows, timetable.index)
    }

    /// 行列から路線情報を抽出
    ///
    /// # 引数
    ///
    /// * `rows` - 時刻表ブロックの行
    /// * `timetable_id` - ブロックの出現順インデックス
    pub fn extract(&self, rows: &[Row], timetable_id: usize) -> RouteInfo {
        let mut info = RouteInfo::empty(timetable_id);

        for row in rows {
            let Some(text) = row.first_text() else {
                continue;
            };
            let label = normalize_label(text);

            if label.starts_with(&self.route_label) {
                info.route_code = row.cell(1).to_text();
            } else if self.brand_labels.contains(&label) {
                let brand_cell = row.cell(2);
                if brand_cell.is_blank() {
                    continue;
                }
                let value = brand_cell.to_text();
                if info.route_origin.is_none() {
                    info.route_origin = value.clone();
                }
                if info.route_destination.is_none() {
                    info.route_destination = value;
                }
            }
        }

        if info.route_code.is_none() {
            warn!(timetable_id, "no route code found in timetable");
        }
        debug!(
            timetable_id,
            route_code = ?info.route_code,
            route_origin = ?info.route_origin,
            route_destination = ?info.route_destination,
            "route info extracted"
        );

        info
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}
