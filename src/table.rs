//! Route Table Module
//!
//! 抽出した路線情報から路線テーブルと時刻表テーブルを構築するモジュール。

use crate::types::RouteInfo;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// 路線テーブルの1行（`routes_info.csv`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub route_id: String,

    #[serde(rename = "Route_Code")]
    pub route_code: Option<String>,

    #[serde(rename = "Route_Origin")]
    pub route_origin: Option<String>,

    #[serde(rename = "Route_Destination")]
    pub route_destination: Option<String>,
}

/// 時刻表テーブルの1行（`schedules_info.csv`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub route_id: String,
    pub schedule_id: String,
}

/// 路線テーブルと時刻表テーブルの組
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedTables {
    /// 路線コードごとに1行
    pub routes: Vec<RouteRow>,

    /// 重複除去後の時刻表ごとに1行
    pub schedules: Vec<ScheduleRow>,
}

impl FeedTables {
    /// 両テーブルとも空かどうか
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.schedules.is_empty()
    }
}

/// 路線テーブルビルダー
///
/// # 処理手順
///
/// 1. 4フィールドすべてが一致するレコードを除去（最初の出現を残す）
/// 2. 路線コードでグループ化し、出現順に`route_1`, `route_2`, ... を割り当てる
///    （路線コードなしも1つのグループ。キーによる並べ替えはしない）
/// 3. 各グループの最初のレコードの起点・終点を正規化して路線テーブルに出力
/// 4. 各レコードについて`schedule_<timetable_id>`を時刻表テーブルに出力
#[derive(Debug, Clone, Default)]
pub struct RouteTableBuilder;

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 路線情報からテーブルを構築
    ///
    /// 入力が空の場合は、両テーブルとも空になります。
    pub fn build(&self, records: &[RouteInfo]) -> FeedTables {
        let retained = dedup_records(records);
        if retained.len() != records.len() {
            debug!(
                removed = records.len() - retained.len(),
                "duplicate route records removed"
            );
        }

        let mut group_ids: HashMap<Option<&str>, usize> = HashMap::new();
        let mut representatives: Vec<&RouteInfo> = Vec::new();
        let mut schedules = Vec::with_capacity(retained.len());

        for record in &retained {
            let group = match group_ids.get(&record.route_code.as_deref()) {
                Some(&group) => group,
                None => {
                    let group = representatives.len();
                    group_ids.insert(record.route_code.as_deref(), group);
                    representatives.push(record);
                    group
                }
            };

            schedules.push(ScheduleRow {
                route_id: route_id(group),
                schedule_id: format!("schedule_{}", record.timetable_id),
            });
        }

        let routes: Vec<RouteRow> = representatives
            .iter()
            .enumerate()
            .map(|(group, record)| RouteRow {
                route_id: route_id(group),
                route_code: record.route_code.clone(),
                route_origin: record.route_origin.as_deref().map(normalize_origin),
                route_destination: record
                    .route_destination
                    .as_deref()
                    .map(normalize_destination),
            })
            .collect();

        info!(
            routes = routes.len(),
            schedules = schedules.len(),
            "route tables built"
        );

        FeedTables { routes, schedules }
    }
}

/// 4フィールドすべてが一致するレコードを除去（出現順を維持）
pub fn dedup_records(records: &[RouteInfo]) -> Vec<RouteInfo> {
    let mut seen: HashSet<&RouteInfo> = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| seen.insert(*record))
        .cloned()
        .collect()
}

/// 起点を正規化
///
/// 前後の空白を除去し、末尾の「空白 + `TO`」を1回だけ除去します（大文字小文字を区別）。
///
/// `"Whitefield TO"` -> `"Whitefield"`
pub fn normalize_origin(origin: &str) -> String {
    let trimmed = origin.trim();
    match trimmed.strip_suffix("TO") {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end().to_string(),
        _ => trimmed.to_string(),
    }
}

/// 終点を正規化
///
/// 前後の空白を除去し、先頭の「`TO` + 空白」を1回だけ除去します（大文字小文字を区別）。
///
/// `"TO Airport"` -> `"Airport"`
pub fn normalize_destination(destination: &str) -> String {
    let trimmed = destination.trim();
    match trimmed.strip_prefix("TO") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start().to_string(),
        _ => trimmed.to_string(),
    }
}

fn route_id(group: usize) -> String {
    format!("route_{}", group + 1)
}
