//! Timetable Segmentation Module
//!
//! シートの行列を開始マーカー行で区切り、時刻表ブロックに分割するモジュール。

use crate::types::{Row, Timetable};
use tracing::debug;

/// 時刻表セグメンター
///
/// A列のテキスト（前後の空白を除去）が開始マーカーと完全一致する行を
/// ブロックの先頭とみなします。最初のマーカー行より前の行は破棄されます。
#[derive(Debug, Clone)]
pub struct TimetableSegmenter {
    start_marker: String,
}

impl TimetableSegmenter {
    /// 開始マーカーを指定してセグメンターを生成
    pub fn new(start_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
        }
    }

    /// 行が開始マーカー行かどうかを判定
    pub fn is_marker(&self, row: &Row) -> bool {
        row.first_text()
            .is_some_and(|text| text.trim() == self.start_marker)
    }

    /// 行列を時刻表ブロックに分割
    ///
    /// ブロックは出現順に並び、`index`は0から連番で振られます。
    /// マーカー行が1つもない場合は空のベクターを返します。
    pub fn segment<I>(&self, rows: I) -> Vec<Timetable>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut timetables = Vec::new();
        let mut current: Vec<Row> = Vec::new();

        for row in rows {
            if self.is_marker(&row) {
                if !current.is_empty() {
                    self.finish(&mut timetables, std::mem::take(&mut current));
                }
                current.push(row);
            } else if !current.is_empty() {
                current.push(row);
            }
        }

        if !current.is_empty() {
            self.finish(&mut timetables, current);
        }

        timetables
    }

    fn finish(&self, timetables: &mut Vec<Timetable>, rows: Vec<Row>) {
        let index = timetables.len();
        debug!(index, rows = rows.len(), "timetable block finalized");
        timetables.push(Timetable { index, rows });
    }
}
