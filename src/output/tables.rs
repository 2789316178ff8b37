//! CSV Table Writer
//!
//! シリアライズ可能な行の列をCSVとして出力する実装。

use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// CSVテーブルライター
///
/// ヘッダー行は行の有無に関わらず常に出力します。
/// インデックス列は出力しません。
pub(crate) struct CsvTableWriter;

impl CsvTableWriter {
    pub fn render<W: Write, T: Serialize>(
        &self,
        writer: W,
        header: &[&str],
        rows: &[T],
    ) -> Result<(), csv::Error> {
        // serialize()による自動ヘッダーは最初の行でしか出力されないため無効化
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record(header)?;
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}
