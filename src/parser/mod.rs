//! Parser Module
//!
//! calamineを使用したワークブック解析の実装。
//! 入力全体をメモリに読み込み、選択した1シートの行を取り出します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
