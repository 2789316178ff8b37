//! bmtc-gtfs - Route and schedule extraction from BMTC bus-schedule workbooks
//!
//! This crate reads a BMTC (Bengaluru Metropolitan Transport Corporation) bus-schedule
//! Excel workbook, splits its first sheet into timetable blocks, and derives two small
//! tables as an intermediate step toward a GTFS feed:
//!
//! - `routes_info.csv`: `route_id,Route_Code,Route_Origin,Route_Destination`
//! - `schedules_info.csv`: `route_id,schedule_id`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use bmtc_gtfs::ExtractorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an extractor with default settings
//!     let extractor = ExtractorBuilder::new().build()?;
//!
//!     // Read the workbook and write both CSV files into `out/`
//!     let tables = extractor.convert_file(Path::new("bmtc_schedule.xlsx"), Path::new("out"))?;
//!     println!("{} routes", tables.routes.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory extraction, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use bmtc_gtfs::ExtractorBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ExtractorBuilder::new().build()?;
//! let workbook_bytes: Vec<u8> = vec![]; // Your Excel file bytes
//! let tables = extractor.extract(Cursor::new(workbook_bytes))?;
//! for route in &tables.routes {
//!     println!("{} {:?}", route.route_id, route.route_code);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline Stages
//!
//! Each stage is also usable on its own:
//!
//! ```rust
//! use bmtc_gtfs::{
//!     CellValue, RouteInfoExtractor, RouteTableBuilder, Row, TimetableSegmenter,
//!     DEFAULT_BRAND_LABELS, DEFAULT_ROUTE_LABEL, DEFAULT_START_MARKER,
//! };
//!
//! let rows = vec![
//!     Row::new(vec![DEFAULT_START_MARKER.into()]),
//!     Row::new(vec!["Route".into(), "101".into()]),
//!     Row::new(vec!["Vajra".into(), CellValue::Empty, "Whitefield TO".into()]),
//! ];
//!
//! let timetables = TimetableSegmenter::new(DEFAULT_START_MARKER).segment(rows);
//! let extractor = RouteInfoExtractor::new(DEFAULT_ROUTE_LABEL, DEFAULT_BRAND_LABELS);
//! let records: Vec<_> = timetables.iter().map(|t| extractor.extract_timetable(t)).collect();
//! let tables = RouteTableBuilder::new().build(&records);
//!
//! assert_eq!(tables.routes[0].route_id, "route_1");
//! assert_eq!(tables.routes[0].route_origin.as_deref(), Some("Whitefield"));
//! assert_eq!(tables.schedules[0].schedule_id, "schedule_0");
//! ```

mod api;
mod builder;
mod error;
mod extract;
mod formatter;
mod output;
mod parser;
mod security;
mod segment;
mod table;
mod types;

// 公開API
pub use api::{SheetSelector, DEFAULT_BRAND_LABELS, DEFAULT_ROUTE_LABEL, DEFAULT_START_MARKER};
pub use builder::{Extractor, ExtractorBuilder};
pub use error::ExtractError;
pub use extract::RouteInfoExtractor;
pub use output::{write_tables, ROUTES_FILE_NAME, SCHEDULES_FILE_NAME};
pub use segment::TimetableSegmenter;
pub use table::{
    dedup_records, normalize_destination, normalize_origin, FeedTables, RouteRow,
    RouteTableBuilder, ScheduleRow,
};
pub use types::{CellValue, RouteInfo, Row, Timetable};
