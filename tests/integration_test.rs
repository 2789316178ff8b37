//! Integration Tests for bmtc-gtfs
//!
//! Workbooks are generated in memory with rust_xlsxwriter and run through the
//! full pipeline: read → segment → extract → build tables → write CSV.

use rust_xlsxwriter::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use bmtc_gtfs::{
    ExtractError, ExtractorBuilder, SheetSelector, DEFAULT_START_MARKER, ROUTES_FILE_NAME,
    SCHEDULES_FILE_NAME,
};

const ROUTES_HEADER: &str = "route_id,Route_Code,Route_Origin,Route_Destination";
const SCHEDULES_HEADER: &str = "route_id,schedule_id";

// Helper module for generating test fixtures
mod fixtures {
    use super::*;

    /// Write one timetable block starting at `row`; returns the next free row.
    ///
    /// Layout follows the printed BMTC schedule: marker row, a "Route" row with
    /// the code in column B, a brand row with the terminus in column C, then
    /// a few trip rows.
    pub fn write_timetable(
        worksheet: &mut Worksheet,
        row: u32,
        route_code: &str,
        brand_label: &str,
        terminus: &str,
    ) -> Result<u32, XlsxError> {
        worksheet.write_string(row, 0, DEFAULT_START_MARKER)?;
        worksheet.write_string(row + 1, 0, "Route")?;
        worksheet.write_string(row + 1, 1, route_code)?;
        worksheet.write_string(row + 2, 0, brand_label)?;
        worksheet.write_string(row + 2, 2, terminus)?;
        worksheet.write_string(row + 3, 0, "Trip")?;
        worksheet.write_string(row + 3, 1, "Departure")?;
        worksheet.write_string(row + 3, 2, "Arrival")?;
        worksheet.write_number(row + 4, 0, 1.0)?;
        worksheet.write_string(row + 4, 1, "06:00")?;
        worksheet.write_string(row + 4, 2, "07:10")?;
        Ok(row + 6)
    }

    /// The two-timetable workbook from the reference scenario
    pub fn generate_two_routes() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let next = write_timetable(worksheet, 0, "101", "Vajra", "Whitefield TO")?;
        write_timetable(worksheet, next, "102", "Brand", "TO Airport")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Cover rows before the first marker, and repeated route codes
    pub fn generate_repeated_routes() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "BMTC Bus Schedule 2024")?;
        worksheet.write_string(1, 0, "Route")?;
        worksheet.write_string(1, 1, "IGNORED")?;

        let mut row = 3;
        row = write_timetable(worksheet, row, "500-D", "Brand", "Hebbal TO")?;
        row = write_timetable(worksheet, row, "335-E", "Vajra", "TO Kadugodi")?;
        write_timetable(worksheet, row, "500-D", "Brand", "Hebbal TO")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// A sheet with schedule-like rows but no marker
    pub fn generate_without_marker() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "Route")?;
        worksheet.write_string(0, 1, "101")?;
        worksheet.write_string(1, 0, "Vajra")?;
        worksheet.write_string(1, 2, "Whitefield TO")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Route code stored as a number, and a block with no Route row
    pub fn generate_numeric_and_missing_codes() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, DEFAULT_START_MARKER)?;
        worksheet.write_string(1, 0, "Route")?;
        worksheet.write_number(1, 1, 201.0)?;
        worksheet.write_string(2, 0, "Brand")?;
        worksheet.write_string(2, 2, "Banashankari TO")?;

        worksheet.write_string(4, 0, DEFAULT_START_MARKER)?;
        worksheet.write_string(5, 0, "Vajra")?;
        worksheet.write_string(5, 2, "TO Majestic")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Three sheets; only the second one holds timetables
    pub fn generate_multi_sheets() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();

        let cover = workbook.add_worksheet();
        cover.set_name("Cover")?;
        cover.write_string(0, 0, "BMTC")?;

        let schedules = workbook.add_worksheet();
        schedules.set_name("Schedules")?;
        write_timetable(schedules, 0, "G-4", "Brand", "Jayanagar TO")?;

        let notes = workbook.add_worksheet();
        notes.set_name("Notes")?;
        notes.write_string(0, 0, "Subject to change")?;

        Ok(workbook.save_to_buffer()?)
    }
}

fn read_output(dir: &Path) -> (String, String) {
    let routes = fs::read_to_string(dir.join(ROUTES_FILE_NAME)).unwrap();
    let schedules = fs::read_to_string(dir.join(SCHEDULES_FILE_NAME)).unwrap();
    (routes, schedules)
}

#[test]
fn test_two_routes_end_to_end() {
    let data = fixtures::generate_two_routes().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let extractor = ExtractorBuilder::new().build().unwrap();
    let tables = extractor.convert(Cursor::new(data), dir.path()).unwrap();

    assert_eq!(tables.routes.len(), 2);
    assert_eq!(tables.schedules.len(), 2);

    let (routes, schedules) = read_output(dir.path());
    assert_eq!(
        routes,
        format!(
            "{ROUTES_HEADER}\n\
             route_1,101,Whitefield,Whitefield TO\n\
             route_2,102,TO Airport,Airport\n"
        )
    );
    assert_eq!(
        schedules,
        format!("{SCHEDULES_HEADER}\nroute_1,schedule_0\nroute_2,schedule_1\n")
    );
}

#[test]
fn test_convert_file_from_path() {
    let data = fixtures::generate_two_routes().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("bmtc_schedule.xlsx");
    fs::write(&input_path, data).unwrap();

    let output_dir = dir.path().join("gtfs");
    fs::create_dir(&output_dir).unwrap();

    let extractor = ExtractorBuilder::new().build().unwrap();
    extractor.convert_file(&input_path, &output_dir).unwrap();

    let (routes, schedules) = read_output(&output_dir);
    assert!(routes.starts_with(ROUTES_HEADER));
    assert_eq!(schedules.lines().count(), 3);
}

#[test]
fn test_repeated_route_codes_share_route_id() {
    let data = fixtures::generate_repeated_routes().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let extractor = ExtractorBuilder::new().build().unwrap();
    extractor.convert(Cursor::new(data), dir.path()).unwrap();

    let (routes, schedules) = read_output(dir.path());
    assert_eq!(
        routes,
        format!(
            "{ROUTES_HEADER}\n\
             route_1,500-D,Hebbal,Hebbal TO\n\
             route_2,335-E,TO Kadugodi,Kadugodi\n"
        )
    );
    // Rows before the first marker do not produce a timetable
    assert_eq!(
        schedules,
        format!(
            "{SCHEDULES_HEADER}\n\
             route_1,schedule_0\n\
             route_2,schedule_1\n\
             route_1,schedule_2\n"
        )
    );
}

#[test]
fn test_no_marker_writes_headers_only() {
    let data = fixtures::generate_without_marker().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let extractor = ExtractorBuilder::new().build().unwrap();
    let tables = extractor.convert(Cursor::new(data), dir.path()).unwrap();

    assert!(tables.is_empty());
    let (routes, schedules) = read_output(dir.path());
    assert_eq!(routes, format!("{ROUTES_HEADER}\n"));
    assert_eq!(schedules, format!("{SCHEDULES_HEADER}\n"));
}

#[test]
fn test_numeric_and_missing_route_codes() {
    let data = fixtures::generate_numeric_and_missing_codes().unwrap();

    let extractor = ExtractorBuilder::new().build().unwrap();
    let tables = extractor.extract(Cursor::new(data)).unwrap();

    assert_eq!(tables.routes.len(), 2);
    assert_eq!(tables.routes[0].route_code.as_deref(), Some("201"));
    assert_eq!(tables.routes[0].route_origin.as_deref(), Some("Banashankari"));
    assert_eq!(tables.routes[1].route_code, None);
    assert_eq!(tables.routes[1].route_destination.as_deref(), Some("Majestic"));
    assert_eq!(tables.schedules[1].route_id, "route_2");
}

#[test]
fn test_sheet_selection() {
    let data = fixtures::generate_multi_sheets().unwrap();

    // 先頭シートには時刻表がない
    let extractor = ExtractorBuilder::new().build().unwrap();
    let tables = extractor.extract(Cursor::new(data.clone())).unwrap();
    assert!(tables.is_empty());

    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(SheetSelector::Index(1))
        .build()
        .unwrap();
    let tables = extractor.extract(Cursor::new(data.clone())).unwrap();
    assert_eq!(tables.routes.len(), 1);
    assert_eq!(tables.routes[0].route_code.as_deref(), Some("G-4"));

    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(SheetSelector::Name("Schedules".to_string()))
        .build()
        .unwrap();
    let tables = extractor.extract(Cursor::new(data)).unwrap();
    assert_eq!(tables.routes[0].route_origin.as_deref(), Some("Jayanagar"));
}

#[test]
fn test_sheet_selection_errors() {
    let data = fixtures::generate_multi_sheets().unwrap();

    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(SheetSelector::Index(3))
        .build()
        .unwrap();
    match extractor.extract(Cursor::new(data.clone())) {
        Err(ExtractError::Config(msg)) => assert!(msg.contains("out of range")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(SheetSelector::Name("Missing".to_string()))
        .build()
        .unwrap();
    match extractor.extract(Cursor::new(data)) {
        Err(ExtractError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = ExtractorBuilder::new().build().unwrap();

    let result = extractor.convert_file(&dir.path().join("missing.xlsx"), dir.path());

    assert!(matches!(result, Err(ExtractError::Io(_))));
    assert!(!dir.path().join(ROUTES_FILE_NAME).exists());
}

#[test]
fn test_missing_output_directory() {
    let data = fixtures::generate_two_routes().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let extractor = ExtractorBuilder::new().build().unwrap();
    let result = extractor.convert(Cursor::new(data), &missing);

    match result {
        Err(ExtractError::OutputWrite { path, .. }) => {
            assert_eq!(path, missing.join(ROUTES_FILE_NAME));
        }
        other => panic!("Expected OutputWrite error, got {:?}", other),
    }
}
