//! CSV loader for the bin dataset.
//!
//! The source file is a GIS export: a header row names the columns, data
//! rows may quote fields that contain commas. Column positions are
//! resolved from the header once, before any row is read, so a file
//! missing a required column fails immediately instead of mid-load.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::models::Bin;

/// Required column holding the bin description.
const COL_DESCRIPTION: &str = "PopupInfo";
/// Required column holding the longitude.
const COL_LONGITUDE: &str = "X_Field";
/// Required column holding the latitude.
const COL_LATITUDE: &str = "Y";
/// Optional column holding the bin name.
const COL_NAME: &str = "Name";

/// Rows with both coordinates below this magnitude are junk entries in
/// the export (points that were never placed) and are dropped.
const COORD_EPSILON: f64 = 1e-4;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Missing CSV column: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid number {value:?} in column {column} (data row {row})")]
    InvalidNumber {
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Column positions resolved from the header row.
struct ColumnMap {
    description: usize,
    longitude: usize,
    latitude: usize,
    name: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        // The first header cell may carry a UTF-8 BOM from the exporter.
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == wanted)
        };

        Ok(Self {
            description: find(COL_DESCRIPTION).ok_or(LoadError::MissingColumn(COL_DESCRIPTION))?,
            longitude: find(COL_LONGITUDE).ok_or(LoadError::MissingColumn(COL_LONGITUDE))?,
            latitude: find(COL_LATITUDE).ok_or(LoadError::MissingColumn(COL_LATITUDE))?,
            name: find(COL_NAME),
        })
    }
}

/// Load bins from a CSV file on disk.
pub fn load_bins(path: &Path) -> Result<Vec<Bin>, LoadError> {
    load_bins_from_reader(File::open(path)?)
}

/// Load bins from any CSV source.
///
/// Ids are assigned sequentially from 1 in file order, counting only
/// accepted rows.
pub fn load_bins_from_reader<R: io::Read>(reader: R) -> Result<Vec<Bin>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut bins = Vec::new();
    let mut next_id: u64 = 1;

    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let description = field(&record, columns.description).to_string();
        let lng = parse_coord(field(&record, columns.longitude), COL_LONGITUDE, row)?;
        let lat = parse_coord(field(&record, columns.latitude), COL_LATITUDE, row)?;

        // Unplaced points from the export sit at (0, 0) give or take noise.
        if lat.abs() < COORD_EPSILON && lng.abs() < COORD_EPSILON {
            continue;
        }

        let name = match columns.name.map(|i| field(&record, i)) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("Compost Bin {}", next_id),
        };

        bins.push(Bin {
            id: next_id,
            name,
            description,
            lat,
            lng,
        });
        next_id += 1;
    }

    Ok(bins)
}

/// Field at `index`, or "" when the row is shorter than the header.
fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// Parse a coordinate field. Blank fields read as 0.0; anything else
/// that is not a number fails the load.
fn parse_coord(raw: &str, column: &'static str, row: usize) -> Result<f64, LoadError> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse().map_err(|_| LoadError::InvalidNumber {
        column,
        row,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Result<Vec<Bin>, LoadError> {
        load_bins_from_reader(csv.as_bytes())
    }

    #[test]
    fn blank_name_gets_default() {
        let bins = load("Name,PopupInfo,X_Field,Y\n,\"desc\",10.0,20.0\n").unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].id, 1);
        assert_eq!(bins[0].name, "Compost Bin 1");
        assert_eq!(bins[0].description, "desc");
        assert_eq!(bins[0].lng, 10.0);
        assert_eq!(bins[0].lat, 20.0);
    }

    #[test]
    fn explicit_name_is_kept() {
        let bins = load("Name,PopupInfo,X_Field,Y\nLibrary,south entrance,-83.37,33.95\n").unwrap();
        assert_eq!(bins[0].name, "Library");
        assert_eq!(bins[0].description, "south entrance");
    }

    #[test]
    fn name_column_may_be_absent() {
        let bins = load("PopupInfo,X_Field,Y\nby the gate,-83.37,33.95\n").unwrap();
        assert_eq!(bins[0].name, "Compost Bin 1");
    }

    #[test]
    fn near_zero_coordinates_are_skipped_without_consuming_an_id() {
        let csv = "Name,PopupInfo,X_Field,Y\n\
                   ,first,10.0,20.0\n\
                   ,junk,0.00003,0.00005\n\
                   ,second,11.0,21.0\n";
        let bins = load(csv).unwrap();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].description, "first");
        assert_eq!(bins[1].description, "second");
        assert_eq!(bins[1].id, 2);
        assert_eq!(bins[1].name, "Compost Bin 2");
    }

    #[test]
    fn zero_latitude_alone_is_not_junk() {
        let bins = load("PopupInfo,X_Field,Y\non the equator,10.0,0.0\n").unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].lat, 0.0);
    }

    #[test]
    fn missing_required_column_fails() {
        let err = load("Name,PopupInfo,X_Field\nA,desc,10.0\n").unwrap_err();
        match err {
            LoadError::MissingColumn(col) => assert_eq!(col, "Y"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_error_names_the_column() {
        let err = load("Name,X_Field,Y\nA,10.0,20.0\n").unwrap_err();
        assert_eq!(err.to_string(), "Missing CSV column: PopupInfo");
    }

    #[test]
    fn quoted_field_with_embedded_comma() {
        let bins =
            load("Name,PopupInfo,X_Field,Y\n,\"next to Baldwin Hall, east side\",-83.37,33.95\n")
                .unwrap();
        assert_eq!(bins[0].description, "next to Baldwin Hall, east side");
    }

    #[test]
    fn bom_on_first_header_is_stripped() {
        let bins = load("\u{feff}Name,PopupInfo,X_Field,Y\nA,desc,10.0,20.0\n").unwrap();
        assert_eq!(bins[0].name, "A");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = "Name,PopupInfo,X_Field,Y\n\n,first,10.0,20.0\n\n\n,second,11.0,21.0\n";
        let bins = load(csv).unwrap();
        assert_eq!(bins.len(), 2);
    }

    #[test]
    fn blank_numeric_field_parses_as_zero() {
        // Blank longitude reads as 0.0; latitude keeps the row alive.
        let bins = load("PopupInfo,X_Field,Y\nno longitude,,33.95\n").unwrap();
        assert_eq!(bins[0].lng, 0.0);
        assert_eq!(bins[0].lat, 33.95);
    }

    #[test]
    fn malformed_numeric_field_fails() {
        let err = load("PopupInfo,X_Field,Y\ndesc,not-a-number,33.95\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { column, value, .. } => {
                assert_eq!(column, "X_Field");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_row_reads_missing_fields_as_blank() {
        // Row has no latitude cell at all; it reads as 0.0, and with a
        // real longitude the row is kept.
        let bins = load("PopupInfo,X_Field,Y\ndesc,10.0\n").unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].lat, 0.0);
    }

    #[test]
    fn header_order_does_not_matter() {
        let bins = load("Y,X_Field,Name,PopupInfo\n33.95,-83.37,Gate,by the gate\n").unwrap();
        assert_eq!(bins[0].lat, 33.95);
        assert_eq!(bins[0].lng, -83.37);
        assert_eq!(bins[0].name, "Gate");
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let bins = load("Name,PopupInfo,X_Field,Y\n  Gate , by the gate , -83.37 , 33.95 \n")
            .unwrap();
        assert_eq!(bins[0].name, "Gate");
        assert_eq!(bins[0].description, "by the gate");
        assert_eq!(bins[0].lng, -83.37);
    }

    #[test]
    fn unreadable_file_fails() {
        let err = load_bins(Path::new("/nonexistent/bins.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn load_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Name,PopupInfo,X_Field,Y\n,desc,-83.37,33.95\n").unwrap();

        let bins = load_bins(file.path()).unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].name, "Compost Bin 1");
    }
}
