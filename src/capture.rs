//! Loading and filtering of the raw capture dump exported from Wireshark.

use std::{fs, path::Path};

use anyhow::Context;

use crate::error::{ParseRecordError, RazercapError};

// Columns of interest in the tab-separated dump.
const TIMESTAMP_COLUMN: usize = 1;
const PAYLOAD_COLUMN: usize = 6;

/// One row of the raw capture dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRecord {
    timestamp: i64,
    payload: String,
}

impl CaptureRecord {
    /// Capture time in whole seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Hex dump of the control transfer data.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    fn parse_line(line_no: usize, line: &str) -> Result<Self, ParseRecordError> {
        let columns: Vec<&str> = line.split('\t').collect();

        // Wireshark stamps rows with fractional seconds while annotations use
        // whole seconds, so the timestamp truncates toward zero.
        let field = column(&columns, line_no, TIMESTAMP_COLUMN)?;
        #[allow(clippy::cast_possible_truncation)]
        let timestamp = field
            .parse::<f64>()
            .map_err(|_| ParseRecordError::InvalidTimestamp {
                line: line_no,
                value: field.to_string(),
            })? as i64;

        let payload = column(&columns, line_no, PAYLOAD_COLUMN)?.to_string();

        Ok(CaptureRecord { timestamp, payload })
    }
}

/// The full capture dump held in memory, in file order.
#[derive(Debug, Default)]
pub struct CaptureLog {
    records: Vec<CaptureRecord>,
}

impl CaptureLog {
    /// Reads the dump from a tab-separated file without a header row.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RazercapError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to open capture dump {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Parses the dump from already-loaded text. A malformed row fails the
    /// whole load, there are no partial results.
    pub fn parse(contents: &str) -> Result<Self, RazercapError> {
        let records = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| CaptureRecord::parse_line(index + 1, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CaptureLog { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All frames captured during the given second, in capture order.
    pub fn frames_at(&self, timestamp: i64) -> impl Iterator<Item = &CaptureRecord> {
        self.records
            .iter()
            .filter(move |record| record.timestamp == timestamp)
    }
}

fn column<'a>(
    columns: &[&'a str],
    line_no: usize,
    index: usize,
) -> Result<&'a str, ParseRecordError> {
    columns
        .get(index)
        .map(|field| field.trim())
        .ok_or(ParseRecordError::MissingColumn {
            line: line_no,
            column: index,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
4\t100.336171\thost\t1.5.0\tUSB\t90\t001f000000040d0201020000\n\
5\t100.836171\t1.5.0\thost\tUSB\t90\t021f000000040d0201020000\n\
6\t107.221054\thost\t1.5.0\tUSB\t90\t001f000000010d8400\n";

    #[test]
    fn test_parse_record() {
        assert_eq!(
            Ok(CaptureRecord {
                timestamp: 100,
                payload: String::from("001f000000040d0201020000"),
            }),
            CaptureRecord::parse_line(1, "4\t100.336171\thost\t1.5.0\tUSB\t90\t001f000000040d0201020000")
        );
    }

    #[test]
    fn test_parse_whole_second_timestamp() {
        let record = CaptureRecord::parse_line(1, "4\t100\ta\tb\tc\td\tff").unwrap();

        assert_eq!(100, record.timestamp());
    }

    #[test]
    fn test_parse_missing_payload_column() {
        assert_eq!(
            Err(ParseRecordError::MissingColumn { line: 3, column: 6 }),
            CaptureRecord::parse_line(3, "4\t100.3\thost")
        );
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        assert_eq!(
            Err(ParseRecordError::InvalidTimestamp {
                line: 2,
                value: String::from("when?"),
            }),
            CaptureRecord::parse_line(2, "4\twhen?\ta\tb\tc\td\tff")
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let log = CaptureLog::parse("\n4\t100.3\ta\tb\tc\td\tff\n\n").unwrap();

        assert_eq!(1, log.len());
    }

    #[test]
    fn test_frames_at_keeps_capture_order() {
        let log = CaptureLog::parse(DUMP).unwrap();

        let payloads: Vec<&str> = log.frames_at(100).map(CaptureRecord::payload).collect();
        assert_eq!(
            vec!["001f000000040d0201020000", "021f000000040d0201020000"],
            payloads
        );
    }

    #[test]
    fn test_frames_at_matches_exactly() {
        let log = CaptureLog::parse(DUMP).unwrap();

        assert_eq!(1, log.frames_at(107).count());
        assert_eq!(0, log.frames_at(106).count());
    }
}
