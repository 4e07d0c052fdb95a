//! Loading of the human-authored annotation list.

use std::{fs, path::Path};

use anyhow::Context;

use crate::error::{ParseRecordError, RazercapError};

/// A timestamped label marking an event of interest within the capture window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    timestamp: i64,
    description: String,
}

impl Annotation {
    /// Time of the event in whole seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn parse_line(line_no: usize, line: &str) -> Result<Self, ParseRecordError> {
        // Everything after the first space belongs to the description.
        let (timestamp, description) =
            line.split_once(' ')
                .ok_or(ParseRecordError::MissingColumn {
                    line: line_no,
                    column: 1,
                })?;

        let timestamp =
            timestamp
                .parse::<i64>()
                .map_err(|_| ParseRecordError::InvalidTimestamp {
                    line: line_no,
                    value: timestamp.to_string(),
                })?;

        Ok(Annotation {
            timestamp,
            description: description.trim().to_string(),
        })
    }
}

/// All annotations held in memory, in file order.
#[derive(Debug, Default)]
pub struct AnnotationList {
    annotations: Vec<Annotation>,
}

impl AnnotationList {
    /// Reads the annotations from a space-separated file without a header row.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RazercapError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to open annotation list {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Parses the annotations from already-loaded text. A malformed row fails
    /// the whole load, there are no partial results.
    pub fn parse(contents: &str) -> Result<Self, RazercapError> {
        let annotations = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| Annotation::parse_line(index + 1, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnnotationList { annotations })
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotation() {
        assert_eq!(
            Ok(Annotation {
                timestamp: 100,
                description: String::from("balanced"),
            }),
            Annotation::parse_line(1, "100 balanced")
        );
    }

    #[test]
    fn test_parse_description_with_spaces() {
        let annotation = Annotation::parse_line(1, "107 fan speed to 5000 rpm").unwrap();

        assert_eq!(107, annotation.timestamp());
        assert_eq!("fan speed to 5000 rpm", annotation.description());
    }

    #[test]
    fn test_parse_missing_description() {
        assert_eq!(
            Err(ParseRecordError::MissingColumn { line: 4, column: 1 }),
            Annotation::parse_line(4, "100")
        );
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        assert_eq!(
            Err(ParseRecordError::InvalidTimestamp {
                line: 1,
                value: String::from("around-noon"),
            }),
            Annotation::parse_line(1, "around-noon balanced")
        );
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let list = AnnotationList::parse("107 silent\n100 balanced\n").unwrap();

        let timestamps: Vec<i64> = list.iter().map(Annotation::timestamp).collect();
        assert_eq!(vec![107, 100], timestamps);
    }
}
