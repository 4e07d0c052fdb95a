//! Program arguments and acquisition of the input tables.

use const_format::formatcp;
use std::{
    fmt,
    path::{Path, PathBuf},
    process::exit,
};

use crate::{annotations::AnnotationList, capture::CaptureLog, error::RazercapError};

/// Directory the capture exports live in.
pub const DATA_DIR: &str = "data";
pub const DEFAULT_CAPTURE_PATH: &str = formatcp!("{}/wireshark_dump_raw.csv", DATA_DIR);
pub const DEFAULT_ANNOTATIONS_PATH: &str = formatcp!("{}/annotations.csv", DATA_DIR);

/// Necessary settings to produce a report.
#[derive(Debug)]
pub struct ProgramArgs {
    /// Path to the raw capture dump.
    capture: PathBuf,
    /// Path to the annotation list.
    annotations: PathBuf,
}

/// The two input tables loaded into memory.
pub struct ProgramResources {
    pub capture: CaptureLog,
    pub annotations: AnnotationList,
}

impl fmt::Display for ProgramArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capture dump: {}", self.capture.display())?;
        write!(f, "Annotation list: {}", self.annotations.display())
    }
}

/// Print CLI usage and then exit with an error.
fn exit_usage() -> ! {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| String::from("<unknown>"));
    let usage = format!("Usage: {} [--capture FILE] [--annotations FILE]", program);
    eprintln!("{}", usage);
    exit(1)
}

impl ProgramArgs {
    pub fn capture(&self) -> &Path {
        &self.capture
    }

    pub fn annotations(&self) -> &Path {
        &self.annotations
    }

    /// Construct the [`ProgramArgs`] by parsing command line arguments.
    /// Exits the program if they cannot be parsed correctly.
    pub fn get() -> Self {
        // Get command line arguments, skipping the program name.
        let mut args = std::env::args().skip(1);
        let mut capture: Option<PathBuf> = None;
        let mut annotations: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--capture" => {
                    capture = Some(args.next().unwrap_or_else(|| exit_usage()).into());
                }
                "--annotations" => {
                    annotations = Some(args.next().unwrap_or_else(|| exit_usage()).into());
                }
                _ => {
                    log::error!("Unknown argument: {}", arg);
                    exit_usage();
                }
            }
        }

        Self {
            capture: capture.unwrap_or_else(|| DEFAULT_CAPTURE_PATH.into()),
            annotations: annotations.unwrap_or_else(|| DEFAULT_ANNOTATIONS_PATH.into()),
        }
    }

    /// Loads the two input tables given in the program arguments.
    pub fn acquire_resources(&self) -> Result<ProgramResources, RazercapError> {
        log::trace!("Entering ProgramArgs::acquire_resources.");
        log::info!("Trying to acquire program resources.");

        let capture = CaptureLog::from_file(self.capture())?;
        log::info!(
            "Loaded {} capture records from {}.",
            capture.len(),
            self.capture().display()
        );

        let annotations = AnnotationList::from_file(self.annotations())?;
        log::info!(
            "Loaded {} annotations from {}.",
            annotations.len(),
            self.annotations().display()
        );

        log::trace!("Leaving ProgramArgs::acquire_resources.");
        Ok(ProgramResources {
            capture,
            annotations,
        })
    }
}
