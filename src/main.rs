use std::result::Result;

use razercap_rs::cli::{ProgramArgs, ProgramResources};
use razercap_rs::error::RazercapError;
use razercap_rs::frame::Frame;
use razercap_rs::report::Report;

/// Correlate the capture dump with the annotations and print the report.
fn main() -> Result<(), RazercapError> {
    env_logger::init();

    let args = ProgramArgs::get();
    log::info!("Using arguments:\n{}", args);

    let ProgramResources {
        capture,
        annotations,
    } = args.acquire_resources()?;

    let mut report = Report::new();
    for annotation in annotations.iter() {
        report.push_annotation(annotation.description());
        for record in capture.frames_at(annotation.timestamp()) {
            let frame = Frame::try_decode(record.payload())?;
            log::debug!("Decoded frame at {}: {}", record.timestamp(), frame);
            report.push_frame(frame);
        }
    }

    print!("{}", report);
    Ok(())
}
