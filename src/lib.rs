#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::uninlined_format_args,
    clippy::missing_errors_doc
)]

pub mod annotations;
pub mod capture;
pub mod cli;
pub mod error;
pub mod frame;
pub mod report;
