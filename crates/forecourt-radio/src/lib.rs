//! Forecourt-Radio marketing site: page rendering, enquiry submission, and the mail relay seam.

pub mod config;
pub mod enquiry;
pub mod error;
pub mod site;
pub mod telemetry;
