//! Reporting and plotting helpers.
//!
//! `plots` converts task data into `plotly::Plot` values, `traces` holds the
//! trace types the dashboard needs beyond the bundled ones, and `html`
//! assembles the final page.
pub mod html;
pub mod palette;
pub mod plots;
pub mod traces;

pub use html::{Report, ReportSection, SectionBlock};
