//! Analysis of a Rhodamine 6G efflux assay and a yeast two-hybrid
//! beta-galactosidase reporter assay.
//!
//! Both datasets are literal constants. Each pipeline is a short chain of
//! pure functions: load, transform, summarize, and draw bar charts as PNG
//! files or in a viewer window.

pub mod analysis;
pub mod app;
pub mod chart;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod ui;

pub use error::{AnalysisError, Result};
