//! Comparative plots of graph-spanner benchmark reports against the
//! asymptotic bounds of the algorithms that produced them.

pub mod analysis;
pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod state;
pub mod ui;

pub use config::{PipelineConfig, ReportKind};
pub use error::ReportError;
pub use pipeline::{OutputSink, ReportPipeline, RunSummary};
