/// Data layer: report types, loading, and series projection.
///
/// Architecture:
/// ```text
///  {reports_dir}/*{report_id}*
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  discover + parse file → Report
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Report   │  Vec<RunRecord>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  project two fields → Series
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod series;
