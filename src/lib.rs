pub mod api;
pub mod config;
pub mod error;
pub mod quarter;
pub mod report;

pub use api::{ApiClient, Endpoint, Expense, Invoice};
pub use config::{load_settings, ApiConfig, Settings};
pub use error::{ReportError, Result};
pub use quarter::{quarter_range, QuarterRange};
pub use report::{aggregate, default_output_path, render_table, write_report, Report};
