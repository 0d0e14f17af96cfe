mod aggregate;
mod render;
mod writer;

pub use aggregate::aggregate;
pub use render::render_table;
pub use writer::{default_output_path, write_report};

/// Quarterly totals accumulated from invoices and expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub year: i32,
    pub quarter: u32,
    pub total_billed: f64,
    pub total_billed_ex_btw: f64,
    pub total_btw_invoices: f64,
    pub total_expenses: f64,
    pub total_btw_expenses: f64,
    pub total_difference: f64,
}

impl Report {
    pub fn new(year: i32, quarter: u32) -> Self {
        Self {
            year,
            quarter,
            ..Default::default()
        }
    }
}
