use chrono::NaiveDate;
use tracing::debug;

use super::Report;
use crate::api::{Expense, Invoice};
use crate::error::{ReportError, Result};
use crate::quarter::QuarterRange;

/// The only expense tax rate that is reclaimed
pub(crate) const BTW_RATE_PERCENT: f64 = 21.0;
pub(crate) const BTW_RATE: f64 = 0.21;

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ReportError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

impl Report {
    /// Add every invoice dated within `range` to the billed and BTW totals
    pub fn add_invoices(&mut self, invoices: &[Invoice], range: &QuarterRange) -> Result<()> {
        let mut skipped = 0usize;

        for invoice in invoices {
            if !range.contains(parse_date(&invoice.date)?) {
                skipped += 1;
                continue;
            }

            let btw = invoice.total_taxes;
            self.total_billed += invoice.amount;
            self.total_billed_ex_btw += invoice.amount - btw;
            self.total_btw_invoices += btw;
        }

        debug!(
            total = invoices.len(),
            skipped, "invoices outside {} ignored", range.label()
        );
        Ok(())
    }

    /// Add every expense dated within `range` to the expense totals.
    /// Only expenses taxed at exactly 21% count towards the paid BTW.
    pub fn add_expenses(&mut self, expenses: &[Expense], range: &QuarterRange) -> Result<()> {
        let mut skipped = 0usize;

        for expense in expenses {
            if !range.contains(parse_date(&expense.date)?) {
                skipped += 1;
                continue;
            }

            if expense.tax_rate1 == BTW_RATE_PERCENT {
                self.total_btw_expenses += expense.amount * BTW_RATE;
            } else if expense.tax_rate1 != 0.0 {
                debug!(
                    date = %expense.date,
                    rate = expense.tax_rate1,
                    "expense tax rate is not 21%, no BTW counted"
                );
            }

            self.total_expenses += expense.amount;
        }

        debug!(
            total = expenses.len(),
            skipped, "expenses outside {} ignored", range.label()
        );
        Ok(())
    }

    /// Recompute the BTW difference from the current totals
    pub fn finish(&mut self) {
        self.total_difference = self.total_btw_invoices - self.total_btw_expenses;
    }
}

/// Build the report for `range` from fetched invoices and expenses
pub fn aggregate(
    range: &QuarterRange,
    invoices: &[Invoice],
    expenses: &[Expense],
) -> Result<Report> {
    let mut report = Report::new(range.year, range.quarter);
    report.add_invoices(invoices, range)?;
    report.add_expenses(expenses, range)?;
    report.finish();
    Ok(report)
}
