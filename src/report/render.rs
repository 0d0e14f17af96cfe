use tabled::{settings::Style, Table, Tabled};

use super::Report;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn format_money(value: f64, currency_symbol: &str) -> String {
    // Avoid printing "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{currency_symbol}{value:.2}")
}

/// Render the report as a Markdown pipe table with one row per metric
pub fn render_table(report: &Report, currency_symbol: &str) -> String {
    let money = |value| format_money(value, currency_symbol);

    let rows = vec![
        SummaryRow {
            description: "Quarter",
            amount: format!("{}-Q{}", report.year, report.quarter),
        },
        SummaryRow {
            description: "Total amount billed",
            amount: money(report.total_billed),
        },
        SummaryRow {
            description: "Exact amount billed ex BTW",
            amount: money(report.total_billed_ex_btw),
        },
        SummaryRow {
            description: "Total BTW amount over invoices",
            amount: money(report.total_btw_invoices),
        },
        SummaryRow {
            description: "Total expenses",
            amount: money(report.total_expenses),
        },
        SummaryRow {
            description: "BTW paid over these expenses",
            amount: money(report.total_btw_expenses),
        },
        SummaryRow {
            description: "Total BTW difference",
            amount: money(report.total_difference),
        },
    ];

    Table::new(rows).with(Style::markdown()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_rows(table: &str) -> Vec<(String, String)> {
        table
            .lines()
            .skip(2)
            .map(|line| {
                let cells: Vec<String> = line
                    .trim_matches('|')
                    .split('|')
                    .map(|c| c.trim().to_string())
                    .collect();
                (cells[0].clone(), cells[1].clone())
            })
            .collect()
    }

    #[test]
    fn test_fixed_rows_in_order() {
        let report = Report {
            year: 2024,
            quarter: 1,
            total_billed: 121.0,
            total_billed_ex_btw: 100.0,
            total_btw_invoices: 21.0,
            total_expenses: 100.0,
            total_btw_expenses: 21.0,
            total_difference: 0.0,
        };

        let table = render_table(&report, "€");
        let header = table.lines().next().unwrap();
        assert!(header.contains("Description"));
        assert!(header.contains("Amount"));

        let rows = data_rows(&table);
        let expected = [
            ("Quarter", "2024-Q1"),
            ("Total amount billed", "€121.00"),
            ("Exact amount billed ex BTW", "€100.00"),
            ("Total BTW amount over invoices", "€21.00"),
            ("Total expenses", "€100.00"),
            ("BTW paid over these expenses", "€21.00"),
            ("Total BTW difference", "€0.00"),
        ];
        assert_eq!(rows.len(), expected.len());
        for ((desc, amount), (want_desc, want_amount)) in rows.iter().zip(expected) {
            assert_eq!(desc, want_desc);
            assert_eq!(amount, want_amount);
        }
    }

    #[test]
    fn test_empty_report_still_has_seven_rows() {
        let table = render_table(&Report::new(2023, 4), "€");
        let rows = data_rows(&table);
        assert_eq!(rows.len(), 7);
        assert!(rows[1..].iter().all(|(_, amount)| amount == "€0.00"));
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_money(1234.5, "€"), "€1234.50");
        assert_eq!(format_money(-5.0, "€"), "€-5.00");
        assert_eq!(format_money(-0.0, "$"), "$0.00");
        assert_eq!(format_money(0.126, "€"), "€0.13");
    }
}
