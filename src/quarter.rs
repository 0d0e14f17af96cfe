use chrono::NaiveDate;

use crate::error::{ReportError, Result};

/// Inclusive date bounds of a fiscal quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterRange {
    pub year: i32,
    pub quarter: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QuarterRange {
    /// Whether `date` falls within the quarter, both bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Label in the form "2024-Q1"
    pub fn label(&self) -> String {
        format!("{}-Q{}", self.year, self.quarter)
    }
}

/// Compute the start and end dates of `quarter` (1-4) in `year`
pub fn quarter_range(year: i32, quarter: u32) -> Result<QuarterRange> {
    let (start_month, end_month, end_day) = match quarter {
        1 => (1, 3, 31),
        2 => (4, 6, 30),
        3 => (7, 9, 30),
        4 => (10, 12, 31),
        _ => return Err(ReportError::InvalidQuarter(quarter)),
    };

    let date = |month, day| {
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ReportError::InvalidYear(year))
    };

    Ok(QuarterRange {
        year,
        quarter,
        start: date(start_month, 1)?,
        end: date(end_month, end_day)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_boundaries() {
        let q1 = quarter_range(2024, 1).unwrap();
        assert_eq!((q1.start, q1.end), (ymd(2024, 1, 1), ymd(2024, 3, 31)));

        let q2 = quarter_range(2024, 2).unwrap();
        assert_eq!((q2.start, q2.end), (ymd(2024, 4, 1), ymd(2024, 6, 30)));

        let q3 = quarter_range(2024, 3).unwrap();
        assert_eq!((q3.start, q3.end), (ymd(2024, 7, 1), ymd(2024, 9, 30)));

        let q4 = quarter_range(2024, 4).unwrap();
        assert_eq!((q4.start, q4.end), (ymd(2024, 10, 1), ymd(2024, 12, 31)));
    }

    #[test]
    fn test_quarters_are_contiguous_within_year() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            let ranges: Vec<_> = (1..=4).map(|q| quarter_range(year, q).unwrap()).collect();

            assert_eq!(ranges[0].start, ymd(year, 1, 1));
            assert_eq!(ranges[3].end, ymd(year, 12, 31));

            for range in &ranges {
                assert!(range.start <= range.end);
                assert_eq!(range.start.format("%Y").to_string(), year.to_string());
                assert_eq!(range.end.format("%Y").to_string(), year.to_string());
            }

            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
            }
        }
    }

    #[test]
    fn test_out_of_range_quarter() {
        for quarter in [0, 5, 42] {
            let err = quarter_range(2024, quarter).unwrap_err();
            assert!(matches!(err, ReportError::InvalidQuarter(q) if q == quarter));
        }
    }

    #[test]
    fn test_year_outside_date_range() {
        let err = quarter_range(300_000, 1).unwrap_err();
        assert!(matches!(err, ReportError::InvalidYear(300_000)));
        assert!(err.to_string().contains("Year 300000"));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let q2 = quarter_range(2023, 2).unwrap();
        assert!(q2.contains(ymd(2023, 4, 1)));
        assert!(q2.contains(ymd(2023, 6, 30)));
        assert!(!q2.contains(ymd(2023, 3, 31)));
        assert!(!q2.contains(ymd(2023, 7, 1)));
        assert_eq!(q2.label(), "2023-Q2");
    }
}
