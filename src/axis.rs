//! Date axis for the timeline chart.
//!
//! The renderer draws one gridline per calendar day, so the axis must contain
//! every day of the padded display range with no gaps; weekend emphasis
//! downstream depends on it.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::rows::Row;

/// Padded date range spanned by a non-empty set of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl AxisBounds {
    /// Earliest start and latest end across `rows`, widened by one day on each
    /// side. Returns `None` when there are no rows to bound.
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let min = rows.iter().map(|r| r.start_date).min()?;
        let max = rows.iter().map(|r| r.end_date).max()?;
        Some(AxisBounds {
            min: min.checked_sub_days(Days::new(1)).unwrap_or(min),
            max: max.checked_add_days(Days::new(1)).unwrap_or(max),
        })
    }

    /// Number of ticks in the range, both ends included.
    pub fn day_count(&self) -> usize {
        ((self.max - self.min).num_days() + 1) as usize
    }

    /// One tick per calendar day from `min` through `max`.
    pub fn ticks(&self) -> Vec<NaiveDate> {
        let max = self.max;
        self.min.iter_days().take_while(|d| *d <= max).collect()
    }
}

/// Axis ticks for `rows`. Callers guard against empty input; an empty row set
/// yields no ticks.
pub fn build_ticks(rows: &[Row]) -> Vec<NaiveDate> {
    AxisBounds::from_rows(rows)
        .map(|bounds| bounds.ticks())
        .unwrap_or_default()
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::RowKind;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn row(id: &str, start: &str, end: &str) -> Row {
        Row {
            id: id.to_string(),
            display_name: id.to_string(),
            kind: RowKind::Task,
            start_date: date(start),
            end_date: date(end),
            progress: None,
        }
    }

    #[test]
    fn test_ticks_padded_across_leap_day() {
        let ticks = build_ticks(&[row("T1", "2024-03-01", "2024-03-03")]);
        assert_eq!(
            ticks,
            vec![
                date("2024-02-29"),
                date("2024-03-01"),
                date("2024-03-02"),
                date("2024-03-03"),
                date("2024-03-04"),
            ]
        );
    }

    #[test]
    fn test_bounds_use_min_start_and_max_end() {
        let rows = vec![
            row("T1", "2024-01-10", "2024-01-12"),
            row("T2", "2024-01-05", "2024-01-06"),
            row("T3", "2024-01-08", "2024-01-20"),
        ];
        let bounds = AxisBounds::from_rows(&rows).unwrap();
        assert_eq!(bounds.min, date("2024-01-04"));
        assert_eq!(bounds.max, date("2024-01-21"));
        assert_eq!(bounds.day_count(), 18);
    }

    #[test]
    fn test_tick_density_has_no_gaps() {
        let rows = vec![row("T1", "2023-12-20", "2024-01-15"), row("T2", "2024-02-01", "2024-03-10")];
        let bounds = AxisBounds::from_rows(&rows).unwrap();
        let ticks = bounds.ticks();
        assert_eq!(ticks.len(), bounds.day_count());
        assert_eq!(ticks.first(), Some(&date("2023-12-19")));
        assert_eq!(ticks.last(), Some(&date("2024-03-11")));
        for pair in ticks.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn test_zero_length_row_gets_three_ticks() {
        let ticks = build_ticks(&[row("T1", "2024-06-15", "2024-06-15")]);
        assert_eq!(ticks.len(), 3);
    }

    #[test]
    fn test_empty_rows_have_no_bounds() {
        assert_eq!(AxisBounds::from_rows(&[]), None);
        assert!(build_ticks(&[]).is_empty());
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date("2024-03-02")));
        assert!(is_weekend(date("2024-03-03")));
        assert!(!is_weekend(date("2024-03-04")));
        assert!(!is_weekend(date("2024-03-01")));
    }
}
