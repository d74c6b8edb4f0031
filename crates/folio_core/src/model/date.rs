//! `YYYY-MM` date strings and the ordering contract built on them.
//!
//! # Invariants
//! - Ordering is lexical on the raw string. Conforming values sort
//!   chronologically; non-conforming values keep their lexical position and
//!   are only reported, never rejected.

use std::cmp::Ordering;

/// Returns whether `value` has the exact `YYYY-MM` shape with month `01..=12`.
pub fn is_year_month(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) || !bytes[5..].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    let month = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    (1..=12).contains(&month)
}

/// Newest-first comparison used by every date-sorted aggregator.
pub fn newest_first(left: &str, right: &str) -> Ordering {
    right.cmp(left)
}

/// Stable, newest-first sort of records keyed by a `YYYY-MM` string.
///
/// Records sharing a date keep their source order.
pub fn sort_newest_first<T>(items: &mut [T], date: impl Fn(&T) -> &str) {
    items.sort_by(|left, right| newest_first(date(left), date(right)));
}

#[cfg(test)]
mod tests {
    use super::{is_year_month, sort_newest_first};

    #[test]
    fn year_month_shape_is_validated() {
        assert!(is_year_month("2024-01"));
        assert!(is_year_month("1999-12"));
        assert!(!is_year_month("2024-13"));
        assert!(!is_year_month("2024-00"));
        assert!(!is_year_month("2024-1"));
        assert!(!is_year_month("2024/01"));
        assert!(!is_year_month("2024-01-05"));
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut items = vec![("a", "2023-05"), ("b", "2024-01"), ("c", "2023-05")];
        sort_newest_first(&mut items, |item| item.1);
        let ids = items.iter().map(|item| item.0).collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
