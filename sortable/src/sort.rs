//! Pure ordering model behind the sortable table.
//!
//! Everything in this module is DOM-free and runs under native `cargo test`.
//! The DOM layers in [`crate::header`] and [`crate::table`] translate clicks
//! and row elements into these types and back.

use std::cmp::Ordering;

/// Direction a column is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn invert(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Tri-state sort status of a single column header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortState {
    /// The column is not driving the row order.
    #[default]
    Unsorted,
    /// The column is sorted smallest-first.
    Ascending,
    /// The column is sorted largest-first.
    Descending,
}

impl SortState {
    /// The sort direction, if the column is sorted at all.
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending => Some(SortDirection::Ascending),
            SortState::Descending => Some(SortDirection::Descending),
        }
    }
}

impl From<SortDirection> for SortState {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortState::Ascending,
            SortDirection::Descending => SortState::Descending,
        }
    }
}

/// Comparable value extracted from one row for one column.
///
/// Keys order as `Missing < Number < Text`. The cross-variant rule is
/// deliberate: a row with a malformed or absent cell gets a deterministic
/// place in the order instead of an error. Numbers compare via
/// [`f64::total_cmp`], so NaN has a fixed position too. Text compares
/// lexicographically by Unicode scalar value, which is exactly what makes
/// ISO-8601 date strings sort chronologically without parsing them.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// The row has no usable value in this column.
    Missing,
    /// A numeric value, e.g. a file size in bytes.
    Number(f64),
    /// A textual value, e.g. a file name or an ISO-8601 timestamp.
    Text(String),
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::{Missing, Number, Text};
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Less,
            (_, Missing) => Ordering::Greater,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Derived PartialEq would disagree with total_cmp on NaN, so equality is
// defined through the ordering instead.
impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Direction the next click on a header should apply.
///
/// Clicking the header that is already driving the sort inverts it. Clicking
/// any other header, or a header of an unsorted table, starts ascending.
pub fn next_direction(current: SortState, clicked_is_active: bool) -> SortDirection {
    match current.direction() {
        Some(direction) if clicked_is_active => direction.invert(),
        _ => SortDirection::Ascending,
    }
}

/// Stable row permutation sorting `keys` in `direction`.
///
/// Returns the indices of `keys` in sorted order. Rows with equal keys keep
/// their relative positions in both directions; descending inverts each
/// comparison rather than reversing the whole ascending order, so ties never
/// flip.
pub fn sorted_order(keys: &[SortKey], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = keys[a].cmp(&keys[b]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(values: &[f64]) -> Vec<SortKey> {
        values.iter().map(|&value| SortKey::Number(value)).collect()
    }

    fn texts(values: &[&str]) -> Vec<SortKey> {
        values.iter().map(|&value| SortKey::Text(value.into())).collect()
    }

    #[test]
    fn invert_swaps_directions() {
        assert_eq!(SortDirection::Ascending.invert(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.invert(), SortDirection::Ascending);
    }

    #[test]
    fn state_exposes_direction() {
        assert_eq!(SortState::Unsorted.direction(), None);
        assert_eq!(SortState::Ascending.direction(), Some(SortDirection::Ascending));
        assert_eq!(SortState::Descending.direction(), Some(SortDirection::Descending));
        assert_eq!(SortState::from(SortDirection::Descending), SortState::Descending);
        assert_eq!(SortState::default(), SortState::Unsorted);
    }

    #[test]
    fn next_direction_full_truth_table() {
        use SortDirection::{Ascending, Descending};
        assert_eq!(next_direction(SortState::Unsorted, false), Ascending);
        assert_eq!(next_direction(SortState::Unsorted, true), Ascending);
        assert_eq!(next_direction(SortState::Ascending, true), Descending);
        assert_eq!(next_direction(SortState::Descending, true), Ascending);
        assert_eq!(next_direction(SortState::Ascending, false), Ascending);
        assert_eq!(next_direction(SortState::Descending, false), Ascending);
    }

    #[test]
    fn missing_sorts_before_numbers_before_text() {
        let keys = vec![
            SortKey::Text("b".into()),
            SortKey::Missing,
            SortKey::Number(7.0),
        ];
        assert_eq!(sorted_order(&keys, SortDirection::Ascending), vec![1, 2, 0]);
        assert_eq!(sorted_order(&keys, SortDirection::Descending), vec![0, 2, 1]);
    }

    #[test]
    fn nan_has_a_fixed_position() {
        let keys = numbers(&[f64::NAN, 1.0, f64::NAN, 0.0]);
        // total_cmp puts positive NaN above +infinity; the two NaNs are
        // equal and keep their original relative order.
        assert_eq!(sorted_order(&keys, SortDirection::Ascending), vec![3, 1, 0, 2]);
        assert_eq!(SortKey::Number(f64::NAN), SortKey::Number(f64::NAN));
        assert!(SortKey::Number(f64::NAN) > SortKey::Number(f64::INFINITY));
    }

    #[test]
    fn iso_dates_sort_chronologically_as_text() {
        let keys = texts(&[
            "2020-01-15T10:00:00",
            "2019-06-01T09:30:00",
            "2021-03-20T18:45:00",
        ]);
        assert_eq!(sorted_order(&keys, SortDirection::Ascending), vec![1, 0, 2]);
        assert_eq!(sorted_order(&keys, SortDirection::Descending), vec![2, 0, 1]);
    }

    #[test]
    fn equal_keys_keep_document_order_both_directions() {
        // Three rows with sizes 100, 50, 50: the two 50s must stay in their
        // original relative order whichever way the column is sorted.
        let keys = numbers(&[100.0, 50.0, 50.0]);
        assert_eq!(sorted_order(&keys, SortDirection::Ascending), vec![1, 2, 0]);
        assert_eq!(sorted_order(&keys, SortDirection::Descending), vec![0, 1, 2]);
    }

    #[test]
    fn toggling_to_descending_does_not_flip_ties() {
        let keys = numbers(&[100.0, 50.0, 50.0]);
        let ascending = sorted_order(&keys, SortDirection::Ascending);
        assert_eq!(ascending, vec![1, 2, 0]);

        // The second sort runs over the rows as the first one left them.
        let requeried: Vec<SortKey> =
            ascending.iter().map(|&index| keys[index].clone()).collect();
        let descending = sorted_order(&requeried, SortDirection::Descending);
        assert_eq!(descending, vec![2, 0, 1]);

        // Composed back to the original rows: the 100 leads and the tied
        // 50s sit in document order, not reversed.
        let composed: Vec<usize> =
            descending.iter().map(|&index| ascending[index]).collect();
        assert_eq!(composed, vec![0, 1, 2]);
    }

    #[test]
    fn distinct_keys_reverse_exactly() {
        let keys = numbers(&[3.0, 1.0, 2.0]);
        let ascending = sorted_order(&keys, SortDirection::Ascending);
        let mut reversed = sorted_order(&keys, SortDirection::Descending);
        reversed.reverse();
        assert_eq!(ascending, vec![1, 2, 0]);
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn output_is_a_permutation() {
        let keys = texts(&["pear", "apple", "apple", "quince", "fig"]);
        let mut order = sorted_order(&keys, SortDirection::Descending);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        let keys = numbers(&[4.0, 2.0, 2.0, 9.0]);
        let order = sorted_order(&keys, SortDirection::Ascending);
        let sorted: Vec<SortKey> = order.iter().map(|&index| keys[index].clone()).collect();
        assert_eq!(
            sorted_order(&sorted, SortDirection::Ascending),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn empty_and_single_row_tables() {
        assert_eq!(sorted_order(&[], SortDirection::Ascending), Vec::<usize>::new());
        assert_eq!(sorted_order(&numbers(&[1.0]), SortDirection::Descending), vec![0]);
    }
}
