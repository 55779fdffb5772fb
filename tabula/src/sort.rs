//! Sort descriptors and header sort actions.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::record::TableRecord;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// One sorted column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub column: String,
    pub direction: SortDirection,
}

/// A header sort action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    Ascending,
    Descending,
    Clear,
}

impl SortAction {
    /// The direction this action leaves the column in.
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            SortAction::Ascending => Some(SortDirection::Ascending),
            SortAction::Descending => Some(SortDirection::Descending),
            SortAction::Clear => None,
        }
    }

    /// Whether the action would change a column currently sorted `current`.
    ///
    /// A direction cannot be re-applied and there is nothing to clear on an
    /// unsorted column.
    pub fn is_enabled(self, current: Option<SortDirection>) -> bool {
        self.direction() != current
    }
}

/// The active sort descriptors, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    descriptors: Vec<SortDescriptor>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active descriptors.
    pub fn descriptors(&self) -> &[SortDescriptor] {
        &self.descriptors
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Current direction of a column.
    pub fn direction(&self, column: &str) -> Option<SortDirection> {
        self.descriptors
            .iter()
            .find(|d| d.column == column)
            .map(|d| d.direction)
    }

    /// Priority of a column (0 = primary).
    pub fn priority(&self, column: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.column == column)
    }

    /// Set or clear the direction of a column.
    ///
    /// With `multi` false, any other column's sort is dropped. Returns true if
    /// the state changed.
    pub fn set(&mut self, column: &str, direction: Option<SortDirection>, multi: bool) -> bool {
        let before = self.descriptors.clone();
        match direction {
            None => self.descriptors.retain(|d| d.column != column),
            Some(direction) => {
                if !multi {
                    self.descriptors.retain(|d| d.column == column);
                }
                match self.descriptors.iter_mut().find(|d| d.column == column) {
                    Some(existing) => existing.direction = direction,
                    None => self.descriptors.push(SortDescriptor {
                        column: column.to_string(),
                        direction,
                    }),
                }
            }
        }
        self.descriptors != before
    }

    /// Next direction in the header click cycle: none, ascending, descending.
    pub fn next_direction(&self, column: &str) -> Option<SortDirection> {
        match self.direction(column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.descriptors.is_empty();
        self.descriptors.clear();
        changed
    }

    /// Compare two rows given a cell accessor, descriptor by descriptor.
    pub fn compare<F>(&self, mut cell: F, a: usize, b: usize) -> Ordering
    where
        F: FnMut(usize, &str) -> CellValue,
    {
        compare_by(&self.descriptors, |column| (cell(a, column), cell(b, column)))
    }
}

/// Compare two cells for one sorted column.
///
/// Empty cells stay last whatever the direction.
pub fn compare_cells(direction: SortDirection, left: &CellValue, right: &CellValue) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => direction.apply(left.sort_cmp(right)),
    }
}

fn compare_by<F>(descriptors: &[SortDescriptor], mut cells: F) -> Ordering
where
    F: FnMut(&str) -> (CellValue, CellValue),
{
    for descriptor in descriptors {
        let (left, right) = cells(&descriptor.column);
        let ordering = compare_cells(descriptor.direction, &left, &right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Compare two records under a list of sort descriptors, highest priority
/// first.
///
/// This is the order a table sorts by locally, for callers that sort their
/// own data in manual sorting mode.
pub fn compare_records<T: TableRecord>(descriptors: &[SortDescriptor], a: &T, b: &T) -> Ordering {
    compare_by(descriptors, |column| (a.cell(column), b.cell(column)))
}
