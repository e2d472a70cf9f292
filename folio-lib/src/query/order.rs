//! Sort specification and alphanumeric comparison.

use std::cmp::Ordering;

use crate::table::TableRow;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// One sort key: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: Direction,
}

/// Specifies the display order of rows.
///
/// Keys are applied in order; later keys break ties left by earlier ones.
/// Rows equal on every key keep their stored order.
///
/// # Example
///
/// ```
/// use folio_lib::query::SortSpec;
///
/// let sort = SortSpec::desc("status").then_asc("header");
/// assert_eq!(sort.keys().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Creates an empty spec (stored order).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates an ascending order on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self::none().then_asc(column)
    }

    /// Creates a descending order on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self::none().then_desc(column)
    }

    /// Adds a secondary ascending key.
    pub fn then_asc(mut self, column: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            column: column.into(),
            direction: Direction::Asc,
        });
        self
    }

    /// Adds a secondary descending key.
    pub fn then_desc(mut self, column: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            column: column.into(),
            direction: Direction::Desc,
        });
        self
    }

    /// Returns the sort keys in priority order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns the direction for a column, if it is sorted.
    pub fn direction_of(&self, column: &str) -> Option<Direction> {
        self.keys
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Returns true if no key is set.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compares two rows by every key in turn.
    ///
    /// A row without a cell for the column sorts after rows that have one,
    /// whatever the direction.
    pub fn compare<R: TableRow>(&self, a: &R, b: &R) -> Ordering {
        for key in &self.keys {
            let ordering = match (a.cell(&key.column), b.cell(&key.column)) {
                (Some(x), Some(y)) => {
                    let ordering = alphanumeric_cmp(&x, &y);
                    match key.direction {
                        Direction::Asc => ordering,
                        Direction::Desc => ordering.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Compares text so that embedded numbers order by value.
///
/// Both strings are split into runs of ASCII digits and runs of other
/// characters. Digit runs compare numerically; other runs compare
/// case-insensitively. `"9" < "18"` and `"Item 2" < "item 10"`.
pub fn alphanumeric_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ordering = if is_digits(x) && is_digits(y) {
            cmp_digits(x, y)
        } else {
            x.to_lowercase().cmp(&y.to_lowercase())
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}

/// Splits text into alternating digit and non-digit runs.
fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_digit = None;
    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if let Some(prev) = prev_digit
            && prev != digit
        {
            out.push(&s[start..i]);
            start = i;
        }
        prev_digit = Some(digit);
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// Compares digit runs of any length without parsing.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
