//! Table sort, filter and CSV helpers.
//!
//! Pure functions over cell text. `table_dom` reads cells out of the
//! rendered tables and applies the resulting order/visibility back.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Class set on the sorted column's header cell.
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Ascending => "sort-asc",
            Self::Descending => "sort-desc",
        }
    }
}

/// Header classes cleared from every other column.
pub const SORT_CLASSES: [&str; 2] = ["sort-asc", "sort-desc"];

/// Last sort applied per table id.
#[derive(Clone, Debug, Default)]
pub struct SortMemory {
    last: HashMap<String, (usize, SortDirection)>,
}

impl SortMemory {
    /// Direction for sorting `table_id` by `column` now, and remember it.
    ///
    /// Re-sorting the same column flips the direction; a new column starts
    /// ascending.
    pub fn next_direction(&mut self, table_id: &str, column: usize) -> SortDirection {
        let direction = match self.last.get(table_id) {
            Some(&(last_column, last_direction)) if last_column == column => last_direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.last.insert(table_id.to_owned(), (column, direction));
        direction
    }

    pub fn last(&self, table_id: &str) -> Option<(usize, SortDirection)> {
        self.last.get(table_id).copied()
    }
}

/// Numeric sort key: everything but digits, `.` and `-` is stripped, then
/// the longest leading number is read (`2024-01-05` -> 2024).
/// Text with no leading number sorts as zero.
pub fn numeric_key(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-').collect();
    cleaned[..numeric_prefix_len(&cleaned)].parse::<f64>().map_or(0.0, |v| if v.is_nan() { 0.0 } else { v })
}

/// Byte length of the leading `-?digits[.digits]` run, or 0 without a digit.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return 0;
    }
    // "12." parses, but trim it so the slice is a plain number.
    if bytes.get(end - 1) == Some(&b'.') { end - 1 } else { end }
}

/// Compare two cells, numerically or as case-insensitive text.
pub fn compare_cells(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        return numeric_key(a).total_cmp(&numeric_key(b));
    }
    let (a, b) = (a.trim(), b.trim());
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Row indices in sorted order. Equal cells keep their original order.
pub fn sorted_order<S: AsRef<str>>(cells: &[S], numeric: bool, direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cells.len()).collect();
    order.sort_by(|&i, &j| {
        let ord = compare_cells(cells[i].as_ref(), cells[j].as_ref(), numeric);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}

/// Case-insensitive substring match. An empty filter matches everything.
pub fn matches_filter(cell: &str, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    needle.is_empty() || cell.to_lowercase().contains(&needle)
}

/// Escape one CSV field, quoting it when it holds a comma, quote or newline.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

pub fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells.iter().map(|c| csv_field(c.as_ref().trim())).collect::<Vec<_>>().join(",")
}

/// Serialize rows (header first) as CSV text.
pub fn to_csv<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    rows.iter().map(|row| csv_line(row)).collect::<Vec<_>>().join("\n")
}
