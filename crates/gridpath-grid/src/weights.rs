//! Symbolic tile maps and mark→weight tables.
//!
//! A symbolic map is a row-major string with one character (a *mark*) per
//! cell, for example:
//!
//! ```text
//! ~~~~~
//! ~.^.~
//! ~...~
//! ```
//!
//! A [`WeightTable`] turns the marks into terrain weights. Line breaks,
//! carriage returns and tabs are layout only and are stripped before the
//! cells are counted.

use std::collections::BTreeMap;

use gridpath_core::{PathError, Result};

/// Remove the layout characters (`\r`, `\n`, `\t`) from a symbolic map.
pub fn clean_map(map: &str) -> String {
    map.chars()
        .filter(|ch| !matches!(ch, '\r' | '\n' | '\t'))
        .collect()
}

/// Weights for the marks of a symbolic tile map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightTable {
    marks: BTreeMap<char, i32>,
}

impl WeightTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of `mark`, returning the previous one.
    pub fn insert(&mut self, mark: char, weight: i32) -> Option<i32> {
        self.marks.insert(mark, weight)
    }

    pub fn get(&self, mark: char) -> Option<i32> {
        self.marks.get(&mark).copied()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Weight of a single mark. Marks missing from the table fall back to
    /// their digit value, and to 0 (a wall) when they are not digits.
    pub fn weight_of(&self, mark: char) -> i32 {
        self.get(mark)
            .or_else(|| mark.to_digit(10).map(|d| d as i32))
            .unwrap_or(0)
    }

    /// Resolve a symbolic map into row-major weights, one per cell.
    ///
    /// Fails with [`PathError::DimensionMismatch`] if the map does not hold
    /// exactly `cells` marks once layout characters are removed.
    pub fn resolve(&self, map: &str, cells: usize) -> Result<Vec<i32>> {
        let map = clean_map(map);
        let found = map.chars().count();
        if found != cells {
            return Err(PathError::DimensionMismatch {
                expected: cells,
                found,
            });
        }
        Ok(map.chars().map(|ch| self.weight_of(ch)).collect())
    }

    /// Like [`resolve`](Self::resolve), but every mark must be in the table.
    /// Fails with [`PathError::UnknownSymbol`] on the first one that is not.
    pub fn resolve_strict(&self, map: &str, cells: usize) -> Result<Vec<i32>> {
        let weights = self.resolve(map, cells)?;
        if let Some((pos, ch)) = clean_map(map)
            .chars()
            .enumerate()
            .find(|&(_, ch)| self.get(ch).is_none())
        {
            return Err(PathError::UnknownSymbol { ch, pos });
        }
        Ok(weights)
    }
}

impl FromIterator<(char, i32)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (char, i32)>>(iter: I) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, i32)> for WeightTable {
    fn extend<I: IntoIterator<Item = (char, i32)>>(&mut self, iter: I) {
        self.marks.extend(iter);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_from_json() {
        let t: WeightTable = serde_json::from_str(r#"{"marks":{".":1,"^":4}}"#).unwrap();
        assert_eq!(t.get('^'), Some(4));
        assert_eq!(t.weight_of('.'), 1);
    }
}
