//! Core domain types for the Befund system.
//!
//! - Catalog items (finding definitions) and menu entries
//! - Output entries and the side they describe
//! - The two-bucket classification result

// ============================================================================
// Catalog Types
// ============================================================================

/// A finding definition from the catalog.
///
/// Items are built once by the catalog loader and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Lowercased catalog code (`kuerzel`)
    pub code: String,
    /// Sort key, and the number the user types to mark the item affected
    pub order: i64,
    /// Default phrase used when the finding is normal
    pub text: String,
    pub bilateral: bool,
    pub active: bool,
}

impl Item {
    /// Create an active item
    pub fn new(code: impl Into<String>, order: i64, text: impl Into<String>, bilateral: bool) -> Self {
        Self {
            code: code.into().trim().to_lowercase(),
            order,
            text: text.into(),
            bilateral,
            active: true,
        }
    }

    /// Number of entries this item contributes to a report
    pub fn entry_count(&self) -> usize {
        if self.bilateral {
            2
        } else {
            1
        }
    }
}

/// One line of the selection menu: an organ label and the code to type for it
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuEntry {
    pub organ: String,
    pub code: String,
}

// ============================================================================
// Report Types
// ============================================================================

/// Body side an entry refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    /// Not a bilateral finding
    None,
}

impl Side {
    /// The two sides asked for a bilateral finding, in report order
    pub const PAIR: [Side; 2] = [Side::Left, Side::Right];

    /// Label printed in front of this side's findings
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Side::Left => Some("LINKS"),
            Side::Right => Some("RECHTS"),
            Side::None => None,
        }
    }
}

/// A rendered unit of the report, produced from an item or one side of it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub side: Side,
    pub text: String,
}

impl Entry {
    pub fn new(side: Side, text: impl Into<String>) -> Self {
        Self {
            side,
            text: text.into(),
        }
    }
}

/// Result of classifying a selection: every entry sits in exactly one bucket
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub normal: Vec<Entry>,
    pub pathological: Vec<Entry>,
}

impl Classification {
    /// Total number of entries across both buckets
    pub fn len(&self) -> usize {
        self.normal.len() + self.pathological.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.pathological.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_code_is_normalized() {
        let item = Item::new(" H ", 1, "Herz regelrecht", false);
        assert_eq!(item.code, "h");
        assert!(item.active);
    }

    #[test]
    fn test_entry_count_follows_bilateral_flag() {
        assert_eq!(Item::new("l", 2, "Lunge belüftet", true).entry_count(), 2);
        assert_eq!(Item::new("h", 1, "Herz regelrecht", false).entry_count(), 1);
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Left.label(), Some("LINKS"));
        assert_eq!(Side::Right.label(), Some("RECHTS"));
        assert_eq!(Side::None.label(), None);
    }
}
