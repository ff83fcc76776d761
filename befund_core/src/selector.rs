//! Turning user answers into a selection: comma-separated codes become an
//! ordered list of items, comma-separated numbers become the affected set.

use crate::catalog::Catalog;
use crate::types::Item;
use std::collections::{BTreeSet, HashSet};

/// Split a comma-separated answer into trimmed, non-empty tokens
pub fn split_tokens(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Affected order numbers parsed from user input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffectedNumbers {
    pub numbers: BTreeSet<i64>,
    /// Tokens that were not integers and got dropped
    pub invalid: Vec<String>,
}

/// Parse a comma-separated list of order numbers.
///
/// Tokens that are not integers are dropped with a warning; the rest are kept.
pub fn parse_affected(line: &str) -> AffectedNumbers {
    let mut parsed = AffectedNumbers::default();
    for token in split_tokens(line) {
        match token.parse::<i64>() {
            Ok(n) => {
                parsed.numbers.insert(n);
            }
            Err(_) => {
                tracing::warn!("Ignoring invalid number: {:?}", token);
                parsed.invalid.push(token);
            }
        }
    }
    parsed
}

/// Resolve codes against the catalog into items sorted by ascending order.
///
/// Unknown codes contribute nothing. With `active_only`, inactive items are
/// left out.
pub fn select_items<S: AsRef<str>>(catalog: &Catalog, codes: &[S], active_only: bool) -> Vec<Item> {
    let wanted: HashSet<String> = codes
        .iter()
        .map(|code| code.as_ref().trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .collect();

    let mut items: Vec<Item> = catalog
        .items()
        .iter()
        .filter(|item| wanted.contains(&item.code))
        .filter(|item| !active_only || item.active)
        .cloned()
        .collect();

    // Stable: items sharing an order number keep their catalog order
    items.sort_by_key(|item| item.order);

    tracing::debug!(
        "Selected {} items for codes {:?} (active_only: {})",
        items.len(),
        wanted,
        active_only
    );
    items
}
