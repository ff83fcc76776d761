//! Classification engine: sorts the selected items into normal and
//! pathological entries.
//!
//! Items are processed in ascending order. For every affected item the
//! [`OverrideProvider`] is asked once (or once per side for bilateral items);
//! a non-empty answer makes that entry pathological with the answer as text,
//! an empty answer keeps the default text in the normal bucket. Unaffected
//! items go straight to the normal bucket without asking.

use crate::{Classification, Entry, Item, Result, Side};
use std::collections::BTreeSet;

/// Source of free-text overrides for affected findings.
///
/// Returning `None` or a blank string means "normal after all".
pub trait OverrideProvider {
    fn request_override(&mut self, item: &Item, side: Side) -> Result<Option<String>>;
}

impl<F> OverrideProvider for F
where
    F: FnMut(&Item, Side) -> Option<String>,
{
    fn request_override(&mut self, item: &Item, side: Side) -> Result<Option<String>> {
        Ok(self(item, side))
    }
}

/// Classify items into normal and pathological entries.
///
/// Affected numbers that match no item are ignored.
pub fn classify<P>(items: &[Item], affected: &BTreeSet<i64>, provider: &mut P) -> Result<Classification>
where
    P: OverrideProvider + ?Sized,
{
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by_key(|item| item.order);

    let mut result = Classification::default();

    for item in ordered {
        let is_affected = affected.contains(&item.order);
        let sides: &[Side] = if item.bilateral {
            &Side::PAIR
        } else {
            &[Side::None]
        };

        for &side in sides {
            if !is_affected {
                result.normal.push(Entry::new(side, item.text.as_str()));
                continue;
            }

            match provider
                .request_override(item, side)?
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
            {
                Some(text) => {
                    tracing::debug!("Item {} ({:?}): pathological", item.order, side);
                    result.pathological.push(Entry::new(side, text));
                }
                None => {
                    tracing::debug!("Item {} ({:?}): confirmed normal", item.order, side);
                    result.normal.push(Entry::new(side, item.text.as_str()));
                }
            }
        }
    }

    let unmatched = affected
        .iter()
        .filter(|n| !items.iter().any(|item| item.order == **n))
        .count();
    if unmatched > 0 {
        tracing::debug!("{} affected numbers matched no selected item", unmatched);
    }

    tracing::info!(
        "Classified {} items: {} normal, {} pathological entries",
        items.len(),
        result.normal.len(),
        result.pathological.len()
    );

    Ok(result)
}
