//! Rendering of classified entries into the two-line report.
//!
//! ```text
//! Pathologisch: LINKS Infiltrat
//! Normal: RECHTS (Lunge belüftet); Herz regelrecht
//! ```

use crate::{Classification, Entry, Side};

/// Placeholder for a line without any findings
pub const EMPTY_LINE: &str = "-";

/// Entry texts grouped by side, in entry order
#[derive(Debug, Default)]
struct SideBuckets<'a> {
    left: Vec<&'a str>,
    right: Vec<&'a str>,
    none: Vec<&'a str>,
}

impl<'a> SideBuckets<'a> {
    fn from_entries(entries: &'a [Entry]) -> Self {
        let mut buckets = Self::default();
        for entry in entries {
            let bucket = match entry.side {
                Side::Left => &mut buckets.left,
                Side::Right => &mut buckets.right,
                Side::None => &mut buckets.none,
            };
            bucket.push(entry.text.as_str());
        }
        buckets
    }

    /// Non-empty buckets in report order: left, right, then unsided
    fn present(&self) -> impl Iterator<Item = (Side, String)> + '_ {
        [
            (Side::Left, &self.left),
            (Side::Right, &self.right),
            (Side::None, &self.none),
        ]
        .into_iter()
        .filter(|(_, texts)| !texts.is_empty())
        .map(|(side, texts)| (side, texts.join(", ")))
    }
}

fn pathological_line(entries: &[Entry]) -> String {
    let parts: Vec<String> = SideBuckets::from_entries(entries)
        .present()
        .map(|(side, joined)| match side.label() {
            Some(label) => format!("{} {}", label, joined),
            None => joined,
        })
        .collect();

    if parts.is_empty() {
        EMPTY_LINE.to_string()
    } else {
        parts.join(" ")
    }
}

fn normal_line(entries: &[Entry]) -> String {
    let parts: Vec<String> = SideBuckets::from_entries(entries)
        .present()
        .map(|(side, joined)| match side.label() {
            Some(label) => format!("{} ({})", label, joined),
            None => joined,
        })
        .collect();

    if parts.is_empty() {
        EMPTY_LINE.to_string()
    } else {
        parts.join("; ")
    }
}

/// Build the report from the normal and pathological entries
pub fn build_summary(normal: &[Entry], pathological: &[Entry]) -> String {
    format!(
        "Pathologisch: {}\nNormal: {}",
        pathological_line(pathological),
        normal_line(normal)
    )
}

impl Classification {
    /// Render this classification as the two-line report
    pub fn summary(&self) -> String {
        build_summary(&self.normal, &self.pathological)
    }
}
