//! Catalog of finding definitions, loaded from a CSV file.
//!
//! Expected header columns: `kuerzel`, `item_order`, `text` (required) and
//! `active`, `bilateral`, `organ` (optional). Column order does not matter and
//! unknown columns are ignored. Rows may be shorter or longer than the header:
//! missing trailing cells count as blank, cells without a header are dropped.

use crate::types::{Item, MenuEntry};
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tokens accepted as "true" in boolean columns (compared lowercased)
pub const TRUTHY: [&str; 6] = ["1", "true", "yes", "y", "ja", "j"];

/// A raw CSV row before validation
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    kuerzel: Option<String>,
    #[serde(default)]
    item_order: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    active: Option<String>,
    #[serde(default)]
    bilateral: Option<String>,
    #[serde(default)]
    organ: Option<String>,
}

/// Parse a boolean-ish cell. Absent or blank cells yield `default`.
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(str::trim) {
        None | Some("") => default,
        Some(v) => {
            let v = v.to_lowercase();
            TRUTHY.contains(&v.as_str())
        }
    }
}

/// All catalog items plus the organ menu derived from the same rows
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    menu: Vec<MenuEntry>,
}

impl Catalog {
    /// Build a catalog from already constructed items (no menu)
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            menu: Vec::new(),
        }
    }

    /// Load the catalog from a CSV file
    ///
    /// Any row with a missing or malformed required field fails the whole load.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} catalog items ({} menu entries) from {:?}",
            catalog.items.len(),
            catalog.menu.len(),
            path
        );
        Ok(catalog)
    }

    /// Load the catalog from any CSV source
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();

        let mut items = Vec::new();
        let mut pairs = BTreeSet::new();
        let mut record = csv::StringRecord::new();

        while reader.read_record(&mut record)? {
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(items.len() + 2);
            let raw: CatalogRow = record.deserialize(Some(&headers))?;

            let item = item_from_row(&raw, row)?;
            tracing::debug!("Row {}: {:?}", row, item);

            if let Some(organ) = non_blank(raw.organ.as_deref()) {
                pairs.insert(MenuEntry {
                    organ: organ.to_string(),
                    code: item.code.clone(),
                });
            }
            items.push(item);
        }

        let mut menu: Vec<MenuEntry> = pairs.into_iter().collect();
        menu.sort_by(|a, b| {
            (a.organ.to_lowercase(), &a.code).cmp(&(b.organ.to_lowercase(), &b.code))
        });

        Ok(Self { items, menu })
    }

    /// All items in file order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items carrying the given code (case-insensitive)
    pub fn items_with_code<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a Item> + 'a {
        let code = code.trim().to_lowercase();
        self.items.iter().filter(move |item| item.code == code)
    }

    /// Deduplicated (organ, code) pairs sorted by organ (case-insensitive), then code
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a str>, column: &str, row: usize) -> Result<&'a str> {
    non_blank(value).ok_or_else(|| Error::CatalogLoad {
        row,
        message: format!("missing required field '{}'", column),
    })
}

fn item_from_row(raw: &CatalogRow, row: usize) -> Result<Item> {
    let code = required(raw.kuerzel.as_deref(), "kuerzel", row)?.to_lowercase();
    let order_str = required(raw.item_order.as_deref(), "item_order", row)?;
    let order = order_str.parse::<i64>().map_err(|e| Error::CatalogLoad {
        row,
        message: format!("invalid item_order {:?}: {}", order_str, e),
    })?;
    let text = required(raw.text.as_deref(), "text", row)?.to_string();

    Ok(Item {
        code,
        order,
        text,
        bilateral: parse_bool(raw.bilateral.as_deref(), false),
        active: parse_bool(raw.active.as_deref(), true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
kuerzel,item_order,text,active,bilateral,organ
H,1,Herz regelrecht,1,0,Herz
l,2,Lunge belüftet,ja,ja,Lunge
l,3,Kein Erguss,j,yes,Lunge
o,4,Oberbauch unauffällig,0,,abdomen
";

    fn sample() -> Catalog {
        Catalog::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_catalog_loads_all_rows() {
        let catalog = sample();
        assert_eq!(catalog.len(), 4);

        let herz = &catalog.items()[0];
        assert_eq!(herz.code, "h");
        assert_eq!(herz.order, 1);
        assert_eq!(herz.text, "Herz regelrecht");
        assert!(!herz.bilateral);
        assert!(herz.active);
    }

    #[test]
    fn test_boolean_columns() {
        let catalog = sample();
        assert!(catalog.items()[1].bilateral);
        assert!(catalog.items()[2].bilateral);
        assert!(!catalog.items()[3].bilateral);
        assert!(!catalog.items()[3].active);
    }

    #[test]
    fn test_parse_bool_tokens() {
        for token in ["1", "true", "TRUE", "yes", "Y", "ja", "J", " ja "] {
            assert!(parse_bool(Some(token), false), "{:?} should be truthy", token);
        }
        for token in ["0", "no", "nein", "false", "x"] {
            assert!(!parse_bool(Some(token), true), "{:?} should be falsy", token);
        }
        assert!(parse_bool(None, true));
        assert!(!parse_bool(Some("  "), false));
    }

    #[test]
    fn test_lookup_by_code_is_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.items_with_code("L").count(), 2);
        assert_eq!(catalog.items_with_code("h").count(), 1);
        assert_eq!(catalog.items_with_code("x").count(), 0);
    }

    #[test]
    fn test_menu_is_deduplicated_and_sorted() {
        let catalog = sample();
        let menu: Vec<(&str, &str)> = catalog
            .menu()
            .iter()
            .map(|m| (m.organ.as_str(), m.code.as_str()))
            .collect();
        assert_eq!(
            menu,
            vec![("abdomen", "o"), ("Herz", "h"), ("Lunge", "l")]
        );
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "kuerzel,item_order,text\nh,1,Herz regelrecht\n";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        let item = &catalog.items()[0];
        assert!(item.active);
        assert!(!item.bilateral);
        assert!(catalog.menu().is_empty());
    }

    #[test]
    fn test_short_row_uses_defaults_for_optional_cells() {
        let csv = "\
kuerzel,item_order,text,active,bilateral,organ
h,1,Herz regelrecht
l,2,Lunge belüftet,1,1,Lunge
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let herz = &catalog.items()[0];
        assert_eq!(herz.text, "Herz regelrecht");
        assert!(herz.active);
        assert!(!herz.bilateral);
        assert!(catalog.items()[1].bilateral);

        // Only the complete row contributes to the menu
        assert_eq!(catalog.menu().len(), 1);
        assert_eq!(catalog.menu()[0].code, "l");
    }

    #[test]
    fn test_short_row_without_text_fails_load() {
        let csv = "kuerzel,item_order,text,active
h,1
";
        match Catalog::from_reader(csv.as_bytes()) {
            Err(Error::CatalogLoad { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("text"));
            }
            other => panic!("expected catalog load error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let csv = "kuerzel,item_order,text
h,1,Herz regelrecht,Anmerkung,42
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].text, "Herz regelrecht");
    }

    #[test]
    fn test_missing_required_column_fails_load() {
        let csv = "kuerzel,item_order\nh,1\n";
        match Catalog::from_reader(csv.as_bytes()) {
            Err(Error::CatalogLoad { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("text"));
            }
            other => panic!("expected catalog load error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_order_fails_load() {
        let csv = "kuerzel,item_order,text\nh,1,Herz\nl,zwei,Lunge\n";
        match Catalog::from_reader(csv.as_bytes()) {
            Err(Error::CatalogLoad { row, message }) => {
                assert_eq!(row, 3);
                assert!(message.contains("item_order"));
            }
            other => panic!("expected catalog load error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_code_fails_load() {
        let csv = "kuerzel,item_order,text\n ,1,Herz\n";
        assert!(matches!(
            Catalog::from_reader(csv.as_bytes()),
            Err(Error::CatalogLoad { row: 2, .. })
        ));
    }

    #[test]
    fn test_load_from_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("organe.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = Catalog::load_from_csv(&path).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load_from_csv(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
