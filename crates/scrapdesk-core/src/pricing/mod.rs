//! Fuzzy material-price extraction from loosely formatted price-sheet
//! text.

pub mod amount;
pub mod heuristics;
pub mod patterns;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::MaterialCatalog;
use crate::similarity::{CatalogMatcher, DEFAULT_MATCH_THRESHOLD};

pub use amount::normalize_price;
pub use heuristics::{default_heuristics, HeuristicHit, LineWindow, PriceHeuristic};

/// A structured pricing fact recovered from a price sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Canonical catalog material name.
    pub material: String,

    /// Price for that material.
    pub price: Decimal,

    /// Destination spreadsheet cell reference.
    pub cell: String,
}

/// Extractor for material/price pairs in unstructured price-sheet text.
///
/// Runs an ordered cascade of line heuristics; the first heuristic that
/// resolves a catalog material commits for that line. Extraction never
/// fails: text that yields no matches produces an empty result.
pub struct PriceSheetParser {
    threshold: f64,
    heuristics: Vec<Box<dyn PriceHeuristic>>,
}

impl PriceSheetParser {
    /// Create a parser with the default heuristics and threshold.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            heuristics: default_heuristics(),
        }
    }

    /// Set the minimum similarity threshold for catalog matching.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the heuristic cascade.
    pub fn with_heuristics(mut self, heuristics: Vec<Box<dyn PriceHeuristic>>) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Extract price entries from raw document text.
    ///
    /// At most one entry per material is returned; when a material is
    /// mentioned more than once, the last mention's price wins. Output
    /// order is the first-mention order.
    pub fn extract(&self, text: &str, catalog: &MaterialCatalog) -> Vec<PriceEntry> {
        let lines = normalize_lines(text);
        let matcher = CatalogMatcher::new(catalog).with_threshold(self.threshold);

        let mut hits: Vec<HeuristicHit> = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let window = LineWindow {
                line: &lines[i],
                previous: if i > 0 { Some(lines[i - 1].as_str()) } else { None },
                next: lines.get(i + 1).map(String::as_str),
            };

            for heuristic in &self.heuristics {
                if let Some(hit) = heuristic.propose(&window, &matcher) {
                    debug!(
                        "{}: line {} -> {} @ {}",
                        heuristic.name(),
                        i,
                        hit.material,
                        hit.price
                    );
                    if hit.consumed_next {
                        i += 1;
                    }
                    hits.push(hit);
                    break;
                }
            }

            i += 1;
        }

        let entries = dedup_last_wins(hits);
        debug!("extracted {} price entries", entries.len());
        entries
    }
}

impl Default for PriceSheetParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace runs within each line, trim, and drop empties.
fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Fold hits into one entry per material, last occurrence winning.
///
/// Overwrites happen in place, so the output keeps first-seen order.
fn dedup_last_wins(hits: Vec<HeuristicHit>) -> Vec<PriceEntry> {
    let mut entries: Vec<PriceEntry> = Vec::new();
    for hit in hits {
        match entries.iter_mut().find(|e| e.material == hit.material) {
            Some(existing) => {
                existing.price = hit.price;
                existing.cell = hit.cell;
            }
            None => entries.push(PriceEntry {
                material: hit.material,
                price: hit.price,
                cell: hit.cell,
            }),
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn extract(text: &str) -> Vec<PriceEntry> {
        PriceSheetParser::new().extract(text, MaterialCatalog::builtin())
    }

    #[test]
    fn test_extract_same_line_pairs() {
        let entries = extract("Aluminum Cans $0.79\nBare Bright Copper: 3.25\n");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].material, "Aluminum Cans");
        assert_eq!(entries[0].price, dec("0.79"));
        assert_eq!(entries[0].cell, "B3");
        assert_eq!(entries[1].material, "Bare Bright Copper");
        assert_eq!(entries[1].price, dec("3.25"));
        assert_eq!(entries[1].cell, "B23");
    }

    #[test]
    fn test_extract_next_line_price() {
        let entries = extract("Bare Bright Copper\n$3.25\nAluminum Cans\n0.79");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].cell, "B23");
        assert_eq!(entries[1].cell, "B3");
    }

    #[test]
    fn test_last_mention_wins() {
        let entries = extract("Aluminum Cans 0.70\nsome other text\nAluminum Cans 0.79");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].material, "Aluminum Cans");
        assert_eq!(entries[0].price, dec("0.79"));
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(extract("").is_empty());
        assert!(extract("nothing here resembles a material\nor a price").is_empty());
    }

    #[test]
    fn test_ragged_whitespace_is_collapsed() {
        let entries = extract("  Aluminum   Cans \t $0.79  \n\n\n");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].material, "Aluminum Cans");
    }

    #[test]
    fn test_fuzzy_material_resolution() {
        // OCR noise: one character off still resolves via the matcher.
        let entries = extract("Aluminum Canz 0.79");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].material, "Aluminum Cans");
    }

    #[test]
    fn test_custom_threshold() {
        let parser = PriceSheetParser::new().with_threshold(0.999);
        let entries = parser.extract("Aluminum Canz 0.79", MaterialCatalog::builtin());
        assert!(entries.is_empty());
    }
}
