//! String similarity primitives used to resolve free-text material
//! names against the catalog.

use crate::catalog::{MaterialCatalog, MaterialEntry};

/// Default minimum similarity for accepting a fuzzy catalog match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.85;

/// Classic Levenshtein edit distance over whole strings.
///
/// Insertion, deletion, and substitution each cost 1. Computed over
/// `char`s, not bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut grid = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in grid.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        grid[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            grid[i][j] = (grid[i - 1][j] + 1)
                .min(grid[i][j - 1] + 1)
                .min(grid[i - 1][j - 1] + cost);
        }
    }

    grid[a.len()][b.len()]
}

/// Normalized similarity in `[0, 1]`, where 1.0 means identical.
///
/// Two empty strings are identical by definition.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// Fuzzy matcher over a material catalog.
pub struct CatalogMatcher<'a> {
    catalog: &'a MaterialCatalog,
    threshold: f64,
}

impl<'a> CatalogMatcher<'a> {
    /// Create a matcher with the default 0.85 threshold.
    pub fn new(catalog: &'a MaterialCatalog) -> Self {
        Self {
            catalog,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Set the minimum similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Find the catalog entry most similar to `text`.
    ///
    /// `text` is trimmed and lower-cased before scoring. Only scores
    /// strictly above the threshold are admitted; ties keep the
    /// first-seen maximum, so catalog order decides between equally
    /// good candidates. Returns `None` when nothing clears the bar.
    pub fn find_best(&self, text: &str) -> Option<&'a MaterialEntry> {
        let needle = text.trim().to_lowercase();
        let mut best: Option<(&'a MaterialEntry, f64)> = None;

        for entry in self.catalog.entries() {
            let score = similarity(&needle, &entry.material.to_lowercase());
            if score > self.threshold && best.map_or(true, |(_, top)| score > top) {
                best = Some((entry, score));
            }
        }

        best.map(|(entry, _)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("copper", "copper"), 0);
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(similarity("aluminum cans", "aluminum cans"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_range() {
        let s = similarity("aluminum", "aluminium");
        assert!(s > 0.0 && s < 1.0);
    }

    #[test]
    fn test_find_best_exact_names() {
        let catalog = MaterialCatalog::builtin();
        let matcher = CatalogMatcher::new(catalog);

        for entry in catalog.entries() {
            let found = matcher.find_best(&entry.material);
            assert_eq!(found.map(|e| e.material.as_str()), Some(entry.material.as_str()));
        }
    }

    #[test]
    fn test_find_best_tolerates_case_and_padding() {
        let matcher = CatalogMatcher::new(MaterialCatalog::builtin());
        let found = matcher.find_best("  BARE BRIGHT COPPER ");
        assert_eq!(found.map(|e| e.cell.as_str()), Some("B23"));
    }

    #[test]
    fn test_find_best_rejects_below_threshold() {
        let matcher = CatalogMatcher::new(MaterialCatalog::builtin());
        assert!(matcher.find_best("totally unrelated text").is_none());
        assert!(matcher.find_best("").is_none());
    }

    #[test]
    fn test_find_best_near_miss() {
        let matcher = CatalogMatcher::new(MaterialCatalog::builtin());
        // One dropped letter still clears 0.85 on a 13-char name.
        let found = matcher.find_best("Aluminum Cns");
        assert_eq!(found.map(|e| e.material.as_str()), Some("Aluminum Cans"));
    }
}
