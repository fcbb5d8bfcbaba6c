//! Line-oriented extraction heuristics for price-sheet text.
//!
//! Each heuristic is an independent strategy tried in order against a
//! line; the first one that resolves a catalog material commits and the
//! rest are skipped for that line.

use rust_decimal::Decimal;

use crate::similarity::CatalogMatcher;

use super::amount::normalize_price;
use super::patterns::{BARE_PRICE_LINE, INLINE_PRICE, TRAILING_PRICE};

/// A line under inspection together with its neighbors.
#[derive(Debug, Clone, Copy)]
pub struct LineWindow<'a> {
    /// The current (whitespace-collapsed, trimmed) line.
    pub line: &'a str,
    /// The previous line, if any.
    pub previous: Option<&'a str>,
    /// The next line, if any.
    pub next: Option<&'a str>,
}

/// A committed material/price proposal from a heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicHit {
    /// Resolved catalog material name.
    pub material: String,
    /// The material's spreadsheet cell reference.
    pub cell: String,
    /// Parsed price.
    pub price: Decimal,
    /// Whether the heuristic consumed the next line as well.
    pub consumed_next: bool,
}

/// A single extraction strategy.
pub trait PriceHeuristic: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Try to extract a material/price pair from the window.
    fn propose(&self, window: &LineWindow<'_>, matcher: &CatalogMatcher<'_>)
        -> Option<HeuristicHit>;
}

/// The heuristic cascade in its canonical order.
pub fn default_heuristics() -> Vec<Box<dyn PriceHeuristic>> {
    vec![
        Box::new(TrailingPrice),
        Box::new(NextLinePrice),
        Box::new(InlinePrice),
    ]
}

/// Material name followed by a price at the end of the same line.
pub struct TrailingPrice;

impl PriceHeuristic for TrailingPrice {
    fn name(&self) -> &'static str {
        "trailing-price"
    }

    fn propose(
        &self,
        window: &LineWindow<'_>,
        matcher: &CatalogMatcher<'_>,
    ) -> Option<HeuristicHit> {
        let caps = TRAILING_PRICE.captures(window.line)?;
        let candidate = caps[1].trim().to_string();
        let price = normalize_price(&caps[2])?;

        if price <= Decimal::ZERO || candidate.chars().count() <= 2 {
            return None;
        }

        let entry = matcher.find_best(&candidate)?;
        Some(HeuristicHit {
            material: entry.material.clone(),
            cell: entry.cell.clone(),
            price,
            consumed_next: false,
        })
    }
}

/// Material name on one line, a bare price alone on the next.
pub struct NextLinePrice;

impl PriceHeuristic for NextLinePrice {
    fn name(&self) -> &'static str {
        "next-line-price"
    }

    fn propose(
        &self,
        window: &LineWindow<'_>,
        matcher: &CatalogMatcher<'_>,
    ) -> Option<HeuristicHit> {
        let next = window.next?;
        let caps = BARE_PRICE_LINE.captures(next)?;
        let price = normalize_price(&caps[1])?;

        if price <= Decimal::ZERO || window.line.chars().count() <= 2 {
            return None;
        }

        let entry = matcher.find_best(window.line)?;
        Some(HeuristicHit {
            material: entry.material.clone(),
            cell: entry.cell.clone(),
            price,
            consumed_next: true,
        })
    }
}

/// A price token anywhere in the line; the text before it is the
/// material candidate.
pub struct InlinePrice;

impl InlinePrice {
    /// Prices above this are assumed to be quantities or totals.
    const MAX_PRICE: u32 = 1000;
}

impl PriceHeuristic for InlinePrice {
    fn name(&self) -> &'static str {
        "inline-price"
    }

    fn propose(
        &self,
        window: &LineWindow<'_>,
        matcher: &CatalogMatcher<'_>,
    ) -> Option<HeuristicHit> {
        for token in INLINE_PRICE.find_iter(window.line) {
            let price = match normalize_price(token.as_str()) {
                Some(p) => p,
                None => continue,
            };
            if price <= Decimal::ZERO || price >= Decimal::from(Self::MAX_PRICE) {
                continue;
            }

            let prefix = window.line[..token.start()].trim();

            // Short prefixes are usually a wrapped tail; pull in the
            // previous line before matching.
            let candidate = if prefix.chars().count() < 5 {
                match window.previous {
                    Some(previous) => format!("{} {}", previous, prefix),
                    None => prefix.to_string(),
                }
            } else {
                prefix.to_string()
            };

            if candidate.chars().count() <= 2 {
                continue;
            }

            if let Some(entry) = matcher.find_best(&candidate) {
                // Only the first token that resolves a material is
                // taken for this line.
                return Some(HeuristicHit {
                    material: entry.material.clone(),
                    cell: entry.cell.clone(),
                    price,
                    consumed_next: false,
                });
            }
        }

        None
    }
}
