//! The material catalog: recognized material names and their
//! destination spreadsheet cells.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A single catalog entry mapping a material name to a spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Canonical material name (unique key).
    pub material: String,

    /// Destination spreadsheet cell reference (e.g. "B23").
    pub cell: String,
}

/// An ordered, immutable set of material entries.
///
/// Entry order is significant: fuzzy matching breaks score ties in
/// favor of the earlier entry.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    entries: Vec<MaterialEntry>,
}

impl MaterialCatalog {
    /// Build a catalog from (material, cell) pairs, preserving order.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(material, cell)| MaterialEntry {
                material: material.to_string(),
                cell: cell.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// The builtin price-sheet catalog.
    pub fn builtin() -> &'static MaterialCatalog {
        &BUILTIN_CATALOG
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a material's cell reference.
    pub fn cell_for(&self, material: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.material == material)
            .map(|e| e.cell.as_str())
    }
}

lazy_static! {
    static ref BUILTIN_CATALOG: MaterialCatalog =
        MaterialCatalog::from_pairs(MATERIAL_CELLS.iter().copied());
}

/// Material name to spreadsheet cell, in price-sheet row order.
const MATERIAL_CELLS: &[(&str, &str)] = &[
    ("Aluminum Cans", "B3"),
    ("Aluminum Sheet", "B4"),
    ("Aluminum Painted Siding", "B5"),
    ("Aluminum 6061", "B6"),
    ("Aluminum 6063", "B7"),
    ("Aluminum Cast", "B8"),
    ("Aluminum Clips", "B9"),
    ("Aluminum Wheel - Clean", "B10"),
    ("Aluminum Wheel - Dirty", "B11"),
    ("Aluminum Chrome Wheel", "B12"),
    ("Aluminum Truck Wheels", "B13"),
    ("EC Wire", "B14"),
    ("ACSR - Aluminum Coated Steel Reinforced", "B15"),
    ("Insulated Wire Aluminum (Neoprene)", "B16"),
    ("Aluminum Turnings/Shavings", "B17"),
    ("Aluminum Die Cast", "B18"),
    ("Aluminum Breakage", "B19"),
    ("Stainless - Clean", "B20"),
    ("Stainless - Dirty", "B21"),
    ("Stainless Turnings/Shavings", "B22"),
    ("Bare Bright Copper", "B23"),
    ("#1 Copper", "B24"),
    ("#2 Copper", "B25"),
    ("Yellow Brass - Clean", "B26"),
    ("Yellow Brass - Dirty", "B27"),
    ("Mixed Brass Shells", "B28"),
    ("Brass Turnings/Shavings", "B29"),
    ("Red Brass", "B30"),
    ("Hard Brass", "B31"),
    ("Brass/Copper Radiators - Clean", "B32"),
    ("Brass/Copper Radiators - Dirty", "B33"),
    ("Heater Core", "B34"),
    ("Aluminum/Copper Reefer - Clean", "B35"),
    ("Aluminum/Copper Reefer - Dirty", "B36"),
    ("Aluminum Radiators - Clean", "B37"),
    ("Aluminum Radiators - Dirty", "B38"),
    ("Aluminum/Copper Reefer Ends", "B39"),
    ("85 % MCM", "B40"),
    ("ICW #1 65 %", "B41"),
    ("ICW #2 45 %", "B42"),
    ("ICW #3 30 % (Low Grade)", "B43"),
    ("Data/Cat 5 ICW", "B44"),
    ("Christmas Lights", "B45"),
    ("Soft Lead – Clean", "B46"),
    ("Lead Acid Battery", "B47"),
    ("Steel Case Battery (Lead Acid)", "B48"),
    ("Indoor Range Lead", "B49"),
    ("Lead Wheel Weights", "B50"),
    ("Electric Motors", "B51"),
    ("Large Electric Motors", "B52"),
    ("Sealed Units", "B53"),
    ("Alternators", "B54"),
    ("Aluminum Nose Starter", "B55"),
    ("Steel Nose Starter", "B56"),
    ("Comex", "B57"),
];
