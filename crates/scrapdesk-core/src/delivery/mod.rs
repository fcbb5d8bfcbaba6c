//! Delivery-contract CSV normalization.
//!
//! Takes a raw CSV export of delivery contracts and produces one
//! normalized row per contract line, classified by delivery terms and
//! enriched from the static lookup tables, plus the batch summary the
//! template-filling side routes on.

pub mod csv;
pub mod tables;
pub mod transformer;

use serde::{Deserialize, Serialize};

pub use csv::tokenize;
pub use transformer::{parse_delivery_csv, transform_rows};

/// FOB ("Free On Board") classification of a delivery row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FobStatus {
    Yes,
    No,
}

impl FobStatus {
    /// Whether the row is FOB.
    pub fn is_fob(self) -> bool {
        matches!(self, FobStatus::Yes)
    }
}

/// Position of the stamp image on the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StampCoordinate {
    pub x: f64,
    pub y: f64,
}

/// One normalized delivery-contract row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRow {
    /// English month name derived from the processing date.
    pub month: String,

    /// Contract identifier (carried forward over blank cells).
    pub contract: String,

    /// Material number with leading zeros before the first '5' stripped.
    pub material_number: String,

    /// Raw material description from the CSV.
    pub material_description: String,

    /// Reference text (carried forward over blank cells).
    pub reference: String,

    /// FOB classification derived from the reference.
    pub fob: FobStatus,

    /// Per-classification sequence id ("data_1", "data_2", ...).
    pub sequence_id: String,

    /// Output file name resolved from the description.
    pub file_name: String,

    /// Grade description resolved from the description.
    pub grade_description: String,

    /// Stamp position, present only when the material number is known.
    #[serde(flatten)]
    pub coordinate: Option<StampCoordinate>,
}

/// A full transformed delivery batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryBatch {
    /// Normalized rows in input order.
    pub rows: Vec<DeliveryRow>,

    /// Sequence ids of FOB rows, in row order.
    pub fob_sequence_ids: Vec<String>,

    /// Sequence ids of non-FOB rows, in row order.
    pub non_fob_sequence_ids: Vec<String>,

    /// Where the generated bundles should be sent.
    pub recipient_email: String,
}

impl DeliveryBatch {
    /// Comma-joined FOB sequence ids, the shape the template-filling
    /// side consumes.
    pub fn fob_file_list(&self) -> String {
        self.fob_sequence_ids.join(",")
    }

    /// Comma-joined non-FOB sequence ids.
    pub fn non_fob_file_list(&self) -> String {
        self.non_fob_sequence_ids.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fob_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FobStatus::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&FobStatus::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_row_json_flattens_coordinate() {
        let row = DeliveryRow {
            month: "August".to_string(),
            contract: "C1".to_string(),
            material_number: "50000246".to_string(),
            material_description: "1 HM".to_string(),
            reference: "FOB YARD".to_string(),
            fob: FobStatus::Yes,
            sequence_id: "data_1".to_string(),
            file_name: "FOB #1 Heavy Melt".to_string(),
            grade_description: "No.1 Heavy Melt / Short Iron".to_string(),
            coordinate: Some(StampCoordinate { x: 411.31, y: 678.86 }),
        };

        let json: serde_json::Value = serde_json::to_value(&row).unwrap();
        assert_eq!(json["x"], 411.31);
        assert_eq!(json["y"], 678.86);
        assert_eq!(json["fob"], "yes");
    }

    #[test]
    fn test_row_json_omits_missing_coordinate() {
        let row = DeliveryRow {
            month: "August".to_string(),
            contract: "C1".to_string(),
            material_number: "99".to_string(),
            material_description: "TURN".to_string(),
            reference: "X".to_string(),
            fob: FobStatus::No,
            sequence_id: "data_1".to_string(),
            file_name: "Turn".to_string(),
            grade_description: "Turnings".to_string(),
            coordinate: None,
        };

        let json: serde_json::Value = serde_json::to_value(&row).unwrap();
        assert!(json.get("x").is_none());
        assert!(json.get("y").is_none());
    }

    #[test]
    fn test_file_lists_join() {
        let batch = DeliveryBatch {
            rows: Vec::new(),
            fob_sequence_ids: vec!["data_1".to_string(), "data_2".to_string()],
            non_fob_sequence_ids: vec!["data_1".to_string()],
            recipient_email: "office@example.com".to_string(),
        };

        assert_eq!(batch.fob_file_list(), "data_1,data_2");
        assert_eq!(batch.non_fob_file_list(), "data_1");
    }
}
