//! Business-rule transformer for tokenized delivery-contract rows.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SchemaError;

use super::csv::tokenize;
use super::tables;
use super::{DeliveryBatch, DeliveryRow, FobStatus};

/// Reference value that forces the shredder-bundle grade and file name
/// regardless of the material description.
const TIN_CAN_BUNDLE_REFERENCE: &str = "TIN CAN BUND";

/// Resolved positions of the four required columns.
struct ColumnIndices {
    contract: usize,
    material_number: usize,
    material_description: usize,
    reference: usize,
}

impl ColumnIndices {
    /// Minimum field count a data row needs to be admitted.
    fn required_len(&self) -> usize {
        self.contract
            .max(self.material_number)
            .max(self.material_description)
            .max(self.reference)
            + 1
    }
}

/// Resolve required columns by case-insensitive substring match.
///
/// Column order in the source is irrelevant; the first header that
/// contains the required word(s) wins.
fn resolve_columns(header: &[String]) -> Result<ColumnIndices, SchemaError> {
    let lowered: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();

    let position = |label: &'static str, matches: &dyn Fn(&str) -> bool| {
        lowered
            .iter()
            .position(|h| matches(h))
            .ok_or(SchemaError::MissingColumn(label))
    };

    Ok(ColumnIndices {
        contract: position("contract", &|h| h.contains("contract"))?,
        material_number: position("material number", &|h| {
            h.contains("material") && h.contains("number")
        })?,
        material_description: position("material description", &|h| {
            h.contains("material") && h.contains("description")
        })?,
        reference: position("reference", &|h| h.contains("reference"))?,
    })
}

/// Strip leading zeros that appear before the first literal '5'.
///
/// Material numbers are exported zero-padded; the catalog keys start at
/// the first '5'. Values without a '5' pass through unchanged.
fn normalize_material_number(raw: &str) -> String {
    match raw.find('5') {
        Some(index) => {
            let (before, after) = raw.split_at(index);
            format!("{}{}", before.trim_start_matches('0'), after)
        }
        None => raw.to_string(),
    }
}

/// Tokenize raw CSV text and transform it into a delivery batch.
pub fn parse_delivery_csv(
    csv_text: &str,
    current_date: NaiveDate,
    recipient_email: &str,
) -> Result<DeliveryBatch, SchemaError> {
    transform_rows(&tokenize(csv_text), current_date, recipient_email)
}

/// Transform tokenized CSV rows into a delivery batch.
///
/// Fails only on structural problems (fewer than two rows, unresolvable
/// header columns). Incomplete data rows are skipped silently.
pub fn transform_rows(
    rows: &[Vec<String>],
    current_date: NaiveDate,
    recipient_email: &str,
) -> Result<DeliveryBatch, SchemaError> {
    if rows.len() < 2 {
        return Err(SchemaError::TooFewRows);
    }

    let columns = resolve_columns(&rows[0])?;
    let month = current_date.format("%B").to_string();

    let mut table: Vec<DeliveryRow> = Vec::new();
    let mut last_contract = String::new();
    let mut last_reference = String::new();
    let mut fob_count = 0u32;
    let mut non_fob_count = 0u32;

    for row in &rows[1..] {
        if row.len() < columns.required_len() {
            debug!("skipping incomplete row with {} fields", row.len());
            continue;
        }

        let contract = row[columns.contract].trim();
        let contract = if contract.is_empty() {
            last_contract.clone()
        } else {
            last_contract = contract.to_string();
            last_contract.clone()
        };

        let reference = row[columns.reference].trim();
        let reference = if reference.is_empty() {
            last_reference.clone()
        } else {
            last_reference = reference.to_string();
            last_reference.clone()
        };

        let material_description = row[columns.material_description].trim().to_string();
        let material_number = normalize_material_number(row[columns.material_number].trim());

        let fob = if reference.to_uppercase().contains("FOB") {
            FobStatus::Yes
        } else {
            FobStatus::No
        };

        // Two independent 1-based counters, one per classification.
        let sequence_id = match fob {
            FobStatus::Yes => {
                fob_count += 1;
                format!("data_{}", fob_count)
            }
            FobStatus::No => {
                non_fob_count += 1;
                format!("data_{}", non_fob_count)
            }
        };

        let is_tin_can_bundle = reference
            .trim()
            .eq_ignore_ascii_case(TIN_CAN_BUNDLE_REFERENCE);

        let grade_description = if is_tin_can_bundle {
            "Shredder Bundles".to_string()
        } else {
            tables::grade_description(&material_description)
                .map(str::to_string)
                .unwrap_or_else(|| material_description.clone())
        };

        let mut file_name = if is_tin_can_bundle {
            "Tin Can Bundles".to_string()
        } else {
            tables::file_name(&material_description)
                .map(str::to_string)
                .unwrap_or_else(|| material_description.clone())
        };

        if fob.is_fob() && !file_name.starts_with("FOB ") {
            file_name = format!("FOB {}", file_name);
        }

        let coordinate = tables::stamp_coordinate(&material_number);

        table.push(DeliveryRow {
            month: month.clone(),
            contract,
            material_number,
            material_description,
            reference,
            fob,
            sequence_id,
            file_name,
            grade_description,
            coordinate,
        });
    }

    // Mirror the per-row counters by filtering the final row list.
    let fob_sequence_ids = table
        .iter()
        .filter(|r| r.fob.is_fob())
        .map(|r| r.sequence_id.clone())
        .collect();
    let non_fob_sequence_ids = table
        .iter()
        .filter(|r| !r.fob.is_fob())
        .map(|r| r.sequence_id.clone())
        .collect();

    debug!(
        "transformed {} rows ({} FOB, {} non-FOB)",
        table.len(),
        fob_count,
        non_fob_count
    );

    Ok(DeliveryBatch {
        rows: table,
        fob_sequence_ids,
        non_fob_sequence_ids,
        recipient_email: recipient_email.to_string(),
    })
}
