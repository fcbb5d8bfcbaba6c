//! Static lookup tables for delivery-contract enrichment.

use super::StampCoordinate;

/// Scale-ticket grade code to the grade description printed on the
/// contract.
const GRADE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("O/S P&S", "O/S P&S / Unprepared P&S"),
    ("UNPREP 1&2", "UnPrepared 1&2 Mix/Long Iron"),
    ("1 HM", "No.1 Heavy Melt / Short Iron"),
    ("2 HM", "No.2 Heavy Melt / Short Iron"),
    ("MIX 1 & 2", "No.1&2 Heavy Melt / Short Iron"),
    ("P&S", "P&S / Plate & Structural"),
    ("TURN", "Turnings"),
    ("2LTSHRD", "No.2 Light / Tin"),
    ("DLR CLIPS 3", "Dealer Clips 3"),
    ("INCOMPLETE CARS", "Incomplete Cars"),
    ("SHD LOG", "Shredder Bundles"),
    ("CAR BODY", "Car Body (Complete)"),
];

/// Grade code to the output file name stem.
const FILE_NAMES: &[(&str, &str)] = &[
    ("O/S P&S", "UnPrepared P&S"),
    ("UNPREP 1&2", "UnPrepared 1&2MixLong Iron"),
    ("1 HM", "#1 Heavy Melt"),
    ("2 HM", "#2 Heavy Melt"),
    ("MIX 1 & 2", "#1&2 Mix Short Iron"),
    ("P&S", "P&S"),
    ("TURN", "Turn"),
    ("2LTSHRD", "#2 Light Tin"),
    ("DLR CLIPS 3", "Dealer Clips 3"),
    ("INCOMPLETE CARS", "Incomplete Cars"),
    ("SHD LOG", "Shred Bales"),
    ("CAR BODY", "HiWay Scrap Cars"),
];

/// Normalized material number to the stamp position on the contract
/// template. Two columns of nine slots each.
const STAMP_COORDINATES: &[(&str, (f64, f64))] = &[
    ("50000241", (220.0, 553.7)),
    ("50000242", (220.0, 569.345)),
    ("50000245", (220.0, 584.99)),
    ("50000250", (220.0, 600.635)),
    ("50000339", (220.0, 616.28)),
    ("50000332", (220.0, 631.925)),
    ("50000249", (220.0, 647.57)),
    ("50000341", (220.0, 663.215)),
    ("50000313", (220.0, 678.86)),
    ("50000665", (411.31, 553.7)),
    ("50000320", (411.31, 569.345)),
    ("50000281", (411.31, 584.99)),
    ("50000319", (411.31, 600.635)),
    ("50000302", (411.31, 616.28)),
    ("50000325", (411.31, 631.925)),
    ("50000252", (411.31, 647.57)),
    ("50000294", (411.31, 663.215)),
    ("50000246", (411.31, 678.86)),
];

/// Look up the grade description for a raw material description.
pub fn grade_description(material_description: &str) -> Option<&'static str> {
    GRADE_DESCRIPTIONS
        .iter()
        .find(|(code, _)| *code == material_description)
        .map(|(_, description)| *description)
}

/// Look up the file name stem for a raw material description.
pub fn file_name(material_description: &str) -> Option<&'static str> {
    FILE_NAMES
        .iter()
        .find(|(code, _)| *code == material_description)
        .map(|(_, name)| *name)
}

/// Look up the stamp coordinate for a normalized material number.
pub fn stamp_coordinate(material_number: &str) -> Option<StampCoordinate> {
    STAMP_COORDINATES
        .iter()
        .find(|(number, _)| *number == material_number)
        .map(|(_, (x, y))| StampCoordinate { x: *x, y: *y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_description_hit_and_miss() {
        assert_eq!(grade_description("1 HM"), Some("No.1 Heavy Melt / Short Iron"));
        assert_eq!(grade_description("SHD LOG"), Some("Shredder Bundles"));
        assert_eq!(grade_description("UNKNOWN"), None);
    }

    #[test]
    fn test_file_name_hit_and_miss() {
        assert_eq!(file_name("CAR BODY"), Some("HiWay Scrap Cars"));
        assert_eq!(file_name("UNKNOWN"), None);
    }

    #[test]
    fn test_stamp_coordinate_lookup() {
        let coord = stamp_coordinate("50000246").unwrap();
        assert_eq!(coord.x, 411.31);
        assert_eq!(coord.y, 678.86);
        assert!(stamp_coordinate("12345678").is_none());
    }
}
