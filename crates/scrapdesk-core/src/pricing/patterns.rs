//! Regex patterns for price-sheet extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Material text followed by a trailing price at the end of a line:
    /// "Aluminum Cans $0.79", "Bare Bright Copper: 3.25", ...
    pub static ref TRAILING_PRICE: Regex = Regex::new(
        r"^(.+?)\s*:?\s*\$?\s*(\d+\.?\d*)\s*$"
    ).unwrap();

    /// A line that is nothing but a (possibly $-prefixed) price.
    pub static ref BARE_PRICE_LINE: Regex = Regex::new(
        r"^\$?\s*(\d+\.?\d*)\s*$"
    ).unwrap();

    /// A price token anywhere in a line, at most two decimal places.
    pub static ref INLINE_PRICE: Regex = Regex::new(
        r"\$?\s*(\d+\.?\d{0,2})\b"
    ).unwrap();
}
