//! Product record
//!
//! The persisted unit of the catalog. Serialized field names match what is
//! stored under the `products` key: `id`, `name`, `price`, `image`.

use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Creation timestamp in milliseconds
    pub id: i64,
    pub name: String,
    /// Price as the user typed it
    pub price: String,
    /// Local file locator of the product image
    #[serde(rename = "image")]
    pub image_reference: String,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: impl Into<String>,
        image_reference: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            image_reference: image_reference.into(),
        }
    }

    /// Case-insensitive substring match on the name, as used by search
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Parse a user-entered price. Returns `None` unless it is a number > 0.
///
/// Conversion follows JavaScript `Number(text)`, which stored catalogs were
/// validated with: surrounding whitespace is ignored, `Infinity` and values
/// overflowing to infinity count, and `0x`/`0o`/`0b` integers are accepted.
/// Rust-only spellings such as `inf` or `nan` are not numbers.
pub fn parse_positive_price(price: &str) -> Option<f64> {
    parse_number(price.trim()).filter(|value| *value > 0.0)
}

fn parse_number(text: &str) -> Option<f64> {
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}
