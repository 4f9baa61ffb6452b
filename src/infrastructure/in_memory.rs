use crate::domain::coupon::normalize_code;
use crate::domain::ports::CouponCatalog;
use crate::error::{Result, ShippingError};
use std::collections::BTreeSet;

/// Codes accepted by the storefront out of the box.
pub const DEFAULT_COUPONS: [&str; 3] = ["FREESHIP", "SHIP2025", "WELCOME"];

/// An immutable, in-memory set of coupon codes.
///
/// Codes are stored normalized, so lookups are case- and
/// whitespace-insensitive once the caller normalizes its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRegistry {
    codes: BTreeSet<String>,
}

impl CouponRegistry {
    /// Builds a registry from arbitrary codes. Empty codes are rejected.
    pub fn new<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| {
                normalize_code(code.as_ref()).ok_or_else(|| {
                    ShippingError::ValidationError("Coupon codes must not be empty".to_string())
                })
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { codes })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CouponRegistry {
    fn default() -> Self {
        Self {
            codes: DEFAULT_COUPONS.iter().map(|code| code.to_string()).collect(),
        }
    }
}

impl CouponCatalog for CouponRegistry {
    fn contains(&self, normalized_code: &str) -> bool {
        self.codes.contains(normalized_code)
    }

    fn codes(&self) -> Vec<String> {
        self.codes.iter().cloned().collect()
    }
}
