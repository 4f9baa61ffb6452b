use super::in_memory::{CouponRegistry, DEFAULT_COUPONS};
use crate::domain::pricing::{BASE_SHIPPING, FREE_THRESHOLD, ShippingPolicy};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// On-disk shape of a pricing policy override. Every field is optional.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyFile {
    pub base_shipping: Decimal,
    pub free_threshold: Decimal,
    pub coupons: Vec<String>,
}

impl Default for PolicyFile {
    fn default() -> Self {
        Self {
            base_shipping: BASE_SHIPPING,
            free_threshold: FREE_THRESHOLD,
            coupons: DEFAULT_COUPONS.iter().map(|code| code.to_string()).collect(),
        }
    }
}

impl PolicyFile {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Validates the file and splits it into the engine's two halves.
    pub fn into_parts(self) -> Result<(ShippingPolicy, CouponRegistry)> {
        let policy = ShippingPolicy::new(self.base_shipping, self.free_threshold)?;
        let registry = CouponRegistry::new(self.coupons)?;
        Ok((policy, registry))
    }
}
