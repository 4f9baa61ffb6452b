/// Source of truth for which coupon codes grant free shipping.
///
/// Implementations receive codes already normalized by
/// [`normalize_code`](super::coupon::normalize_code).
pub trait CouponCatalog: Send + Sync {
    fn contains(&self, normalized_code: &str) -> bool;
    fn codes(&self) -> Vec<String>;
}

pub type CouponCatalogBox = Box<dyn CouponCatalog>;
