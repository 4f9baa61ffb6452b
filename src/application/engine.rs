use crate::domain::coupon::{CouponStatus, normalize_code};
use crate::domain::ports::CouponCatalogBox;
use crate::domain::pricing::{PricingInput, PricingResult, ShippingPolicy, ShippingVerdict};
use crate::infrastructure::in_memory::CouponRegistry;
use std::sync::LazyLock;

static STANDARD_ENGINE: LazyLock<PricingEngine> = LazyLock::new(PricingEngine::default);

/// Returns the engine configured with the built-in policy and coupon codes.
pub fn standard_engine() -> &'static PricingEngine {
    &STANDARD_ENGINE
}

/// Checks a coupon against the built-in coupon codes.
pub fn validate_coupon(code: &str) -> bool {
    STANDARD_ENGINE.validate_coupon(code)
}

/// Prices an order with the built-in policy and coupon codes.
pub fn evaluate(input: &PricingInput) -> PricingResult {
    STANDARD_ENGINE.evaluate(input)
}

/// Decides whether an order ships for free and what it costs.
///
/// `PricingEngine` holds no mutable state. Its coupon catalog and policy are
/// fixed at construction, so every method is a pure function of its arguments
/// and the engine can be shared freely between threads.
pub struct PricingEngine {
    coupons: CouponCatalogBox,
    policy: ShippingPolicy,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(Box::new(CouponRegistry::default()), ShippingPolicy::default())
    }
}

impl PricingEngine {
    /// Creates a new `PricingEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `coupons` - The catalog of codes that grant free shipping.
    /// * `policy` - Base shipping rate and free-shipping threshold.
    pub fn new(coupons: CouponCatalogBox, policy: ShippingPolicy) -> Self {
        Self { coupons, policy }
    }

    pub fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    pub fn coupon_codes(&self) -> Vec<String> {
        self.coupons.codes()
    }

    /// Returns `true` when the trimmed, uppercased code is in the catalog.
    /// Blank input is never valid.
    pub fn validate_coupon(&self, code: &str) -> bool {
        normalize_code(code).is_some_and(|code| self.coupons.contains(&code))
    }

    pub fn coupon_status(&self, code: &str) -> CouponStatus {
        if code.trim().is_empty() {
            CouponStatus::Missing
        } else if self.validate_coupon(code) {
            CouponStatus::Valid
        } else {
            CouponStatus::Invalid
        }
    }

    /// Prices an order.
    ///
    /// Shipping is free only for registered customers whose amount is
    /// strictly above the threshold or who present a valid coupon.
    /// Unregistered customers always pay the base rate.
    pub fn evaluate(&self, input: &PricingInput) -> PricingResult {
        let coupon_valid = self.validate_coupon(&input.coupon_code);
        let amount = input.purchase_amount;
        let free_shipping = input.is_registered
            && (amount.value() > self.policy.free_threshold.value() || coupon_valid);

        let result = PricingResult::priced(amount, free_shipping, &self.policy);
        tracing::debug!(
            registered = input.is_registered,
            amount = %result.amount,
            coupon_valid,
            free_shipping,
            total = %result.total,
            "evaluated shipping"
        );
        result
    }

    /// Explains the outcome of [`evaluate`](Self::evaluate) for the same input.
    pub fn verdict(&self, input: &PricingInput) -> ShippingVerdict {
        if !input.is_registered {
            ShippingVerdict::NotRegistered
        } else if self.evaluate(input).free_shipping {
            ShippingVerdict::Free
        } else {
            ShippingVerdict::BelowThreshold
        }
    }
}
