use super::engine::PricingEngine;
use crate::domain::coupon::CouponStatus;
use crate::domain::pricing::{PricingInput, PricingResult, ShippingVerdict};

/// Shown when checkout is attempted without a purchase amount.
pub const EMPTY_AMOUNT_NOTICE: &str = "Please enter a purchase amount!";

/// Order summary displayed in the checkout confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub registered: bool,
    pub coupon_status: CouponStatus,
    pub result: PricingResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Confirmed(CheckoutSummary),
    Rejected(&'static str),
}

/// View state of the shipping calculator form.
///
/// Holds raw field contents and display flags only. Prices are never cached:
/// [`FormController::result`] asks the engine again on every call.
pub struct FormController<'a> {
    engine: &'a PricingEngine,
    registered: bool,
    amount_raw: String,
    coupon: String,
    coupon_checked: bool,
    coupon_valid: bool,
    show_result: bool,
    show_checkout: bool,
}

impl<'a> FormController<'a> {
    pub fn new(engine: &'a PricingEngine) -> Self {
        Self {
            engine,
            registered: false,
            amount_raw: String::new(),
            coupon: String::new(),
            coupon_checked: false,
            coupon_valid: false,
            show_result: false,
            show_checkout: false,
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        self.engine
    }

    pub fn input(&self) -> PricingInput {
        PricingInput::new(self.registered, self.amount_raw.as_str(), self.coupon.as_str())
    }

    pub fn result(&self) -> PricingResult {
        self.engine.evaluate(&self.input())
    }

    pub fn verdict(&self) -> ShippingVerdict {
        self.engine.verdict(&self.input())
    }

    pub fn coupon_status(&self) -> CouponStatus {
        self.engine.coupon_status(&self.coupon)
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn amount_raw(&self) -> &str {
        &self.amount_raw
    }

    pub fn coupon(&self) -> &str {
        &self.coupon
    }

    /// Outcome of the last explicit coupon check, or `None` if the coupon has
    /// not been checked since it was last edited.
    pub fn coupon_check(&self) -> Option<bool> {
        self.coupon_checked.then_some(self.coupon_valid)
    }

    pub fn is_result_visible(&self) -> bool {
        self.show_result
    }

    pub fn is_checkout_open(&self) -> bool {
        self.show_checkout
    }

    pub fn toggle_registration(&mut self) {
        self.set_registered(!self.registered);
    }

    pub fn set_registered(&mut self, registered: bool) {
        tracing::debug!(registered, "registration changed");
        self.registered = registered;
    }

    pub fn edit_amount(&mut self, raw: &str) {
        tracing::debug!(raw, "amount edited");
        self.amount_raw = raw.to_string();
    }

    /// Replaces the coupon text. A previous check no longer applies.
    pub fn edit_coupon(&mut self, text: &str) {
        tracing::debug!(text, "coupon edited");
        self.coupon = text.to_string();
        self.coupon_checked = false;
    }

    pub fn apply_coupon(&mut self) -> bool {
        self.coupon_valid = self.engine.validate_coupon(&self.coupon);
        self.coupon_checked = true;
        tracing::debug!(valid = self.coupon_valid, "coupon checked");
        self.coupon_valid
    }

    pub fn check_shipping(&mut self) -> PricingResult {
        self.show_result = true;
        self.result()
    }

    /// Opens the confirmation summary, unless there is nothing to buy.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        let result = self.result();
        if !result.amount.is_positive() {
            tracing::info!("checkout rejected: no purchase amount");
            return CheckoutOutcome::Rejected(EMPTY_AMOUNT_NOTICE);
        }
        self.show_checkout = true;
        tracing::info!(total = %result.total, free_shipping = result.free_shipping, "checkout confirmed");
        CheckoutOutcome::Confirmed(CheckoutSummary {
            registered: self.registered,
            coupon_status: self.coupon_status(),
            result,
        })
    }

    /// Clears the order fields and hides the result and confirmation.
    /// The registration toggle keeps its position: a registered customer
    /// stays registered and an unregistered one stays unregistered.
    pub fn reset(&mut self) {
        tracing::debug!("form reset");
        self.amount_raw.clear();
        self.coupon.clear();
        self.coupon_checked = false;
        self.coupon_valid = false;
        self.show_result = false;
        self.show_checkout = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::standard_engine;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_initial_state() {
        let form = FormController::new(standard_engine());
        assert!(!form.is_registered());
        assert_eq!(form.amount_raw(), "");
        assert_eq!(form.coupon_check(), None);
        assert!(!form.is_result_visible());
        assert!(!form.is_checkout_open());
        assert_eq!(form.result().total, Money::new(dec!(10)));
    }

    #[test]
    fn test_result_follows_edits() {
        let mut form = FormController::new(standard_engine());
        form.edit_amount("150");
        assert!(!form.result().free_shipping);

        form.toggle_registration();
        assert!(form.result().free_shipping);
        assert_eq!(form.verdict(), ShippingVerdict::Free);

        form.edit_amount("50");
        assert!(!form.result().free_shipping);
        assert_eq!(form.verdict(), ShippingVerdict::BelowThreshold);
    }

    #[test]
    fn test_coupon_check_flag_resets_on_edit() {
        let mut form = FormController::new(standard_engine());
        form.edit_coupon("freeship");
        assert!(form.apply_coupon());
        assert_eq!(form.coupon_check(), Some(true));

        form.edit_coupon("freeshi");
        assert_eq!(form.coupon_check(), None);

        assert!(!form.apply_coupon());
        assert_eq!(form.coupon_check(), Some(false));
    }

    #[test]
    fn test_coupon_applies_without_explicit_check() {
        let mut form = FormController::new(standard_engine());
        form.set_registered(true);
        form.edit_amount("50");
        form.edit_coupon("WELCOME");
        assert!(form.result().free_shipping);
        assert_eq!(form.coupon_status(), CouponStatus::Valid);
    }

    #[test]
    fn test_check_shipping_reveals_result() {
        let mut form = FormController::new(standard_engine());
        form.edit_amount("20");
        let result = form.check_shipping();
        assert!(form.is_result_visible());
        assert_eq!(result.total, Money::new(dec!(30)));
    }

    #[test]
    fn test_checkout_rejected_without_amount() {
        let mut form = FormController::new(standard_engine());
        for raw in ["", "0", "-5", "abc"] {
            form.edit_amount(raw);
            assert_eq!(form.checkout(), CheckoutOutcome::Rejected(EMPTY_AMOUNT_NOTICE));
            assert!(!form.is_checkout_open());
        }
    }

    #[test]
    fn test_checkout_confirmed() {
        let mut form = FormController::new(standard_engine());
        form.set_registered(true);
        form.edit_amount("120");
        form.edit_coupon("bogus");

        let CheckoutOutcome::Confirmed(summary) = form.checkout() else {
            panic!("checkout should be confirmed");
        };
        assert!(form.is_checkout_open());
        assert!(summary.registered);
        assert_eq!(summary.coupon_status, CouponStatus::Invalid);
        assert!(summary.result.free_shipping);
        assert_eq!(summary.result.total, Money::new(dec!(120)));
    }

    #[test]
    fn test_reset() {
        let mut form = FormController::new(standard_engine());
        form.set_registered(true);
        form.edit_amount("120");
        form.edit_coupon("FREESHIP");
        form.apply_coupon();
        form.check_shipping();
        form.checkout();

        form.reset();
        assert!(form.is_registered());
        assert_eq!(form.amount_raw(), "");
        assert_eq!(form.coupon(), "");
        assert_eq!(form.coupon_check(), None);
        assert!(!form.is_result_visible());
        assert!(!form.is_checkout_open());
    }

    #[test]
    fn test_reset_keeps_unregistered_customer_unregistered() {
        let mut form = FormController::new(standard_engine());
        form.edit_amount("120");
        form.edit_coupon("WELCOME");
        form.checkout();

        form.reset();
        assert!(!form.is_registered());
        assert_eq!(form.amount_raw(), "");
        assert!(!form.is_checkout_open());
    }

    #[test]
    fn test_huge_amount_can_check_out() {
        let mut form = FormController::new(standard_engine());
        form.set_registered(true);
        form.edit_amount("1e30");
        assert!(matches!(form.checkout(), CheckoutOutcome::Confirmed(_)));
    }
}
