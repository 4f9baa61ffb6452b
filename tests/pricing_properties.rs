use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shipcalc::application::engine::{evaluate, validate_coupon};
use shipcalc::domain::money::Money;
use shipcalc::domain::pricing::PricingInput;

const COUPONS: [&str; 6] = ["", "FREESHIP", " ship2025 ", "welcome", "BOGUS", "   "];

#[test]
fn test_random_orders_respect_invariants() {
    let mut rng = rand::thread_rng();

    for _ in 0..2_000 {
        let cents: i64 = rng.gen_range(-10_000..50_000);
        let amount = Decimal::new(cents, 2);
        let registered: bool = rng.gen_bool(0.5);
        let coupon = COUPONS[rng.gen_range(0..COUPONS.len())];

        let result = evaluate(&PricingInput::new(registered, amount, coupon));

        assert!(result.amount >= Money::ZERO);
        assert_eq!(result.total, result.amount + result.shipping_fee);
        assert!(
            result.shipping_fee == Money::ZERO || result.shipping_fee == Money::new(dec!(10.00)),
            "unexpected fee {:?}",
            result.shipping_fee
        );
        assert_eq!(result.free_shipping, result.shipping_fee == Money::ZERO);

        let expected = registered && (result.amount.value() > dec!(100.00) || validate_coupon(coupon));
        assert_eq!(result.free_shipping, expected, "amount {amount}, coupon {coupon:?}");
    }
}

#[test]
fn test_no_coupon_free_shipping_matches_threshold() {
    let mut rng = rand::thread_rng();

    for _ in 0..2_000 {
        let amount = Decimal::new(rng.gen_range(0..30_000), 2);
        let registered: bool = rng.gen_bool(0.5);

        let result = evaluate(&PricingInput::new(registered, amount, ""));
        assert_eq!(result.free_shipping, registered && amount > dec!(100.00));
    }
}

#[test]
fn test_unregistered_never_ships_free() {
    for coupon in COUPONS {
        for amount in [dec!(0), dec!(100), dec!(100.01), dec!(10000)] {
            let result = evaluate(&PricingInput::new(false, amount, coupon));
            assert!(!result.free_shipping);
            assert_eq!(result.shipping_fee, Money::new(dec!(10.00)));
        }
    }
}

#[test]
fn test_coupon_validation_ignores_case_and_whitespace() {
    assert!(validate_coupon(" freeship "));
    assert_eq!(validate_coupon(" freeship "), validate_coupon("FREESHIP"));
    assert!(!validate_coupon(""));
    assert!(!validate_coupon("BOGUS"));
}
