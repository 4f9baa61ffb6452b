use super::money::{MAX_PURCHASE_AMOUNT, Money, PurchaseAmount};
use crate::error::{Result, ShippingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Flat fee charged when shipping is not free.
pub const BASE_SHIPPING: Decimal = dec!(10.00);
/// Amounts strictly above this qualify registered customers for free shipping.
pub const FREE_THRESHOLD: Decimal = dec!(100.00);

/// Shipping rates applied by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShippingPolicy {
    pub base_shipping: Money,
    pub free_threshold: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            base_shipping: Money::new(BASE_SHIPPING),
            free_threshold: Money::new(FREE_THRESHOLD),
        }
    }
}

impl ShippingPolicy {
    /// Both values must lie within `0..=MAX_PURCHASE_AMOUNT`, which keeps
    /// `amount + base_shipping` inside the `Decimal` range.
    pub fn new(base_shipping: Decimal, free_threshold: Decimal) -> Result<Self> {
        if base_shipping > MAX_PURCHASE_AMOUNT || free_threshold > MAX_PURCHASE_AMOUNT {
            return Err(ShippingError::ValidationError(format!(
                "Shipping rates must not exceed {MAX_PURCHASE_AMOUNT}"
            )));
        }
        if base_shipping < Decimal::ZERO {
            return Err(ShippingError::ValidationError(
                "Base shipping rate must not be negative".to_string(),
            ));
        }
        if free_threshold < Decimal::ZERO {
            return Err(ShippingError::ValidationError(
                "Free shipping threshold must not be negative".to_string(),
            ));
        }
        Ok(Self {
            base_shipping: Money::new(base_shipping),
            free_threshold: Money::new(free_threshold),
        })
    }
}

/// Everything the customer typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PricingInput {
    pub is_registered: bool,
    #[serde(default)]
    pub purchase_amount: PurchaseAmount,
    #[serde(default)]
    pub coupon_code: String,
}

impl PricingInput {
    pub fn new(
        is_registered: bool,
        purchase_amount: impl Into<PurchaseAmount>,
        coupon_code: impl Into<String>,
    ) -> Self {
        Self {
            is_registered,
            purchase_amount: purchase_amount.into(),
            coupon_code: coupon_code.into(),
        }
    }
}

/// A priced order.
///
/// `shipping_fee` is either zero or the policy's base rate, and
/// `total == amount + shipping_fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    pub amount: Money,
    pub free_shipping: bool,
    pub shipping_fee: Money,
    pub total: Money,
}

impl PricingResult {
    pub(crate) fn priced(amount: PurchaseAmount, free_shipping: bool, policy: &ShippingPolicy) -> Self {
        let amount = Money::from(amount);
        let shipping_fee = if free_shipping {
            Money::ZERO
        } else {
            policy.base_shipping
        };
        Self {
            amount,
            free_shipping,
            shipping_fee,
            total: amount + shipping_fee,
        }
    }
}

/// Why shipping is or is not free for an order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ShippingVerdict {
    Free,
    NotRegistered,
    BelowThreshold,
}

impl ShippingVerdict {
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Free => "Shipping is free!",
            Self::NotRegistered | Self::BelowThreshold => "Shipping is not free",
        }
    }

    pub fn detail(&self, policy: &ShippingPolicy) -> String {
        match self {
            Self::Free => "Congratulations, the shipping fee has been waived".to_string(),
            Self::NotRegistered => "Free shipping is only available to registered customers".to_string(),
            Self::BelowThreshold => format!(
                "Amount must exceed {} or a valid coupon must be applied",
                policy.free_threshold
            ),
        }
    }
}
