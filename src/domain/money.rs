use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Largest purchase amount the calculator accepts. Bigger inputs saturate
/// here, leaving headroom below `Decimal::MAX` for the shipping fee.
pub const MAX_PURCHASE_AMOUNT: Decimal = dec!(1000000000000000000000000000);

/// A monetary value in dollars.
///
/// Wraps `rust_decimal::Decimal` so prices never go through binary floating
/// point. Displays as `$1,234.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The value rounded half away from zero to whole cents.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Cents-precision text without currency symbol or grouping, e.g. `1234.50`.
    pub fn to_plain_string(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

/// Saturates at the `Decimal` bounds instead of panicking.
impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<PurchaseAmount> for Money {
    fn from(amount: PurchaseAmount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.2}", rounded.abs());
        let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        write!(f, "{sign}${}.{cents}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A purchase amount as entered by the customer.
///
/// Construction never fails. Negative, non-numeric and non-finite input
/// collapse to zero; finite amounts above [`MAX_PURCHASE_AMOUNT`] saturate to
/// it. A `PurchaseAmount` is therefore always within `0..=MAX_PURCHASE_AMOUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct PurchaseAmount(Decimal);

impl PurchaseAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX: Self = Self(MAX_PURCHASE_AMOUNT);

    pub fn new(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, MAX_PURCHASE_AMOUNT).normalize())
    }

    /// Parses raw form text. Blank input is zero, as is anything that is not
    /// a number. Scientific notation (`1e3`) is accepted, and numbers too
    /// large for `Decimal` (`1e30`) saturate to [`PurchaseAmount::MAX`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::ZERO;
        }
        match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
            Ok(value) => Self::new(value),
            Err(_) => trimmed
                .parse::<f64>()
                .map(Self::from_f64)
                .unwrap_or(Self::ZERO),
        }
    }

    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        Decimal::from_f64(value).map(Self::new).unwrap_or(Self::MAX)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for PurchaseAmount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<&str> for PurchaseAmount {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

struct PurchaseAmountVisitor;

impl Visitor<'_> for PurchaseAmountVisitor {
    type Value = PurchaseAmount;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a purchase amount as a number or string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::new(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::new(Decimal::from(v)))
    }

    // Goes through the shortest decimal text so 1.005 stays 1.005.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::parse(&v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PurchaseAmount::ZERO)
    }
}

/// Accepts numbers, numeric strings and anything else, normalizing like
/// [`PurchaseAmount::parse`].
impl<'de> Deserialize<'de> for PurchaseAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(PurchaseAmountVisitor)
    }
}
