//! Domain model: money, coupons and the shipping pricing rules.

pub mod coupon;
pub mod money;
pub mod ports;
pub mod pricing;
