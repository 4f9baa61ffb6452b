//! Application layer: the pricing engine and the form that drives it.
//!
//! `PricingEngine` is the single entry point for pricing an order.
//! `FormController` keeps the calculator's view state and re-evaluates the
//! engine synchronously after every user action.

pub mod engine;
pub mod form;
