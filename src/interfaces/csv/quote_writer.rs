use crate::application::engine::PricingEngine;
use crate::domain::pricing::PricingInput;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct QuoteRow {
    registered: bool,
    amount: String,
    coupon_valid: bool,
    free_shipping: bool,
    shipping_fee: String,
    total: String,
}

/// Writes priced orders as CSV:
/// `registered,amount,coupon_valid,free_shipping,shipping_fee,total`.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quote(&mut self, engine: &PricingEngine, input: &PricingInput) -> Result<()> {
        let result = engine.evaluate(input);
        self.writer.serialize(QuoteRow {
            registered: input.is_registered,
            amount: result.amount.to_plain_string(),
            coupon_valid: engine.validate_coupon(&input.coupon_code),
            free_shipping: result.free_shipping,
            shipping_fee: result.shipping_fee.to_plain_string(),
            total: result.total.to_plain_string(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
