use crate::domain::money::PurchaseAmount;
use crate::domain::pricing::PricingInput;
use crate::error::{Result, ShippingError};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a batch quote file: `registered,amount,coupon`.
#[derive(Debug, Deserialize, PartialEq)]
struct QuoteRecord {
    #[serde(deserialize_with = "deserialize_flag")]
    registered: bool,
    amount: String,
    #[serde(default)]
    coupon: String,
}

impl From<QuoteRecord> for PricingInput {
    fn from(record: QuoteRecord) -> Self {
        PricingInput::new(
            record.registered,
            PurchaseAmount::parse(&record.amount),
            record.coupon,
        )
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid registration flag '{other}'"
        ))),
    }
}

/// Reads order inputs from a CSV source.
///
/// Fields are trimmed and the coupon column may be omitted. The amount is
/// normalized like form input, so only a bad registration flag or a broken
/// record makes a row fail.
pub struct QuoteReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteReader<R> {
    /// Creates a new `QuoteReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes quotes.
    pub fn quotes(self) -> impl Iterator<Item = Result<PricingInput>> {
        self.reader
            .into_deserialize::<QuoteRecord>()
            .map(|result| result.map(PricingInput::from).map_err(ShippingError::from))
    }
}
