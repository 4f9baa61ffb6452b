use serde::Serialize;

/// Canonical form of a coupon code: surrounding whitespace removed, uppercased.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Badge shown next to the coupon field in the order summary.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    Valid,
    Invalid,
    Missing,
}

impl CouponStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Missing => "none",
        }
    }
}
