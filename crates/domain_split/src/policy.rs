//! Discount ordering policies
//!
//! The system's history holds two observable discount behaviors: the newer
//! one computes the discount on the post-tax amount, the older one on the
//! raw subtotal. Both are preserved as named, testable configurations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The base against which the global discount is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Discount computed on `subtotal + tax` (the financially conventional
    /// ordering: tax is charged before a post-tax discount applies)
    #[default]
    PostTax,
    /// Discount computed on the raw subtotal, before tax
    OnSubtotal,
}

impl DiscountPolicy {
    /// Returns true when the discount base includes tax
    pub fn is_post_tax(&self) -> bool {
        matches!(self, DiscountPolicy::PostTax)
    }
}

impl fmt::Display for DiscountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountPolicy::PostTax => write!(f, "post_tax"),
            DiscountPolicy::OnSubtotal => write!(f, "on_subtotal"),
        }
    }
}
