//! Checkout wizard steps.

use serde::{Deserialize, Serialize};

/// One stage of the checkout wizard.
///
/// The steps are totally ordered `Address < Payment < Review`. Moving past
/// either end saturates; placing the order from `Review` is handled by the
/// caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    #[default]
    Address,
    Payment,
    Review,
}

impl CheckoutStep {
    pub const ALL: [Self; 3] = [Self::Address, Self::Payment, Self::Review];

    /// The following step; `Review` stays at `Review`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Address => Self::Payment,
            Self::Payment | Self::Review => Self::Review,
        }
    }

    /// The preceding step; `Address` stays at `Address`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Address | Self::Payment => Self::Address,
            Self::Review => Self::Payment,
        }
    }

    /// Progress bar percentage.
    #[must_use]
    pub const fn progress(self) -> u8 {
        match self {
            Self::Address => 33,
            Self::Payment => 66,
            Self::Review => 100,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Review)
    }
}
