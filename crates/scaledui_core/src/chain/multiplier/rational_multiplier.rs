use core::fmt;

use scaledui_proc_macros::{NumBits, Read, Write};
use scaledui_serialization::VarUint;
use serde::{Deserialize, Serialize};

use crate::chain::{ContractError, utils::scaled_assert};

/// Display multiplier applied to raw ledger balances. Not reduced to lowest
/// terms; `3/2` and `6/4` are distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Read, Write, NumBits, Serialize, Deserialize)]
pub struct RationalMultiplier {
    pub numerator: VarUint,
    pub denominator: VarUint,
}

impl RationalMultiplier {
    pub const IDENTITY: RationalMultiplier = RationalMultiplier {
        numerator: VarUint::new(1),
        denominator: VarUint::new(1),
    };

    pub fn new(numerator: impl Into<VarUint>, denominator: impl Into<VarUint>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Both terms must be non-zero.
    pub fn validate(&self) -> Result<(), ContractError> {
        scaled_assert(
            !self.numerator.is_zero() && !self.denominator.is_zero(),
            ContractError::ZeroMultiplier,
        )
    }

    pub fn is_identity(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Scales a raw balance for display, rounding down. `None` on overflow
    /// or a zero denominator.
    pub fn apply(&self, raw: u128) -> Option<u128> {
        raw.checked_mul(self.numerator.as_u128())?
            .checked_div(self.denominator.as_u128())
    }

    pub fn as_tuple(&self) -> (u128, u128) {
        (self.numerator.as_u128(), self.denominator.as_u128())
    }
}

impl Default for RationalMultiplier {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for RationalMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
