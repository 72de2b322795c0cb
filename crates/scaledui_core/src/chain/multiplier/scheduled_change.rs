use scaledui_proc_macros::{NumBits, Read, Write};
use scaledui_serialization::VarUint;
use scaledui_time::TimePointSec;

use crate::chain::{ContractError, multiplier::RationalMultiplier};

/// A multiplier waiting for its activation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Read, Write, NumBits)]
pub struct ScheduledChange {
    pub activation_time: TimePointSec,
    pub numerator: VarUint,
    pub denominator: VarUint,
    pub comment: Option<String>,
}

impl ScheduledChange {
    pub fn new(
        activation_time: impl Into<TimePointSec>,
        multiplier: RationalMultiplier,
        comment: Option<String>,
    ) -> Self {
        Self {
            activation_time: activation_time.into(),
            numerator: multiplier.numerator,
            denominator: multiplier.denominator,
            comment,
        }
    }

    pub fn multiplier(&self) -> RationalMultiplier {
        RationalMultiplier {
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        self.multiplier().validate()
    }

    pub fn is_due(&self, now: TimePointSec) -> bool {
        self.activation_time.reached_by(now)
    }
}
