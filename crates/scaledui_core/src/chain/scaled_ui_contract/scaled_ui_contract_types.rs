use scaledui_proc_macros::{NumBits, Read, Write};
use scaledui_serialization::VarUint;

use crate::chain::multiplier::{RationalMultiplier, ScheduledChange};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Read, Write, NumBits)]
pub struct SetScaledUiData {
    pub numerator: VarUint,
    pub denominator: VarUint,
    pub comment: Option<String>,
    pub preserve_scheduled_change: bool,
}

impl SetScaledUiData {
    pub fn multiplier(&self) -> RationalMultiplier {
        RationalMultiplier {
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }
}

/// `change: None` clears any pending change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Read, Write, NumBits)]
pub struct ScheduleScaledUiChange {
    pub change: Option<ScheduledChange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Read, Write, NumBits)]
pub struct EnactScheduledScaledUiChange;
