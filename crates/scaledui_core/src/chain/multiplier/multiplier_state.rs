use scaledui_proc_macros::{NumBits, Read, Write};

use crate::chain::multiplier::{RationalMultiplier, ScheduledChange};

/// Persisted aggregate: the live multiplier and at most one pending change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Read, Write, NumBits)]
pub struct MultiplierState {
    pub active: RationalMultiplier,
    pub pending: Option<ScheduledChange>,
}

impl MultiplierState {
    pub fn new(active: RationalMultiplier) -> Self {
        Self {
            active,
            pending: None,
        }
    }
}
