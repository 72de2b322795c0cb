use scaledui_proc_macros::{NumBits, Read, Write};
use scaledui_serialization::{BitSlice, Read, VarUint, Write};
use serde::{Deserialize, Serialize};

use crate::chain::{
    ContractError, config::OP_DISPLAY_MULTIPLIER_CHANGED, multiplier::RationalMultiplier,
    utils::scaled_assert,
};

/// Log record emitted whenever the active multiplier is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Read, Write, NumBits, Serialize, Deserialize)]
pub struct DisplayMultiplierChanged {
    pub numerator: VarUint,
    pub denominator: VarUint,
    pub comment: Option<String>,
}

impl DisplayMultiplierChanged {
    pub fn new(multiplier: RationalMultiplier, comment: Option<String>) -> Self {
        Self {
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

    /// Packs the event as it appears in the outbound log: op tag then payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContractError> {
        Ok((OP_DISPLAY_MULTIPLIER_CHANGED, self.clone()).pack()?)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ContractError> {
        let slice = BitSlice::from_packed(bytes)?;
        let mut pos = 0;
        let op = u32::read(&slice, &mut pos)?;
        scaled_assert(
            op == OP_DISPLAY_MULTIPLIER_CHANGED,
            ContractError::MalformedRecord(format!("unexpected event tag {:#010x}", op)),
        )?;
        let event = Self::read(&slice, &mut pos)?;
        slice.end_parse(pos)?;
        Ok(event)
    }
}
