use core::fmt;

use scaledui_serialization::{BitSlice, Read};

use crate::chain::{
    ContractError,
    config::{
        OP_ENACT_SCHEDULED_SCALED_UI_CHANGE, OP_SCHEDULE_SCALED_UI_CHANGE, OP_SET_SCALED_UI_DATA,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    SetScaledUiData,
    ScheduleScaledUiChange,
    EnactScheduledScaledUiChange,
}

impl OpCode {
    pub const fn as_u32(&self) -> u32 {
        match self {
            OpCode::SetScaledUiData => OP_SET_SCALED_UI_DATA,
            OpCode::ScheduleScaledUiChange => OP_SCHEDULE_SCALED_UI_CHANGE,
            OpCode::EnactScheduledScaledUiChange => OP_ENACT_SCHEDULED_SCALED_UI_CHANGE,
        }
    }

    /// Only enactment may be sent by someone other than the admin.
    pub const fn is_admin_only(&self) -> bool {
        !matches!(self, OpCode::EnactScheduledScaledUiChange)
    }

    /// Reads the leading 32-bit operation code of a message body.
    pub fn read_from(slice: &BitSlice<'_>, pos: &mut usize) -> Result<Self, ContractError> {
        let op = u32::read(slice, pos)?;
        OpCode::try_from(op)
    }
}

impl TryFrom<u32> for OpCode {
    type Error = ContractError;

    fn try_from(op: u32) -> Result<Self, Self::Error> {
        match op {
            OP_SET_SCALED_UI_DATA => Ok(OpCode::SetScaledUiData),
            OP_SCHEDULE_SCALED_UI_CHANGE => Ok(OpCode::ScheduleScaledUiChange),
            OP_ENACT_SCHEDULED_SCALED_UI_CHANGE => Ok(OpCode::EnactScheduledScaledUiChange),
            _ => Err(ContractError::UnknownOperation(op)),
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpCode::SetScaledUiData => "set_scaled_ui_data",
            OpCode::ScheduleScaledUiChange => "schedule_scaled_ui_change",
            OpCode::EnactScheduledScaledUiChange => "enact_scheduled_scaled_ui_change",
        };
        f.write_str(name)
    }
}
