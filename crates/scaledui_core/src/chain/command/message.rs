use scaledui_serialization::{BitSlice, NumBits, Read, Write, WriteError};

use crate::chain::{
    ContractError,
    command::OpCode,
    multiplier::{RationalMultiplier, ScheduledChange},
    scaled_ui_contract::{EnactScheduledScaledUiChange, ScheduleScaledUiChange, SetScaledUiData},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    SetScaledUiData(SetScaledUiData),
    ScheduleScaledUiChange(ScheduleScaledUiChange),
    EnactScheduledScaledUiChange(EnactScheduledScaledUiChange),
}

impl Command {
    pub fn op_code(&self) -> OpCode {
        match self {
            Command::SetScaledUiData(_) => OpCode::SetScaledUiData,
            Command::ScheduleScaledUiChange(_) => OpCode::ScheduleScaledUiChange,
            Command::EnactScheduledScaledUiChange(_) => OpCode::EnactScheduledScaledUiChange,
        }
    }

    /// Reads the payload that follows the header for `op`.
    pub fn read_body(
        op: OpCode,
        slice: &BitSlice<'_>,
        pos: &mut usize,
    ) -> Result<Self, ContractError> {
        let command = match op {
            OpCode::SetScaledUiData => Command::SetScaledUiData(SetScaledUiData::read(slice, pos)?),
            OpCode::ScheduleScaledUiChange => {
                Command::ScheduleScaledUiChange(ScheduleScaledUiChange::read(slice, pos)?)
            }
            OpCode::EnactScheduledScaledUiChange => Command::EnactScheduledScaledUiChange(
                EnactScheduledScaledUiChange::read(slice, pos)?,
            ),
        };
        Ok(command)
    }
}

impl NumBits for Command {
    fn num_bits(&self) -> usize {
        match self {
            Command::SetScaledUiData(data) => data.num_bits(),
            Command::ScheduleScaledUiChange(data) => data.num_bits(),
            Command::EnactScheduledScaledUiChange(data) => data.num_bits(),
        }
    }
}

impl Write for Command {
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        match self {
            Command::SetScaledUiData(data) => data.write(bytes, pos),
            Command::ScheduleScaledUiChange(data) => data.write(bytes, pos),
            Command::EnactScheduledScaledUiChange(data) => data.write(bytes, pos),
        }
    }
}

/// An administrative message body: `op:u32 query_id:u64` then the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    pub query_id: u64,
    pub command: Command,
}

impl Message {
    pub fn new(query_id: u64, command: Command) -> Self {
        Self { query_id, command }
    }

    pub fn set_scaled_ui_data(
        query_id: u64,
        multiplier: RationalMultiplier,
        comment: Option<String>,
        preserve_scheduled_change: bool,
    ) -> Self {
        Self::new(
            query_id,
            Command::SetScaledUiData(SetScaledUiData {
                numerator: multiplier.numerator,
                denominator: multiplier.denominator,
                comment,
                preserve_scheduled_change,
            }),
        )
    }

    pub fn schedule_scaled_ui_change(query_id: u64, change: Option<ScheduledChange>) -> Self {
        Self::new(
            query_id,
            Command::ScheduleScaledUiChange(ScheduleScaledUiChange { change }),
        )
    }

    pub fn enact_scheduled_scaled_ui_change(query_id: u64) -> Self {
        Self::new(
            query_id,
            Command::EnactScheduledScaledUiChange(EnactScheduledScaledUiChange),
        )
    }

    pub fn op_code(&self) -> OpCode {
        self.command.op_code()
    }

    /// Parses a packed body. Unread bits after the payload are an error.
    pub fn unpack(bytes: &[u8]) -> Result<Self, ContractError> {
        let slice = BitSlice::from_packed(bytes)?;
        let mut pos = 0;
        let op = OpCode::read_from(&slice, &mut pos)?;
        let query_id = u64::read(&slice, &mut pos)?;
        let command = Command::read_body(op, &slice, &mut pos)?;
        slice.end_parse(pos)?;
        Ok(Self { query_id, command })
    }
}

impl NumBits for Message {
    fn num_bits(&self) -> usize {
        32 + 64 + self.command.num_bits()
    }
}

impl Write for Message {
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.op_code().as_u32().write(bytes, pos)?;
        self.query_id.write(bytes, pos)?;
        self.command.write(bytes, pos)
    }
}
