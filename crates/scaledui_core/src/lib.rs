pub mod chain;

pub use chain::{
    ApplyContext, Controller, ContractConfig, ContractError, MessageOutcome,
    address::Address,
    command::{Command, Message, OpCode},
    event::DisplayMultiplierChanged,
    multiplier::{MultiplierState, RationalMultiplier, ScheduledChange},
    storage::{FileStore, KeyValueStore, MemoryStore},
};
