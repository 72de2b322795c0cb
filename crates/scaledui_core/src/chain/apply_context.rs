use spdlog::debug;

use crate::chain::{
    ContractError, address::Address, event::DisplayMultiplierChanged, time::TimePointSec,
    utils::scaled_assert,
};

/// Per-message execution context: who sent it, when, and what it emitted.
#[derive(Debug, Clone)]
pub struct ApplyContext {
    caller: Address,
    now: TimePointSec,
    query_id: Option<u64>,
    events: Vec<DisplayMultiplierChanged>,
}

impl ApplyContext {
    pub fn new(caller: Address, now: TimePointSec) -> Self {
        Self {
            caller,
            now,
            query_id: None,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn caller(&self) -> &Address {
        &self.caller
    }

    #[inline]
    pub fn now(&self) -> TimePointSec {
        self.now
    }

    #[inline]
    pub fn query_id(&self) -> Option<u64> {
        self.query_id
    }

    pub fn set_query_id(&mut self, query_id: u64) {
        self.query_id = Some(query_id);
    }

    pub fn is_caller(&self, account: &Address) -> bool {
        &self.caller == account
    }

    pub fn require_caller(&self, account: &Address) -> Result<(), ContractError> {
        scaled_assert(
            self.is_caller(account),
            ContractError::NotOwner(self.caller.to_string()),
        )
    }

    pub fn emit(&mut self, event: DisplayMultiplierChanged) {
        debug!(
            "emitting display multiplier change {}/{}",
            event.numerator, event.denominator
        );
        self.events.push(event);
    }

    pub fn events(&self) -> &[DisplayMultiplierChanged] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<DisplayMultiplierChanged> {
        std::mem::take(&mut self.events)
    }
}
