pub mod address;
pub mod apply_context;
pub mod command;
pub mod config;
pub mod controller;
pub mod event;
pub mod multiplier;
pub mod scaled_ui_contract;
pub mod storage;
pub mod utils;

pub use apply_context::ApplyContext;
pub use config::ContractConfig;
pub use controller::{Controller, MessageOutcome};
pub use scaledui_error::ContractError;

pub mod time {
    pub use scaledui_time::TimePointSec;
}
