mod contract_config;

pub use contract_config::*;

pub const VERSION: &str = "v0.1.0";

// Operation codes, the first 32 bits of every message body
pub const OP_SET_SCALED_UI_DATA: u32 = 0x7a6c_3b5d;
pub const OP_SCHEDULE_SCALED_UI_CHANGE: u32 = 0x2a8b_9e1f;
pub const OP_ENACT_SCHEDULED_SCALED_UI_CHANGE: u32 = 0x61c4_f0d7;
pub const OP_DISPLAY_MULTIPLIER_CHANGED: u32 = 0xee7e_9d6c;

// Storage keys
pub const ADMIN_KEY: &[u8] = b"admin";
pub const SCALED_UI_KEY: &[u8] = b"scaled_ui";
