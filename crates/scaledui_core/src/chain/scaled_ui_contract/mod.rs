mod dispatcher;
mod scaled_ui_contract;
mod scaled_ui_contract_types;

pub use dispatcher::*;
pub use scaled_ui_contract::*;
pub use scaled_ui_contract_types::*;
