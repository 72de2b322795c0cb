mod contract_error;

pub use contract_error::*;
