mod message;
mod op_code;

pub use message::*;
pub use op_code::*;
