mod unsigned;

pub use unsigned::VarUint;
