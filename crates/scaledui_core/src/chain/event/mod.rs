mod display_multiplier_changed;

pub use display_multiplier_changed::*;
