mod multiplier_state;
mod rational_multiplier;
mod scheduled_change;

pub use multiplier_state::*;
pub use rational_multiplier::*;
pub use scheduled_change::*;
