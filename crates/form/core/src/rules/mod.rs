//! Pure rule derivations over form definitions.
//!
//! Nothing in this module mutates state. The controller reads these results
//! to validate a transition; callers read them to answer gameplay queries.

mod capability;
mod duration;
mod stats;

pub use capability::CapabilityResolver;
pub use duration::DurationModel;
pub use stats::{Stat, StatDeriver, ac_bonus, check_stat_safety};
