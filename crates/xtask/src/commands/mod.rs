//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod list;
mod read_state;
mod show;
mod simulate;

pub use list::List;
pub use read_state::ReadState;
pub use show::Show;
pub use simulate::Simulate;
