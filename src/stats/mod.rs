//! Post-game statistics and the scrolling event log.
//!
//! - `stat`: mergeable counters and records (`Stat`, `StatBook`)
//! - `log`: typed game events, notifications and the bounded `EventLog`

mod stat;
mod log;

pub use stat::{Stat, StatBook, StatKind};
pub use log::{EventLog, GameEvent, Notification};
