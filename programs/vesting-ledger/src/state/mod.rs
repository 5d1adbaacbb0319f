pub mod ledger;
pub mod schedule;
pub mod schedule_index;

pub use ledger::*;
pub use schedule::*;
pub use schedule_index::*;
