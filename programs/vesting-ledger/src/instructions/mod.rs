pub mod initialize_ledger;
pub mod create_vesting;
pub mod claim;
pub mod get_claimable;
pub mod get_schedule;
pub mod list_by_creator;
pub mod list_by_beneficiary;
pub mod list_all;
pub mod schedule_count;

pub use initialize_ledger::*;
pub use create_vesting::*;
pub use claim::*;
pub use get_claimable::*;
pub use get_schedule::*;
pub use list_by_creator::*;
pub use list_by_beneficiary::*;
pub use list_all::*;
pub use schedule_count::*;
