//! Program-wide constants.

/// Seed of the singleton ledger PDA (id counter, reentrancy flag, vault authority).
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed prefix of a schedule PDA; followed by the little-endian schedule id.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed prefix of a schedule's custody vault; followed by the schedule key.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix of the creator -> [id] index; followed by the creator key.
pub const CREATOR_INDEX_SEED: &[u8] = b"creator_index";

/// Seed prefix of the beneficiary -> [id] index; followed by the beneficiary key.
pub const BENEFICIARY_INDEX_SEED: &[u8] = b"beneficiary_index";

/// Schedule ids carried by one `ScheduleIds` event (fits a 1024-byte payload).
pub const MAX_IDS_PER_EVENT: usize = 127;

/// Minimum `end_time - start_time`, in seconds.
pub const MIN_VESTING_DURATION: i64 = 60;

/// Step interval lengths in seconds. A month is a fixed 30 days.
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 604_800;
pub const SECONDS_PER_MONTH: i64 = 2_592_000;
