use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Singleton ledger PDA: id counter and non-reentrant execution flag.
/// Also the token authority of every schedule vault.
#[account]
#[derive(Debug)]
pub struct Ledger {
    /// Next schedule id; equals the number of schedules ever created.
    pub schedule_count: u64,
    /// Held for the full duration of `create_vesting` and `claim`.
    pub locked: bool,
    pub bump: u8,
}

impl Ledger {
    pub const SIZE: usize =
        8 + // schedule_count
        1 + // locked
        1;  // bump

    /// Take the execution lock; fails if a mutating call is already in flight.
    pub fn enter(&mut self) -> Result<()> {
        require!(!self.locked, VestingError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.locked = false;
    }

    /// Hand out the next sequential id.
    pub fn allocate_id(&mut self) -> Result<u64> {
        let id = self.schedule_count;
        self.schedule_count = id.checked_add(1).ok_or(VestingError::MathOverflow)?;
        Ok(id)
    }
}
