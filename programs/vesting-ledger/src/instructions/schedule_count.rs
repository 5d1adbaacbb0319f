use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn process_schedule_count(ctx: Context<ScheduleCount>) -> Result<u64> {
    Ok(ctx.accounts.ledger.schedule_count)
}

#[derive(Accounts)]
pub struct ScheduleCount<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}
