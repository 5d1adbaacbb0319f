use anchor_lang::prelude::*;

use crate::state::VestingSchedule;

pub fn process_get_schedule(ctx: Context<GetSchedule>, id: u64) -> Result<VestingSchedule> {
    VestingSchedule::load(&ctx.accounts.schedule.to_account_info(), id)
}

#[derive(Accounts)]
pub struct GetSchedule<'info> {
    /// CHECK: verified against the schedule PDA for `id` in-handler.
    pub schedule: UncheckedAccount<'info>,
}
