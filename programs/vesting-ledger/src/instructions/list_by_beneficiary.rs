use anchor_lang::prelude::*;

use crate::constants::BENEFICIARY_INDEX_SEED;
use crate::instructions::list_by_creator::emit_schedule_ids;
use crate::state::ScheduleIndex;

/// Emit the ids of every schedule vesting to `beneficiary`, in creation order.
pub fn process_list_by_beneficiary(
    ctx: Context<ListByBeneficiary>,
    beneficiary: Pubkey,
) -> Result<u64> {
    let ids = ScheduleIndex::load_ids(&ctx.accounts.beneficiary_index.to_account_info())?;
    msg!("{} schedules vesting to {}", ids.len(), beneficiary);
    Ok(emit_schedule_ids(beneficiary, &ids))
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct ListByBeneficiary<'info> {
    /// CHECK: may be uninitialized; an absent index reads as empty.
    #[account(seeds = [BENEFICIARY_INDEX_SEED, beneficiary.as_ref()], bump)]
    pub beneficiary_index: UncheckedAccount<'info>,
}
