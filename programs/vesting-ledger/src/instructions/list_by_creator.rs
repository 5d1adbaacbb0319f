use anchor_lang::prelude::*;

use crate::constants::CREATOR_INDEX_SEED;
use crate::state::ScheduleIndex;

/// Emit the ids of every schedule funded by `creator`, in creation order,
/// as `ScheduleIds` events. Returns how many ids were emitted.
pub fn process_list_by_creator(ctx: Context<ListByCreator>, creator: Pubkey) -> Result<u64> {
    let ids = ScheduleIndex::load_ids(&ctx.accounts.creator_index.to_account_info())?;
    msg!("{} schedules created by {}", ids.len(), creator);
    Ok(emit_schedule_ids(creator, &ids))
}

/// One event per chunk so no payload outgrows the runtime's data limits.
pub(crate) fn emit_schedule_ids(owner: Pubkey, ids: &[u64]) -> u64 {
    for chunk in ScheduleIndex::id_chunks(ids) {
        emit!(ScheduleIds {
            owner,
            ids: chunk.to_vec(),
        });
    }
    ids.len() as u64
}

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct ListByCreator<'info> {
    /// CHECK: may be uninitialized; an absent index reads as empty.
    #[account(seeds = [CREATOR_INDEX_SEED, creator.as_ref()], bump)]
    pub creator_index: UncheckedAccount<'info>,
}

#[event]
pub struct ScheduleIds {
    /// Creator or beneficiary the ids belong to.
    pub owner: Pubkey,
    pub ids: Vec<u64>,
}
