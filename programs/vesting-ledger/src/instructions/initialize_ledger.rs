use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn process_initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.schedule_count = 0;
    ledger.locked = false;
    ledger.bump = ctx.bumps.ledger;

    msg!("Vesting ledger initialized: {}", ledger.key());
    emit!(LedgerInitialized {
        ledger: ledger.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + Ledger::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
}
