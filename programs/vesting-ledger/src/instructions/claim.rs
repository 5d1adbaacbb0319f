use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{Ledger, VestingSchedule};
use crate::utils::token_checks::{ensure_can_receive, ensure_can_send};

pub fn process_claim(ctx: Context<Claim>, id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.ledger.enter()?;

    let schedule_info = ctx.accounts.schedule.to_account_info();
    let mut schedule = VestingSchedule::load(&schedule_info, id)?;
    let receipt = schedule.record_claim(ctx.accounts.beneficiary.key(), now)?;

    let destination = &ctx.accounts.beneficiary_token_account;
    require_keys_eq!(destination.mint, schedule.token, VestingError::InvalidTokenMint);
    require_keys_eq!(
        destination.owner,
        schedule.beneficiary,
        VestingError::InvalidTokenAccount
    );
    ensure_can_receive(destination)?;

    let vault_info = ctx.accounts.vault.to_account_info();
    require_keys_eq!(
        *vault_info.owner,
        token::ID,
        VestingError::InvalidTokenAccount
    );
    let vault = {
        let data = vault_info.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        TokenAccount::try_deserialize(&mut slice)?
    };
    require_keys_eq!(vault.mint, schedule.token, VestingError::InvalidTokenMint);
    ensure_can_send(&vault, receipt.amount)?;

    // Commit before moving value: a callback during the transfer sees the
    // lock held and the already-incremented amount_released.
    schedule.store(&schedule_info)?;
    ctx.accounts.ledger.exit(&crate::ID)?;

    if receipt.completed {
        msg!("Vesting schedule {} completed", id);
        emit!(VestingCompleted {
            id,
            beneficiary: schedule.beneficiary,
            total_amount: schedule.total_amount,
        });
    }

    let ledger_bump = ctx.accounts.ledger.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[ledger_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: vault_info,
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ctx.accounts.ledger.to_account_info(),
            },
            signer_seeds,
        ),
        receipt.amount,
    )?;

    msg!("Claimed {} from vesting schedule {}", receipt.amount, id);
    emit!(TokensClaimed {
        id,
        beneficiary: schedule.beneficiary,
        amount: receipt.amount,
        total_released: receipt.total_released,
        timestamp: now,
    });

    ctx.accounts.ledger.leave();
    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: verified against the schedule PDA for `id` in-handler (NotFound otherwise).
    #[account(mut)]
    pub schedule: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    /// CHECK: Validated as an SPL Token account via unpacking in-handler.
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub beneficiary_token_account: Box<Account<'info, TokenAccount>>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_released: u64,
    pub timestamp: i64,
}

#[event]
pub struct VestingCompleted {
    pub id: u64,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
}
