use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    BENEFICIARY_INDEX_SEED, CREATOR_INDEX_SEED, LEDGER_SEED, MIN_VESTING_DURATION, SCHEDULE_SEED,
    VAULT_SEED,
};
use crate::error::VestingError;
use crate::state::{
    Ledger, ReleaseFrequency, ReleaseType, ScheduleIndex, ScheduleStatus, VestingSchedule,
};
use crate::utils::account_space::{create_pda_account, grow_account};
use crate::utils::token_checks::ensure_can_send;

pub fn process_create_vesting(
    ctx: Context<CreateVesting>,
    beneficiary: Pubkey,
    total_amount: u64,
    start_time: i64,
    end_time: i64,
    release_type: ReleaseType,
    release_frequency: ReleaseFrequency,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.ledger.enter()?;

    let token = ctx.accounts.mint.key();
    let creator = ctx.accounts.creator.key();
    validate_schedule_params(&token, &beneficiary, total_amount, start_time, end_time, now)?;

    let source = &ctx.accounts.creator_token_account;
    require_keys_eq!(source.mint, token, VestingError::InvalidTokenMint);
    require_keys_eq!(source.owner, creator, VestingError::InvalidTokenAccount);
    ensure_can_send(source, total_amount)?;

    // Persist the held lock before handing control to the token program.
    ctx.accounts.ledger.exit(&crate::ID)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        total_amount,
    )?;

    // Custody must be confirmed before the record exists.
    ctx.accounts.vault.reload()?;
    require!(
        ctx.accounts.vault.amount == total_amount,
        VestingError::TransferFailed
    );

    let id = ctx.accounts.ledger.allocate_id()?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.id = id;
    schedule.creator = creator;
    schedule.token = token;
    schedule.beneficiary = beneficiary;
    schedule.total_amount = total_amount;
    schedule.start_time = start_time;
    schedule.end_time = end_time;
    schedule.release_type = release_type;
    schedule.release_frequency = release_frequency;
    schedule.amount_released = 0;
    schedule.status = ScheduleStatus::Active;
    schedule.bump = ctx.bumps.schedule;

    let payer = ctx.accounts.creator.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    append_to_index(
        &ctx.accounts.creator_index.to_account_info(),
        CREATOR_INDEX_SEED,
        creator,
        ctx.bumps.creator_index,
        &payer,
        &system_program,
        id,
    )?;
    append_to_index(
        &ctx.accounts.beneficiary_index.to_account_info(),
        BENEFICIARY_INDEX_SEED,
        beneficiary,
        ctx.bumps.beneficiary_index,
        &payer,
        &system_program,
        id,
    )?;

    msg!("Vesting schedule {} created for {}", id, beneficiary);
    emit!(VestingCreated {
        id,
        creator,
        beneficiary,
        token,
        amount: total_amount,
        start_time,
        end_time,
        release_type,
        release_frequency,
    });

    ctx.accounts.ledger.leave();
    Ok(id)
}

/// Creation preconditions, checked in order; the first violation wins.
pub(crate) fn validate_schedule_params(
    token: &Pubkey,
    beneficiary: &Pubkey,
    total_amount: u64,
    start_time: i64,
    end_time: i64,
    now: i64,
) -> Result<()> {
    require!(*token != Pubkey::default(), VestingError::InvalidToken);
    require!(
        *beneficiary != Pubkey::default(),
        VestingError::InvalidBeneficiary
    );
    require!(total_amount > 0, VestingError::InvalidAmount);
    require!(start_time >= now, VestingError::StartNotFuture);
    require!(end_time > start_time, VestingError::EndNotAfterStart);
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(VestingError::MathOverflow)?;
    require!(
        duration >= MIN_VESTING_DURATION,
        VestingError::DurationTooShort
    );
    Ok(())
}

/// Append `id` to the index PDA `[seed_prefix, owner]`, creating it on first use.
fn append_to_index<'info>(
    index_info: &AccountInfo<'info>,
    seed_prefix: &[u8],
    owner: Pubkey,
    bump: u8,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    id: u64,
) -> Result<()> {
    let mut index = match ScheduleIndex::load(index_info)? {
        Some(index) => {
            grow_account(
                index_info,
                payer,
                system_program,
                ScheduleIndex::space(index.ids.len() + 1),
            )?;
            index
        }
        None => {
            let bump_seed = [bump];
            let seeds: &[&[u8]] = &[seed_prefix, owner.as_ref(), &bump_seed];
            create_pda_account(
                index_info,
                payer,
                system_program,
                seeds,
                ScheduleIndex::space(1),
            )?;
            ScheduleIndex {
                owner,
                bump,
                ids: Vec::with_capacity(1),
            }
        }
    };

    index.append(id);
    index.store(index_info)
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateVesting<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = creator,
        space = 8 + VestingSchedule::SIZE,
        seeds = [SCHEDULE_SEED, ledger.schedule_count.to_le_bytes().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, VestingSchedule>>,

    #[account(
        init,
        payer = creator,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: creator index PDA, created or grown in-handler.
    #[account(
        mut,
        seeds = [CREATOR_INDEX_SEED, creator.key().as_ref()],
        bump
    )]
    pub creator_index: UncheckedAccount<'info>,

    /// CHECK: beneficiary index PDA, created or grown in-handler.
    #[account(
        mut,
        seeds = [BENEFICIARY_INDEX_SEED, beneficiary.as_ref()],
        bump
    )]
    pub beneficiary_index: UncheckedAccount<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingCreated {
    pub id: u64,
    pub creator: Pubkey,
    pub beneficiary: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub release_type: ReleaseType,
    pub release_frequency: ReleaseFrequency,
}
