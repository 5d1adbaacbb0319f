use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("EkxE4Tvo99wuz8g7mr4xyruKrtBj8U59QbbUNcipd62K");

#[program]
pub mod vesting_ledger {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        process_initialize_ledger(ctx)
    }

    /// Lock `total_amount` of the mint in a new schedule vesting to `beneficiary`.
    /// Returns the new schedule id.
    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        beneficiary: Pubkey,
        total_amount: u64,
        start_time: i64,
        end_time: i64,
        release_type: ReleaseType,
        release_frequency: ReleaseFrequency,
    ) -> Result<u64> {
        process_create_vesting(
            ctx,
            beneficiary,
            total_amount,
            start_time,
            end_time,
            release_type,
            release_frequency,
        )
    }

    /// Pay out everything vested but not yet released. Beneficiary only.
    pub fn claim(ctx: Context<Claim>, id: u64) -> Result<()> {
        process_claim(ctx, id)
    }

    pub fn get_claimable(ctx: Context<GetClaimable>, id: u64) -> Result<u64> {
        process_get_claimable(ctx, id)
    }

    pub fn get_schedule(ctx: Context<GetSchedule>, id: u64) -> Result<VestingSchedule> {
        process_get_schedule(ctx, id)
    }

    /// Ids arrive as `ScheduleIds` events; returns the count.
    pub fn list_by_creator(ctx: Context<ListByCreator>, creator: Pubkey) -> Result<u64> {
        process_list_by_creator(ctx, creator)
    }

    /// Ids arrive as `ScheduleIds` events; returns the count.
    pub fn list_by_beneficiary(
        ctx: Context<ListByBeneficiary>,
        beneficiary: Pubkey,
    ) -> Result<u64> {
        process_list_by_beneficiary(ctx, beneficiary)
    }

    /// Unbounded: expects every schedule account as remaining accounts.
    pub fn list_all(ctx: Context<ListAll>) -> Result<u64> {
        process_list_all(ctx)
    }

    pub fn schedule_count(ctx: Context<ScheduleCount>) -> Result<u64> {
        process_schedule_count(ctx)
    }
}
