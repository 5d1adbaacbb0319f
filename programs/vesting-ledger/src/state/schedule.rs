use anchor_lang::prelude::*;

use crate::constants::{
    SCHEDULE_SEED, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH,
    SECONDS_PER_WEEK,
};
use crate::error::VestingError;
use crate::utils::release;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseType {
    /// Vested amount proportional to elapsed time.
    Linear,
    /// Vested amount advances in equal chunks every `ReleaseFrequency` interval.
    StepBased,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseFrequency {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl ReleaseFrequency {
    /// Interval length in seconds. `Monthly` is a fixed 30-day month.
    pub const fn interval_seconds(self) -> i64 {
        match self {
            ReleaseFrequency::Minutely => SECONDS_PER_MINUTE,
            ReleaseFrequency::Hourly => SECONDS_PER_HOUR,
            ReleaseFrequency::Daily => SECONDS_PER_DAY,
            ReleaseFrequency::Weekly => SECONDS_PER_WEEK,
            ReleaseFrequency::Monthly => SECONDS_PER_MONTH,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    Active,
    Completed,
}

/// One vesting record, PDA `["schedule", id_le]`. Never closed.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub id: u64,
    pub creator: Pubkey,
    /// Token mint.
    pub token: Pubkey,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    /// Unix seconds.
    pub start_time: i64,
    /// Unix seconds; `end_time - start_time >= MIN_VESTING_DURATION`.
    pub end_time: i64,
    pub release_type: ReleaseType,
    /// Only meaningful for `ReleaseType::StepBased`.
    pub release_frequency: ReleaseFrequency,
    /// Monotonic, never exceeds `total_amount`.
    pub amount_released: u64,
    pub status: ScheduleStatus,
    pub bump: u8,
}

/// Outcome of a committed claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub amount: u64,
    pub total_released: u64,
    pub completed: bool,
}

impl VestingSchedule {
    pub const SIZE: usize =
        8 +  // id
        32 + // creator
        32 + // token
        32 + // beneficiary
        8 +  // total_amount
        8 +  // start_time
        8 +  // end_time
        1 +  // release_type
        1 +  // release_frequency
        8 +  // amount_released
        1 +  // status
        1;   // bump

    pub fn address(id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[SCHEDULE_SEED, &id.to_le_bytes()], &crate::ID)
    }

    /// Read schedule `id` from `info`. Anything that is not the initialized
    /// PDA for `id` is reported as `NotFound`.
    pub fn load(info: &AccountInfo, id: u64) -> Result<Self> {
        let (expected, _) = Self::address(id);
        if *info.key != expected || *info.owner != crate::ID || info.data_is_empty() {
            return err!(VestingError::NotFound);
        }
        let data = info.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        let schedule =
            Self::try_deserialize(&mut slice).map_err(|_| error!(VestingError::NotFound))?;
        require!(schedule.id == id, VestingError::NotFound);
        Ok(schedule)
    }

    /// Write the record back into its account data.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        self.try_serialize(&mut writer)
    }

    /// Claimable amount of schedule `id` at `now`; unknown ids yield 0.
    pub fn claimable_or_zero(info: &AccountInfo, id: u64, now: i64) -> Result<u64> {
        match Self::load(info, id) {
            Ok(schedule) => Ok(release::claimable_amount(&schedule, now)?),
            Err(_) => Ok(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ScheduleStatus::Active
    }

    /// Validate a claim by `caller` at `now` and commit it to the record.
    /// Nothing is mutated unless every check passes.
    pub fn record_claim(&mut self, caller: Pubkey, now: i64) -> Result<ClaimReceipt> {
        require_keys_eq!(caller, self.beneficiary, VestingError::Unauthorized);
        require!(self.is_active(), VestingError::NotActive);

        let claimable = release::claimable_amount(self, now)?;
        require!(claimable > 0, VestingError::NothingToClaim);

        let total_released = self
            .amount_released
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;
        require!(total_released <= self.total_amount, VestingError::MathOverflow);

        let completed = total_released >= self.total_amount;
        self.amount_released = total_released;
        if completed {
            self.status = ScheduleStatus::Completed;
        }

        Ok(ClaimReceipt {
            amount: claimable,
            total_released,
            completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_vesting_err;

    const T: i64 = 1_700_000_000;

    fn linear(beneficiary: Pubkey) -> VestingSchedule {
        VestingSchedule {
            id: 0,
            creator: Pubkey::new_unique(),
            token: Pubkey::new_unique(),
            beneficiary,
            total_amount: 1_000,
            start_time: T,
            end_time: T + 3_600,
            release_type: ReleaseType::Linear,
            release_frequency: ReleaseFrequency::Minutely,
            amount_released: 0,
            status: ScheduleStatus::Active,
            bump: 255,
        }
    }

    #[test]
    fn claim_by_stranger_is_unauthorized_and_mutates_nothing() {
        let mut s = linear(Pubkey::new_unique());
        let before = s.clone();
        assert_vesting_err(
            s.record_claim(Pubkey::new_unique(), T + 1_800),
            VestingError::Unauthorized,
        );
        assert_eq!(s, before);
    }

    #[test]
    fn claim_before_start_has_nothing() {
        let who = Pubkey::new_unique();
        let mut s = linear(who);
        assert_vesting_err(s.record_claim(who, T - 1), VestingError::NothingToClaim);
        assert_eq!(s.amount_released, 0);
    }

    #[test]
    fn immediate_second_claim_is_a_no_op() {
        let who = Pubkey::new_unique();
        let mut s = linear(who);

        let first = s.record_claim(who, T + 1_800).unwrap();
        assert_eq!(first.amount, 500);
        assert_eq!(first.total_released, 500);
        assert!(!first.completed);

        assert_vesting_err(s.record_claim(who, T + 1_800), VestingError::NothingToClaim);
        assert_eq!(s.amount_released, 500);
        assert_eq!(s.status, ScheduleStatus::Active);
    }

    #[test]
    fn final_claim_pays_remainder_and_completes() {
        let who = Pubkey::new_unique();
        let mut s = linear(who);
        s.total_amount = 1_001;

        let r = s.record_claim(who, T + 1_800).unwrap();
        assert_eq!(r.amount, 500);

        let r = s.record_claim(who, T + 3_601).unwrap();
        assert_eq!(r.amount, 501);
        assert_eq!(r.total_released, 1_001);
        assert!(r.completed);
        assert_eq!(s.status, ScheduleStatus::Completed);

        assert_vesting_err(s.record_claim(who, T + 10_000), VestingError::NotActive);
        assert_eq!(s.amount_released, 1_001);
    }

    #[test]
    fn release_never_exceeds_total_across_many_claims() {
        let who = Pubkey::new_unique();
        let mut s = linear(who);
        s.total_amount = 997;

        let mut paid = 0u64;
        let mut now = T;
        while now <= T + 4_000 {
            if let Ok(r) = s.record_claim(who, now) {
                paid += r.amount;
            }
            assert!(s.amount_released <= s.total_amount);
            now += 7;
        }
        assert_eq!(paid, 997);
        assert_eq!(s.amount_released, 997);
        assert_eq!(s.status, ScheduleStatus::Completed);
    }

    #[test]
    fn load_accepts_only_the_schedule_pda() {
        let s = linear(Pubkey::new_unique());
        let mut data = Vec::new();
        s.try_serialize(&mut data).unwrap();
        let (key, _) = VestingSchedule::address(s.id);
        let owner = crate::ID;
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert_eq!(VestingSchedule::load(&info, 0).unwrap(), s);
        assert_vesting_err(VestingSchedule::load(&info, 1), VestingError::NotFound);
        assert_eq!(VestingSchedule::claimable_or_zero(&info, 0, T + 1_800).unwrap(), 500);
        assert_eq!(VestingSchedule::claimable_or_zero(&info, 1, T + 1_800).unwrap(), 0);
    }

    #[test]
    fn load_rejects_uninitialized_and_foreign_accounts() {
        let (key, _) = VestingSchedule::address(3);
        let mut lamports = 0u64;
        let mut empty: Vec<u8> = Vec::new();
        let system = Pubkey::default();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut empty, &system, false, 0);
        assert_vesting_err(VestingSchedule::load(&info, 3), VestingError::NotFound);

        let mut s = linear(Pubkey::new_unique());
        s.id = 3;
        let mut data = Vec::new();
        s.try_serialize(&mut data).unwrap();
        let stranger = Pubkey::new_unique();
        let mut lamports = 1u64;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &stranger, false, 0);
        assert_vesting_err(VestingSchedule::load(&info, 3), VestingError::NotFound);
    }

    #[test]
    fn store_then_load_reflects_committed_claim() {
        let who = Pubkey::new_unique();
        let mut s = linear(who);
        let mut data = Vec::new();
        s.try_serialize(&mut data).unwrap();
        let (key, _) = VestingSchedule::address(0);
        let owner = crate::ID;
        let mut lamports = 1u64;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        s.record_claim(who, T + 900).unwrap();
        s.store(&info).unwrap();

        let reloaded = VestingSchedule::load(&info, 0).unwrap();
        assert_eq!(reloaded.amount_released, 250);
        assert_eq!(VestingSchedule::claimable_or_zero(&info, 0, T + 900).unwrap(), 0);
    }

    #[test]
    fn interval_lengths_are_fixed_seconds() {
        assert_eq!(ReleaseFrequency::Minutely.interval_seconds(), 60);
        assert_eq!(ReleaseFrequency::Hourly.interval_seconds(), 3_600);
        assert_eq!(ReleaseFrequency::Daily.interval_seconds(), 86_400);
        assert_eq!(ReleaseFrequency::Weekly.interval_seconds(), 604_800);
        assert_eq!(ReleaseFrequency::Monthly.interval_seconds(), 2_592_000);
    }

    #[test]
    fn size_matches_serialized_record() {
        let s = linear(Pubkey::new_unique());
        let mut buf = Vec::new();
        s.try_serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), 8 + VestingSchedule::SIZE);
    }
}
