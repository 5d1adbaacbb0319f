use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum VestingError {
    #[msg("Invalid token mint: null identifier")]
    InvalidToken,

    #[msg("Invalid beneficiary: null identifier")]
    InvalidBeneficiary,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Start time must not be in the past")]
    StartNotFuture,

    #[msg("End time must be after start time")]
    EndNotAfterStart,

    #[msg("Vesting duration is shorter than the minimum")]
    DurationTooShort,

    #[msg("Vesting schedule not found")]
    NotFound,

    #[msg("Unauthorized: beneficiary signature required")]
    Unauthorized,

    #[msg("Vesting schedule is not active")]
    NotActive,

    #[msg("Nothing available to claim")]
    NothingToClaim,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Ledger operation already in progress")]
    ReentrantCall,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Schedule listing must cover every schedule in id order")]
    IncompleteListing,

    #[msg("Math overflow")]
    MathOverflow,
}

#[cfg(test)]
pub(crate) fn assert_vesting_err<T: core::fmt::Debug>(res: Result<T>, expected: VestingError) {
    let err = res.expect_err("expected a vesting error");
    assert_eq!(
        ProgramError::from(err),
        ProgramError::from(anchor_lang::error::Error::from(expected))
    );
}
