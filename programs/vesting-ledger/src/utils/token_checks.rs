//! Pre-flight checks that turn token-program rejections into `TransferFailed`.
//! A failed CPI aborts the transaction before the handler can map its error.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::state::Account as SplTokenAccount;

use crate::error::VestingError;

/// `account` can send `amount`: not frozen and funded.
pub fn ensure_can_send(account: &SplTokenAccount, amount: u64) -> Result<()> {
    require!(!account.is_frozen(), VestingError::TransferFailed);
    require!(account.amount >= amount, VestingError::TransferFailed);
    Ok(())
}

/// `account` can receive tokens: not frozen.
pub fn ensure_can_receive(account: &SplTokenAccount) -> Result<()> {
    require!(!account.is_frozen(), VestingError::TransferFailed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_vesting_err;
    use anchor_spl::token::spl_token::state::AccountState;

    fn account(amount: u64, state: AccountState) -> SplTokenAccount {
        SplTokenAccount {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount,
            state,
            ..SplTokenAccount::default()
        }
    }

    #[test]
    fn funded_unfrozen_account_can_send_and_receive() {
        let a = account(100, AccountState::Initialized);
        assert!(ensure_can_send(&a, 100).is_ok());
        assert!(ensure_can_receive(&a).is_ok());
    }

    #[test]
    fn frozen_account_neither_sends_nor_receives() {
        let a = account(100, AccountState::Frozen);
        assert_vesting_err(ensure_can_send(&a, 1), VestingError::TransferFailed);
        assert_vesting_err(ensure_can_receive(&a), VestingError::TransferFailed);
    }

    #[test]
    fn short_balance_cannot_send() {
        let a = account(99, AccountState::Initialized);
        assert_vesting_err(ensure_can_send(&a, 100), VestingError::TransferFailed);
    }
}
