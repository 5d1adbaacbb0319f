use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Create a program-owned PDA of `space` bytes, paid by `payer`.
/// An address that was pre-funded with lamports is topped up and assigned
/// instead of failing.
pub fn create_pda_account<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
    space: usize,
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = account.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::CreateAccount {
                    from: payer.clone(),
                    to: account.clone(),
                },
                &[signer_seeds],
            ),
            required,
            space as u64,
            &crate::ID,
        );
    }

    let shortfall = required.saturating_sub(current);
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: payer.clone(),
                    to: account.clone(),
                },
            ),
            shortfall,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Allocate {
                account_to_allocate: account.clone(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Assign {
                account_to_assign: account.clone(),
            },
            &[signer_seeds],
        ),
        &crate::ID,
    )
}

/// Grow `account` to `new_len` bytes, topping up rent exemption from `payer`.
/// No-op if the account is already large enough.
#[allow(deprecated)]
pub fn grow_account<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    new_len: usize,
) -> Result<()> {
    if new_len <= account.data_len() {
        return Ok(());
    }

    let required = Rent::get()?.minimum_balance(new_len);
    let shortfall = required.saturating_sub(account.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: payer.clone(),
                    to: account.clone(),
                },
            ),
            shortfall,
        )?;
    }

    account.realloc(new_len, false)?;
    Ok(())
}
