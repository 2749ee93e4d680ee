use super::error::{HarnessError, Result};
use super::test_runner::Connection;
use solana_sdk::{account::Account, pubkey::Pubkey};

/// Checks that `address` exists and holds exactly the rent-exempt minimum for
/// `expected_data_len` bytes. A single read is authoritative: the simulated
/// ledger finalizes transactions synchronously.
pub fn verify_created(
    connection: &Connection,
    address: &Pubkey,
    expected_data_len: usize,
) -> Result<Account> {
    let expected = connection.get_minimum_balance_for_rent_exemption(expected_data_len);
    let account = connection
        .get_account_info(address)
        .ok_or(HarnessError::AccountNotFound(*address))?;

    if account.lamports != expected {
        return Err(HarnessError::BalanceMismatch {
            address: *address,
            expected,
            actual: account.lamports,
        });
    }
    Ok(account)
}

/// Owner and data length checks, kept separate from `verify_created`.
pub fn verify_layout(
    connection: &Connection,
    address: &Pubkey,
    expected_data_len: usize,
    expected_owner: &Pubkey,
) -> Result<Account> {
    let account = connection
        .get_account_info(address)
        .ok_or(HarnessError::AccountNotFound(*address))?;

    if account.owner != *expected_owner {
        return Err(HarnessError::LayoutMismatch {
            address: *address,
            reason: format!("owner is {}, expected {}", account.owner, expected_owner),
        });
    }
    if account.data.len() != expected_data_len {
        return Err(HarnessError::LayoutMismatch {
            address: *address,
            reason: format!(
                "data length is {}, expected {}",
                account.data.len(),
                expected_data_len
            ),
        });
    }
    Ok(account)
}
