#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod errors;
mod instructions;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

pub use errors::CreateAccountError;
use instructions::*;

declare_id!("GwTuckQCY4N2oWFggerXuYFvEhhjv4989YvmVjMwQSB");

/// Space allocated for accounts created by `initialize`.
pub const NEW_ACCOUNT_SPACE: u64 = 0;

#[program]
pub mod create_account {
    use super::*;

    /// Creates a rent-exempt, zero-byte system account funded by `user`.
    pub fn initialize(ctx: Context<CreateSystemAccount>) -> Result<()> {
        instructions::initialize(ctx)
    }
}
