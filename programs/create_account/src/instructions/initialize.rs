use crate::errors::CreateAccountError;
use crate::NEW_ACCOUNT_SPACE;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};

#[derive(Accounts)]
pub struct CreateSystemAccount<'info> {
    /// Pays for the new account.
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        constraint = new_account.lamports() == 0 @ CreateAccountError::AccountAlreadyExists
    )]
    pub new_account: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<CreateSystemAccount>) -> Result<()> {
    msg!("Program invoked. Creating a system account...");
    msg!("  New public key will be: {}", ctx.accounts.new_account.key());

    let lamports = Rent::get()?.minimum_balance(NEW_ACCOUNT_SPACE as usize);

    create_account(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.new_account.to_account_info(),
            },
        ),
        lamports,
        NEW_ACCOUNT_SPACE,
        &ctx.accounts.system_program.key(),
    )
}
