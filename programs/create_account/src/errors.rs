use anchor_lang::prelude::*;

#[error_code]
pub enum CreateAccountError {
    #[msg("Account already exists")]
    AccountAlreadyExists,
}
