use super::scenario::ScenarioState;
use crate::CreateAccountError;
use solana_instruction::error::InstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_error::TransactionError;
use thiserror::Error;

/// `SystemError::AccountAlreadyInUse`
const SYSTEM_ACCOUNT_ALREADY_IN_USE: u32 = 0;
/// `SystemError::ResultWithNegativeLamports`
const SYSTEM_RESULT_WITH_NEGATIVE_LAMPORTS: u32 = 1;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to start ledger for program `{label}`: {reason}")]
    Initialization { label: String, reason: String },
    #[error("signature error: {0}")]
    Signature(String),
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("account already exists: {0}")]
    DuplicateAccount(String),
    #[error("transaction rejected: {message}")]
    Simulation { message: String, logs: Vec<String> },
    #[error("account {0} not found")]
    AccountNotFound(Pubkey),
    #[error("balance mismatch for {address}: expected {expected} lamports, found {actual}")]
    BalanceMismatch {
        address: Pubkey,
        expected: u64,
        actual: u64,
    },
    #[error("layout mismatch for {address}: {reason}")]
    LayoutMismatch { address: Pubkey, reason: String },
    #[error("invalid scenario transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: ScenarioState,
        to: ScenarioState,
    },
    #[error("failed to serialize instruction data: {0}")]
    Serialization(#[from] std::io::Error),
}

impl HarnessError {
    /// Maps a ledger rejection onto the harness taxonomy.
    pub fn from_ledger(err: &TransactionError, logs: Vec<String>) -> Self {
        let detail = format!("{:?}", err);
        match err {
            TransactionError::SignatureFailure | TransactionError::MissingSignatureForFee => {
                HarnessError::Signature(detail)
            }
            TransactionError::InsufficientFundsForFee
            | TransactionError::InsufficientFundsForRent { .. }
            | TransactionError::AccountNotFound => HarnessError::InsufficientFunds(detail),
            TransactionError::AlreadyProcessed => HarnessError::DuplicateAccount(detail),
            TransactionError::InstructionError(_, ix_err) => match ix_err {
                InstructionError::MissingRequiredSignature => HarnessError::Signature(detail),
                InstructionError::InsufficientFunds => HarnessError::InsufficientFunds(detail),
                InstructionError::Custom(code)
                    if *code == SYSTEM_ACCOUNT_ALREADY_IN_USE
                        || *code == u32::from(CreateAccountError::AccountAlreadyExists) =>
                {
                    HarnessError::DuplicateAccount(detail)
                }
                InstructionError::Custom(code) if *code == SYSTEM_RESULT_WITH_NEGATIVE_LAMPORTS => {
                    HarnessError::InsufficientFunds(detail)
                }
                InstructionError::Custom(code)
                    if *code == u32::from(anchor_lang::error::ErrorCode::AccountNotSigner) =>
                {
                    HarnessError::Signature(detail)
                }
                _ => HarnessError::Simulation {
                    message: detail,
                    logs,
                },
            },
            _ => HarnessError::Simulation {
                message: detail,
                logs,
            },
        }
    }
}
