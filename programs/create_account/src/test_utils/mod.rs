// These modules use dev-dependencies (or the `test-helpers` feature), so they're
// only available during test builds.
mod compute_metrics;
mod config;
mod error;
mod identity;
mod scenario;
mod submitter;
pub mod test_runner;
mod verifier;

pub use compute_metrics::{init_metrics, print_metrics_report};
pub use config::HarnessConfig;
pub use error::{HarnessError, Result};
pub use identity::Identity;
pub use scenario::{CreateAccountScenario, FailedAt, ScenarioState};
pub use submitter::{CreateAccountAccounts, CreateAccountRequest, INITIALIZE_IX};
pub use test_runner::{Connection, TestRunner};
pub use verifier::{verify_created, verify_layout};

use solana_sdk::pubkey::Pubkey;

/// Name of the program binary produced by `anchor build`.
pub const PROGRAM_LABEL: &str = "create_account";

/// The program address in the ledger's key type.
pub fn program_id() -> Pubkey {
    Pubkey::from(crate::ID.to_bytes())
}
