use super::error::{HarnessError, Result};
use super::identity::Identity;
use super::test_runner::TestRunner;
use solana_sdk::{
    instruction::AccountMeta,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};

pub const INITIALIZE_IX: &str = "initialize";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateAccountAccounts {
    /// Payer and authority.
    pub user: Pubkey,
    pub new_account: Pubkey,
}

/// A fully typed `initialize` call, validated before it reaches the ledger.
pub struct CreateAccountRequest<'a> {
    pub instruction: crate::instruction::Initialize,
    pub accounts: CreateAccountAccounts,
    pub signers: Vec<&'a Keypair>,
}

impl<'a> CreateAccountRequest<'a> {
    /// A request signed by both the payer and the new account.
    pub fn new(payer: &'a Keypair, new_account: &'a Identity) -> Self {
        Self {
            instruction: crate::instruction::Initialize {},
            accounts: CreateAccountAccounts {
                user: payer.pubkey(),
                new_account: new_account.pubkey(),
            },
            signers: vec![payer, new_account.keypair()],
        }
    }

    pub fn with_signers(mut self, signers: Vec<&'a Keypair>) -> Self {
        self.signers = signers;
        self
    }

    /// Every referenced account must sign, and nothing else may.
    pub fn validate(&self) -> Result<()> {
        let signed: Vec<Pubkey> = self.signers.iter().map(|signer| signer.pubkey()).collect();
        for (role, required) in [
            ("user", self.accounts.user),
            ("new_account", self.accounts.new_account),
        ] {
            if !signed.contains(&required) {
                return Err(HarnessError::Signature(format!(
                    "missing signature for {} {}",
                    role, required
                )));
            }
        }
        if let Some(extra) = signed
            .iter()
            .find(|key| **key != self.accounts.user && **key != self.accounts.new_account)
        {
            return Err(HarnessError::Signature(format!(
                "unexpected signer {}",
                extra
            )));
        }
        Ok(())
    }

    pub fn account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.accounts.user, true),
            AccountMeta::new(self.accounts.new_account, true),
            AccountMeta::new_readonly(solana_sdk_ids::system_program::ID, false),
        ]
    }
}

impl TestRunner {
    /// Submits `initialize` once. Errors are returned as-is, never retried.
    pub fn create_account(&mut self, request: &CreateAccountRequest) -> Result<Signature> {
        request.validate()?;
        self.send_instruction(
            INITIALIZE_IX,
            request.account_metas(),
            &request.instruction,
            &request.signers,
            &request.accounts.user,
        )
    }
}
