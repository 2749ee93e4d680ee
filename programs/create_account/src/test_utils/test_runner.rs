use super::compute_metrics::send_and_record;
use super::config::HarnessConfig;
use super::error::{HarnessError, Result};
use anchor_lang::AnchorSerialize;
use litesvm::LiteSVM;
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

/// An isolated in-memory ledger with one deployed program and a funded payer.
pub struct TestRunner {
    pub svm: LiteSVM,
    pub program_id: Pubkey,
    pub payer: Keypair,
}

/// Read-only view over the ledger, mirroring the RPC calls a client would make.
pub struct Connection<'a> {
    svm: &'a LiteSVM,
}

impl<'a> Connection<'a> {
    pub fn new(svm: &'a LiteSVM) -> Self {
        Self { svm }
    }

    pub fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> u64 {
        self.svm.minimum_balance_for_rent_exemption(data_len)
    }

    pub fn get_account_info(&self, address: &Pubkey) -> Option<Account> {
        self.svm.get_account(address)
    }

    pub fn get_balance(&self, address: &Pubkey) -> u64 {
        self.svm.get_balance(address).unwrap_or(0)
    }
}

impl TestRunner {
    pub fn start(program_label: &str, program_id: Pubkey) -> Result<Self> {
        Self::start_with_config(HarnessConfig::default(), program_label, program_id)
    }

    pub fn start_with_config(
        config: HarnessConfig,
        program_label: &str,
        program_id: Pubkey,
    ) -> Result<Self> {
        let init_error = |reason: String| HarnessError::Initialization {
            label: program_label.to_string(),
            reason,
        };

        if program_id == Pubkey::default() {
            return Err(init_error("program address is unset".to_string()));
        }

        let program_path = config.program_path(program_label);
        let program_bytes = std::fs::read(&program_path)
            .map_err(|err| init_error(format!("{}: {}", program_path.display(), err)))?;

        let mut svm = LiteSVM::new();
        svm.add_program(program_id, &program_bytes)
            .map_err(|err| init_error(format!("{:?}", err)))?;

        let payer = Keypair::new();
        svm.airdrop(&payer.pubkey(), config.payer_lamports)
            .map_err(|failed| init_error(format!("payer airdrop failed: {:?}", failed.err)))?;

        println!("Ledger ready: {} deployed at {}", program_label, program_id);
        Ok(Self {
            svm,
            program_id,
            payer,
        })
    }

    /// A copy of the funded default payer, so requests can borrow it while
    /// the runner is borrowed mutably.
    pub fn default_payer(&self) -> Keypair {
        self.payer.insecure_clone()
    }

    pub fn connection(&self) -> Connection<'_> {
        Connection::new(&self.svm)
    }

    pub fn airdrop(&mut self, receiver: &Pubkey, amount: u64) -> Result<()> {
        self.svm
            .airdrop(receiver, amount)
            .map_err(|failed| HarnessError::from_ledger(&failed.err, failed.meta.logs))?;
        Ok(())
    }

    /// Builds an Anchor instruction and submits it in its own transaction,
    /// paid for by `fee_payer`. Returns once the ledger has executed it.
    pub fn send_instruction<T>(
        &mut self,
        instruction_name: &str,
        accounts: Vec<AccountMeta>,
        args: &T,
        signers: &[&Keypair],
        fee_payer: &Pubkey,
    ) -> Result<Signature>
    where
        T: AnchorSerialize,
    {
        let mut data = Vec::new();
        data.extend_from_slice(&get_discriminator(instruction_name));
        args.serialize(&mut data)?;

        let instruction = Instruction {
            program_id: self.program_id,
            accounts,
            data,
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction],
            Some(fee_payer),
            signers,
            self.svm.latest_blockhash(),
        );
        let signature = tx.signatures[0];

        match send_and_record(&mut self.svm, tx, instruction_name) {
            Ok(_) => {
                println!("Your transaction signature {}", signature);
                Ok(signature)
            }
            Err(failed) => {
                println!("Transaction failed: {:?}", failed.err);
                for line in &failed.meta.logs {
                    println!("  {}", line);
                }
                Err(HarnessError::from_ledger(&failed.err, failed.meta.logs))
            }
        }
    }
}

/// Anchor's instruction discriminator: the first 8 bytes of `sha256("global:<name>")`.
pub fn get_discriminator(instruction_name: &str) -> [u8; 8] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{}", instruction_name));
    let result = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&result[..8]);
    discriminator
}
