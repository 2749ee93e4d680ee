use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

/// A fresh keypair owned by a single test.
pub struct Identity {
    keypair: Keypair,
}

impl Identity {
    pub fn generate() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

impl From<Keypair> for Identity {
    fn from(keypair: Keypair) -> Self {
        Self { keypair }
    }
}
