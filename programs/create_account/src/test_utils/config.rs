use std::path::{Path, PathBuf};

/// Lamports airdropped to the default payer when a harness starts.
pub const DEFAULT_PAYER_LAMPORTS: u64 = 10_000_000_000;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory holding compiled program binaries (`<label>.so`).
    pub deploy_dir: PathBuf,
    pub payer_lamports: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        let deploy_dir = match std::env::var_os("SBF_OUT_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => Path::new(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy"),
        };
        Self {
            deploy_dir,
            payer_lamports: DEFAULT_PAYER_LAMPORTS,
        }
    }
}

impl HarnessConfig {
    pub fn with_deploy_dir(mut self, deploy_dir: impl Into<PathBuf>) -> Self {
        self.deploy_dir = deploy_dir.into();
        self
    }

    pub fn with_payer_lamports(mut self, payer_lamports: u64) -> Self {
        self.payer_lamports = payer_lamports;
        self
    }

    pub fn program_path(&self, program_label: &str) -> PathBuf {
        self.deploy_dir.join(format!("{}.so", program_label))
    }
}
