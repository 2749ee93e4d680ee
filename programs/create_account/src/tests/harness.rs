use super::start_runner_with;
use crate::test_utils::test_runner::get_discriminator;
use crate::test_utils::{
    program_id, HarnessConfig, HarnessError, Identity, TestRunner, INITIALIZE_IX, PROGRAM_LABEL,
};
use anchor_lang::Discriminator;
use solana_sdk::pubkey::Pubkey;

fn missing_deploy_dir() -> HarnessConfig {
    let dir_name = format!("create-account-missing-{}", Identity::generate().pubkey());
    HarnessConfig::default().with_deploy_dir(std::env::temp_dir().join(dir_name))
}

#[test]
fn start_fails_without_program_binary() {
    let result = TestRunner::start_with_config(missing_deploy_dir(), PROGRAM_LABEL, program_id());

    match result {
        Err(HarnessError::Initialization { label, reason }) => {
            assert_eq!(label, PROGRAM_LABEL);
            assert!(reason.contains("create_account.so"));
        }
        Err(other) => panic!("expected initialization error, got {other:?}"),
        Ok(_) => panic!("ledger started without a program binary"),
    }
}

#[test]
#[should_panic(expected = "ledger should start")]
fn scenario_fails_when_program_binary_is_missing() {
    start_runner_with(missing_deploy_dir());
}

#[test]
fn start_fails_without_program_address() {
    let result =
        TestRunner::start_with_config(HarnessConfig::default(), PROGRAM_LABEL, Pubkey::default());

    assert!(matches!(result, Err(HarnessError::Initialization { .. })));
}

#[test]
fn program_path_uses_label() {
    let config = HarnessConfig::default().with_deploy_dir("/tmp/deploy");
    assert_eq!(
        config.program_path(PROGRAM_LABEL),
        std::path::PathBuf::from("/tmp/deploy/create_account.so")
    );
}

#[test]
fn default_payer_is_funded_with_ten_sol() {
    assert_eq!(HarnessConfig::default().payer_lamports, 10_000_000_000);
    assert_eq!(HarnessConfig::default().with_payer_lamports(42).payer_lamports, 42);
}

#[test]
fn identities_are_independent() {
    let first = Identity::generate();
    let second = Identity::generate();

    assert_ne!(first.pubkey(), second.pubkey());
    assert_ne!(
        first.keypair().to_bytes().to_vec(),
        second.keypair().to_bytes().to_vec()
    );
}

#[test]
fn discriminator_matches_program() {
    assert_eq!(
        get_discriminator(INITIALIZE_IX).as_slice(),
        crate::instruction::Initialize::DISCRIMINATOR
    );
}

#[test]
fn program_id_matches_declared_address() {
    assert_eq!(
        program_id().to_string(),
        "GwTuckQCY4N2oWFggerXuYFvEhhjv4989YvmVjMwQSB"
    );
}
