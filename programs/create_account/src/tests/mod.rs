//! Create-account scenarios against an in-memory ledger.
//!
//! Scenarios that execute the program need the compiled binary:
//! ```bash
//! anchor build
//! cargo test -p create-account -- --nocapture
//! ```
//! Without it they fail with an initialization error.

mod harness;

use crate::test_utils::{
    init_metrics, print_metrics_report, program_id, CreateAccountScenario, HarnessConfig,
    TestRunner, PROGRAM_LABEL,
};

#[ctor::ctor]
fn init() {
    init_metrics();
}

#[ctor::dtor]
fn cleanup() {
    print_metrics_report();
}

/// A fresh ledger with the program deployed. Fails the test if the program
/// hasn't been built.
fn start_runner() -> TestRunner {
    start_runner_with(HarnessConfig::default())
}

fn start_runner_with(config: HarnessConfig) -> TestRunner {
    TestRunner::start_with_config(config, PROGRAM_LABEL, program_id())
        .expect("ledger should start")
}

fn start_scenario() -> CreateAccountScenario {
    CreateAccountScenario::start(HarnessConfig::default()).expect("scenario should start")
}
