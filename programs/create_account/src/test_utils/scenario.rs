use super::config::HarnessConfig;
use super::error::{HarnessError, Result};
use super::identity::Identity;
use super::submitter::CreateAccountRequest;
use super::test_runner::TestRunner;
use super::verifier::verify_created;
use crate::NEW_ACCOUNT_SPACE;
use solana_sdk::{account::Account, signature::Signature};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScenarioState {
    #[default]
    Uninitialized,
    LedgerReady,
    AccountSubmitted,
    Confirmed,
    Verified,
    /// Carries the state the failure was reached from.
    Failed(FailedAt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAt {
    AccountSubmitted,
    Confirmed,
}

impl ScenarioState {
    pub fn can_transition_to(self, next: ScenarioState) -> bool {
        use ScenarioState::*;
        matches!(
            (self, next),
            (Uninitialized, LedgerReady)
                | (LedgerReady, AccountSubmitted)
                | (AccountSubmitted, Confirmed)
                | (Confirmed, Verified)
                | (AccountSubmitted, Failed(FailedAt::AccountSubmitted))
                | (Confirmed, Failed(FailedAt::Confirmed))
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ScenarioState::Verified | ScenarioState::Failed(_))
    }

    fn failed(self) -> Option<ScenarioState> {
        match self {
            ScenarioState::AccountSubmitted => {
                Some(ScenarioState::Failed(FailedAt::AccountSubmitted))
            }
            ScenarioState::Confirmed => Some(ScenarioState::Failed(FailedAt::Confirmed)),
            _ => None,
        }
    }
}

/// One create-account run: owns a fresh ledger and a fresh identity, and is
/// dropped with them when the test ends.
pub struct CreateAccountScenario {
    pub runner: TestRunner,
    pub new_account: Identity,
    state: ScenarioState,
    signature: Option<Signature>,
}

impl CreateAccountScenario {
    pub fn start(config: HarnessConfig) -> Result<Self> {
        let runner =
            TestRunner::start_with_config(config, super::PROGRAM_LABEL, super::program_id())?;
        let mut scenario = Self {
            runner,
            new_account: Identity::generate(),
            state: ScenarioState::Uninitialized,
            signature: None,
        };
        scenario.advance(ScenarioState::LedgerReady)?;
        Ok(scenario)
    }

    pub fn state(&self) -> ScenarioState {
        self.state
    }

    pub fn signature(&self) -> Option<Signature> {
        self.signature
    }

    /// Submits `initialize` with the default payer and the scenario's identity.
    pub fn submit(&mut self) -> Result<Signature> {
        self.advance(ScenarioState::AccountSubmitted)?;
        let payer = self.runner.default_payer();
        let request = CreateAccountRequest::new(&payer, &self.new_account);
        let outcome = self.runner.create_account(&request);
        let signature = self.settle(outcome, ScenarioState::Confirmed)?;
        self.signature = Some(signature);
        Ok(signature)
    }

    pub fn verify(&mut self) -> Result<Account> {
        self.advance_check(ScenarioState::Verified)?;
        let outcome = verify_created(
            &self.runner.connection(),
            &self.new_account.pubkey(),
            NEW_ACCOUNT_SPACE as usize,
        );
        self.settle(outcome, ScenarioState::Verified)
    }

    fn settle<T>(&mut self, outcome: Result<T>, on_success: ScenarioState) -> Result<T> {
        match outcome {
            Ok(value) => {
                self.advance(on_success)?;
                Ok(value)
            }
            Err(err) => {
                if let Some(failed) = self.state.failed() {
                    self.state = failed;
                }
                Err(err)
            }
        }
    }

    fn advance_check(&self, next: ScenarioState) -> Result<()> {
        if self.state.can_transition_to(next) {
            Ok(())
        } else {
            Err(HarnessError::InvalidTransition {
                from: self.state,
                to: next,
            })
        }
    }

    fn advance(&mut self, next: ScenarioState) -> Result<()> {
        self.advance_check(next)?;
        self.state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use ScenarioState::*;

    #[test_case(Uninitialized, LedgerReady)]
    #[test_case(LedgerReady, AccountSubmitted)]
    #[test_case(AccountSubmitted, Confirmed)]
    #[test_case(Confirmed, Verified)]
    #[test_case(AccountSubmitted, Failed(FailedAt::AccountSubmitted))]
    #[test_case(Confirmed, Failed(FailedAt::Confirmed))]
    fn allowed_transitions(from: ScenarioState, to: ScenarioState) {
        assert!(from.can_transition_to(to));
    }

    #[test_case(Uninitialized, AccountSubmitted ; "skip ledger start")]
    #[test_case(LedgerReady, Confirmed ; "skip submission")]
    #[test_case(AccountSubmitted, Verified ; "verify before confirmation")]
    #[test_case(LedgerReady, Failed(FailedAt::AccountSubmitted) ; "fail before submission")]
    #[test_case(Verified, LedgerReady ; "restart after verification")]
    #[test_case(Failed(FailedAt::Confirmed), Verified ; "verify after failure")]
    fn rejected_transitions(from: ScenarioState, to: ScenarioState) {
        assert!(!from.can_transition_to(to));
    }

    #[test]
    fn terminal_states() {
        assert!(Verified.is_terminal());
        assert!(Failed(FailedAt::AccountSubmitted).is_terminal());
        assert!(!Confirmed.is_terminal());
        assert_eq!(ScenarioState::default(), Uninitialized);
    }

    #[test]
    fn failure_is_only_reachable_after_submission() {
        assert_eq!(AccountSubmitted.failed(), Some(Failed(FailedAt::AccountSubmitted)));
        assert_eq!(Confirmed.failed(), Some(Failed(FailedAt::Confirmed)));
        assert_eq!(LedgerReady.failed(), None);
    }
}
