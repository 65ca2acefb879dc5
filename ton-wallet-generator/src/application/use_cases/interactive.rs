//! Interactive generation session
//!
//! Asks the operator how many wallets to generate, asks again for large
//! batches, then hands the count to the bulk generator.

use crate::application::ports::Console;
use crate::core::bulk::{BulkGenerator, BulkOutcome};
use crate::shared::error::WalletError;
use crate::shared::utils::parse_leading_integer;

pub const BANNER_TITLE: &str = "TON Wallet Generator";
pub const BANNER_RULE: &str = "===================";
pub const COUNT_PROMPT: &str = "Enter the number of wallets to generate: ";
pub const INVALID_COUNT_MESSAGE: &str = "Please enter a valid positive number.";
pub const CANCELLED_MESSAGE: &str = "Operation cancelled.";

/// What the operator decided at the prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDecision {
    Proceed(usize),
    Cancelled,
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(BulkOutcome),
    Cancelled,
}

/// Prompt until a positive count is entered
///
/// Counts above `confirm_threshold` need an answer of exactly `y` or `Y`,
/// ignoring only the line ending; any other answer cancels. Running out of
/// input is an error.
pub async fn resolve_count(
    console: &dyn Console,
    confirm_threshold: u64,
) -> Result<CountDecision, WalletError> {
    let count = loop {
        let answer = next_line(console, COUNT_PROMPT).await?;
        match parse_count(&answer) {
            Some(count) => break count,
            None => console.say(INVALID_COUNT_MESSAGE),
        }
    };

    if count as u64 > confirm_threshold {
        let prompt = confirmation_prompt(count);
        let answer = next_line(console, &prompt).await?;
        if !answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y") {
            log::info!("Operator declined a batch of {} wallet(s)", count);
            console.say(CANCELLED_MESSAGE);
            return Ok(CountDecision::Cancelled);
        }
    }

    Ok(CountDecision::Proceed(count))
}

/// Run a full session: banner, prompts, then bulk generation
pub async fn run_session(
    console: &dyn Console,
    bulk: &BulkGenerator<'_>,
    confirm_threshold: u64,
) -> Result<SessionOutcome, WalletError> {
    console.say(BANNER_TITLE);
    console.say(BANNER_RULE);

    match resolve_count(console, confirm_threshold).await? {
        CountDecision::Proceed(count) => {
            let outcome = bulk.generate_bulk(count).await?;
            Ok(SessionOutcome::Completed(outcome))
        }
        CountDecision::Cancelled => Ok(SessionOutcome::Cancelled),
    }
}

pub fn confirmation_prompt(count: usize) -> String {
    format!(
        "You are about to generate {} wallets. This might take some time. Continue? (y/n): ",
        count
    )
}

fn parse_count(answer: &str) -> Option<usize> {
    parse_leading_integer(answer)
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

async fn next_line(console: &dyn Console, prompt: &str) -> Result<String, WalletError> {
    console
        .ask(prompt)
        .await?
        .ok_or_else(|| WalletError::input("Input closed before an answer was given"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::stub::StubSdk;
    use crate::core::storage::OutputStorage;
    use crate::core::wallet::WalletGenerator;
    use crate::infrastructure::platform::FileStorage;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Console fed from a fixed script of answers
    struct ScriptedConsole {
        answers: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
        output: Mutex<Vec<String>>,
    }

    impl ScriptedConsole {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
                output: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().expect("Failed to acquire lock").clone()
        }

        fn output(&self) -> Vec<String> {
            self.output.lock().expect("Failed to acquire lock").clone()
        }
    }

    #[async_trait]
    impl Console for ScriptedConsole {
        async fn ask(&self, prompt: &str) -> Result<Option<String>, WalletError> {
            self.prompts.lock().expect("Failed to acquire lock").push(prompt.to_string());
            Ok(self.answers.lock().expect("Failed to acquire lock").pop_front())
        }

        fn say(&self, line: &str) {
            self.output.lock().expect("Failed to acquire lock").push(line.to_string());
        }
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count("  42 \n"), Some(42));
        assert_eq!(parse_count("12abc"), Some(12));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("-5"), None);
        assert_eq!(parse_count(""), None);
    }

    #[tokio::test]
    async fn test_invalid_answers_are_asked_again() {
        let console = ScriptedConsole::new(&["abc", "0", "-5", "", "7"]);

        let decision = resolve_count(&console, 100).await.expect("Failed to resolve count");
        assert_eq!(decision, CountDecision::Proceed(7));
        assert_eq!(console.prompts().len(), 5);
        assert_eq!(
            console.output(),
            vec![INVALID_COUNT_MESSAGE; 4]
        );
    }

    #[tokio::test]
    async fn test_threshold_needs_no_confirmation() {
        let console = ScriptedConsole::new(&["100"]);
        let decision = resolve_count(&console, 100).await.expect("Failed to resolve count");
        assert_eq!(decision, CountDecision::Proceed(100));
        assert_eq!(console.prompts(), vec![COUNT_PROMPT.to_string()]);
    }

    #[tokio::test]
    async fn test_large_batch_confirmed() {
        for answer in ["y", "Y", "y\n", "Y\r\n"] {
            let console = ScriptedConsole::new(&["150", answer]);
            let decision = resolve_count(&console, 100).await.expect("Failed to resolve count");
            assert_eq!(decision, CountDecision::Proceed(150));
            assert_eq!(console.prompts()[1], confirmation_prompt(150));
        }
    }

    #[tokio::test]
    async fn test_large_batch_declined() {
        for answer in ["n", "yes", "", " y", "y "] {
            let console = ScriptedConsole::new(&["101", answer]);
            let decision = resolve_count(&console, 100).await.expect("Failed to resolve count");
            assert_eq!(decision, CountDecision::Cancelled);
            assert_eq!(console.output(), vec![CANCELLED_MESSAGE.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_closed_input_is_an_error() {
        let console = ScriptedConsole::new(&["abc"]);
        let result = resolve_count(&console, 100).await;
        assert!(matches!(result, Err(WalletError::Input(_))));

        let console = ScriptedConsole::new(&["500"]);
        let result = resolve_count(&console, 100).await;
        assert!(matches!(result, Err(WalletError::Input(_))));
    }

    #[tokio::test]
    async fn test_cancelled_session_generates_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sdk = StubSdk::new();
        let repository = FileStorage::new(dir.path());
        let bulk = BulkGenerator::new(
            WalletGenerator::new(&sdk),
            OutputStorage::new(&repository, "wallet.txt"),
        );
        let console = ScriptedConsole::new(&["250", "n"]);

        let outcome = run_session(&console, &bulk, 100).await.expect("Failed to run session");
        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert_eq!(sdk.mnemonic_calls(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).expect("Failed to list directory").count(), 0);
        assert_eq!(console.output()[..2], [BANNER_TITLE.to_string(), BANNER_RULE.to_string()]);
    }

    #[tokio::test]
    async fn test_completed_session() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sdk = StubSdk::new();
        let repository = FileStorage::new(dir.path());
        let bulk = BulkGenerator::new(
            WalletGenerator::new(&sdk),
            OutputStorage::new(&repository, "wallet.txt"),
        );
        let console = ScriptedConsole::new(&["nope", "2"]);

        let outcome = run_session(&console, &bulk, 100).await.expect("Failed to run session");
        match outcome {
            SessionOutcome::Completed(outcome) => {
                assert_eq!(outcome.generated, 2);
                assert!(outcome.addresses_path.exists());
            }
            SessionOutcome::Cancelled => panic!("Session should have completed"),
        }
        assert_eq!(sdk.mnemonic_calls(), 2);
    }
}
