//! Terminal console
//!
//! [`Console`] that prompts on stdout and reads answers line by line from
//! any buffered async reader, stdin in the binary.

use crate::application::ports::Console;
use crate::shared::error::WalletError;
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Line console over a buffered reader
pub struct TerminalConsole<R> {
    reader: Mutex<R>,
}

/// Console wired to the process's stdin
pub type StdinConsole = TerminalConsole<BufReader<Stdin>>;

impl<R> TerminalConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

impl TerminalConsole<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> Console for TerminalConsole<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn ask(&self, prompt: &str) -> Result<Option<String>, WalletError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt)
            .and_then(|_| stdout.flush())
            .map_err(|e| WalletError::input(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| WalletError::input(format!("Failed to read answer: {}", e)))?;

        if read == 0 {
            log::debug!("Input closed while prompting");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&self, line: &str) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_reads_one_line_per_prompt() {
        let mock = Builder::new().read(b"12\n").read(b"y\n").build();
        let console = TerminalConsole::new(BufReader::new(mock));

        let first = console.ask("count: ").await.expect("Failed to read answer");
        assert_eq!(first.as_deref(), Some("12\n"));
        let second = console.ask("confirm: ").await.expect("Failed to read answer");
        assert_eq!(second.as_deref(), Some("y\n"));
    }

    #[tokio::test]
    async fn test_closed_input_reads_none() {
        let mock = Builder::new().read(b"last").build();
        let console = TerminalConsole::new(BufReader::new(mock));

        let partial = console.ask("count: ").await.expect("Failed to read answer");
        assert_eq!(partial.as_deref(), Some("last"));
        assert_eq!(console.ask("count: ").await.expect("Failed to read answer"), None);
    }

    #[tokio::test]
    async fn test_read_error_is_an_input_error() {
        let mock = Builder::new()
            .read_error(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
            .build();
        let console = TerminalConsole::new(BufReader::new(mock));

        let result = console.ask("count: ").await;
        assert!(matches!(result, Err(WalletError::Input(_))));
    }
}
