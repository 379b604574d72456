//! Interactive confirmation and prompt dialogs.

use std::io::{self, BufRead, Write};

use tokio::runtime::{Handle, RuntimeFlavor};

/// Blocking dialogs shown before a moderation decision is sent.
#[cfg_attr(test, mockall::automock)]
pub trait Dialogs: Send + Sync {
    /// Asks a yes/no question; `true` means confirmed.
    fn confirm(&self, question: &str) -> bool;

    /// Asks for free text; `None` means the viewer cancelled.
    fn prompt(&self, question: &str) -> Option<String>;
}

/// Dialogs answered on the terminal.
///
/// Preset answers bypass the terminal: `assume_yes` confirms every question
/// and `preset_reason` answers every prompt.
#[derive(Debug, Clone, Default)]
pub struct TerminalDialogs {
    assume_yes: bool,
    preset_reason: Option<String>,
}

impl TerminalDialogs {
    /// Creates terminal dialogs with optional preset answers.
    #[must_use]
    pub const fn new(assume_yes: bool, preset_reason: Option<String>) -> Self {
        Self {
            assume_yes,
            preset_reason,
        }
    }

    fn ask(question: &str) -> io::Result<Option<String>> {
        outside_async_workers(|| {
            read_answer(question, &mut io::stdin().lock(), &mut io::stdout().lock())
        })
    }
}

/// Runs a blocking terminal read without stalling other tasks.
///
/// Dialogs are answered from inside async controllers. On a multi-thread
/// runtime the worker hands its queued tasks to another thread for the
/// duration of `read`. A current-thread runtime has no other worker, so the
/// read blocks it as it would without a runtime.
fn outside_async_workers<R>(read: impl FnOnce() -> R) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(read)
        }
        _ => read(),
    }
}

fn read_answer(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<String>> {
    write!(output, "{question} ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    Ok(Some(answer.trim_end_matches(['\r', '\n']).to_owned()))
}

impl Dialogs for TerminalDialogs {
    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match Self::ask(&format!("{question} [o/N]")) {
            Ok(Some(answer)) => matches!(answer.trim(), "o" | "O" | "oui" | "y" | "yes"),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!("confirmation dialog failed: {error}");
                false
            }
        }
    }

    fn prompt(&self, question: &str) -> Option<String> {
        if let Some(reason) = &self.preset_reason {
            return Some(reason.clone());
        }
        match Self::ask(question) {
            Ok(answer) => answer,
            Err(error) => {
                tracing::warn!("prompt dialog failed: {error}");
                None
            }
        }
    }
}

/// Dialogs replaying scripted answers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::collections::VecDeque;
    use std::sync::{Mutex, PoisonError};

    use super::Dialogs;

    /// Dialogs answering from queues and recording the questions asked.
    ///
    /// An exhausted queue behaves like a cancelled dialog.
    #[derive(Debug, Default)]
    pub struct ScriptedDialogs {
        confirmations: Mutex<VecDeque<bool>>,
        answers: Mutex<VecDeque<Option<String>>>,
        questions: Mutex<Vec<String>>,
    }

    impl ScriptedDialogs {
        /// Queues the answer to the next confirmation.
        #[must_use]
        pub fn confirming(self, answer: bool) -> Self {
            self.confirmations
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(answer);
            self
        }

        /// Queues the answer to the next prompt.
        #[must_use]
        pub fn answering(self, answer: Option<&str>) -> Self {
            self.answers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(answer.map(ToOwned::to_owned));
            self
        }

        /// Questions asked so far, in order.
        pub fn questions(&self) -> Vec<String> {
            self.questions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn record(&self, question: &str) {
            self.questions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(question.to_owned());
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm(&self, question: &str) -> bool {
            self.record(question);
            self.confirmations
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or(false)
        }

        fn prompt(&self, question: &str) -> Option<String> {
            self.record(question);
            self.answers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .flatten()
        }
    }
}
