//! Interactive prompts
//!
//! Questions go to the writer and answers come from the reader, one line
//! each, so the same code serves a terminal and scripted input.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::models::AccountType;

/// Line-oriented question and answer helper
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question; `None` once the input is exhausted
    pub fn ask(&mut self, question: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` counts as no
    pub fn confirm(&mut self, question: &str) -> LedgerResult<bool> {
        let answer = self.ask(&format!("{} Y/N [N]:", question))?.unwrap_or_default();
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    /// Ask for the type of an account that has no classification yet
    pub fn account_type(&mut self, account: &str) -> LedgerResult<AccountType> {
        let question = format!(
            "Specify account type for '{}' [Asset/Liability] use [a/l] for short:",
            account
        );
        let answer = self
            .ask(&question)?
            .ok_or_else(|| LedgerError::missing_account_type(account))?;

        AccountType::parse(&answer).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Unsupported account type '{}' for account '{}'",
                answer, account
            ))
        })
    }

    /// Consume the prompter, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }
}
