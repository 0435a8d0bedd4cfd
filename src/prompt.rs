//! Line-oriented terminal prompts.
//!
//! [`Prompter`] owns the input and output streams so the whole question
//! sequence can run against real stdio or in-memory buffers.

use std::io::{BufRead, Write};

use crate::color::is_valid_hex;
use crate::error::PromptError;
use crate::ui::Palette;

/// Answers accepted as "yes" by [`Prompter::confirm`].
const AFFIRMATIVE_ANSWERS: &[&str] = &["j", "ja", "y", "yes"];

/// Diagnostic printed after a rejected color value.
pub const INVALID_HEX_MESSAGE: &str = "invalid HEX value, try again (example: #112233)";

/// True when `answer` is one of the accepted "yes" spellings.
pub fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&normalized.as_str())
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    palette: Palette,
    /// Read secrets without echo. Only meaningful when stdin is a terminal.
    hidden_secrets: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
            hidden_secrets: false,
        }
    }

    pub fn with_hidden_secrets(mut self, hidden: bool) -> Self {
        self.hidden_secrets = hidden;
        self
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Write one full line of output.
    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a hex color until the answer is empty or valid.
    ///
    /// Empty input selects `default`; there is no retry limit.
    pub fn color(&mut self, name: &str, default: &str) -> Result<String, PromptError> {
        let prompt = format!("{name} [{default}]{}: ", self.palette.swatch(default));
        loop {
            let answer = self.read_line(&prompt)?;
            if answer.is_empty() {
                return Ok(default.to_string());
            }
            if is_valid_hex(&answer) {
                return Ok(answer);
            }
            tracing::debug!(name, answer = %answer, "rejected hex color");
            let message = self.palette.error(INVALID_HEX_MESSAGE);
            self.say(&message)?;
        }
    }

    /// Free-text question with a fallback for empty input.
    pub fn text(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.read_line(&format!("{label} [{default}]: "))?;
        if answer.is_empty() {
            return Ok(default.to_string());
        }
        Ok(answer)
    }

    /// Yes/no question; anything other than an affirmative answer is "no".
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = self.read_line(&format!("{question} (y/n): "))?;
        Ok(is_affirmative(&answer))
    }

    /// Free-text question whose answer is not echoed on a terminal.
    pub fn secret(&mut self, label: &str) -> Result<String, PromptError> {
        if !self.hidden_secrets {
            return self.read_line(&format!("{label}: "));
        }
        self.output.flush()?;
        match rpassword::prompt_password(format!("{label}: ")) {
            Ok(value) => Ok(value.trim().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(PromptError::Closed),
            Err(e) => Err(PromptError::Io(e)),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
