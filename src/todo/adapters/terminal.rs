//! Line-oriented terminal adapter for the edit prompt.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::todo::ports::EditPrompt;

/// Reads replacement text from one input line.
///
/// End of input is treated as cancellation, as are I/O failures, which are
/// logged and otherwise swallowed.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R, W> LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a prompt over the given reader and writer.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, message: &str, current: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{message} [{current}]: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line
            .strip_suffix('\n')
            .map_or(line.as_str(), |rest| rest.strip_suffix('\r').unwrap_or(rest));
        Ok(Some(answer.to_owned()))
    }
}

impl<R, W> EditPrompt for LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn prompt(&mut self, message: &str, current: &str) -> Option<String> {
        self.ask(message, current).unwrap_or_else(|err| {
            warn!(error = %err, "edit prompt failed; treating as cancelled");
            None
        })
    }
}
