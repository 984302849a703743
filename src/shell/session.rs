//! Interactive session loop.

use std::cell::Cell;
use std::io::{BufRead, ErrorKind, Write};
use std::rc::Rc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info};

use super::{Command, HELP_TEXT};
use crate::todo::{
    adapters::LinePrompt,
    domain::{Todo, TodoList},
    ports::IdSource,
    services::{InputForm, TodoRow, TodoStore},
    view::{ListView, RenderError, TextRenderer},
};

const INPUT_PROMPT: &str = "> ";

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The list could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

enum Flow {
    Continue,
    Quit,
}

/// A to-do list driven by line commands.
pub struct Session<I, C>
where
    I: IdSource,
    C: Clock,
{
    store: TodoStore<I, C>,
    form: InputForm,
    renderer: TextRenderer,
    dirty: Rc<Cell<bool>>,
}

impl<I, C> Session<I, C>
where
    I: IdSource,
    C: Clock,
{
    /// Creates a session over `store`, rendering with `renderer`.
    #[must_use]
    pub fn new(mut store: TodoStore<I, C>, renderer: TextRenderer) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_: &TodoList| flag.set(true));
        Self {
            store,
            form: InputForm::new(),
            renderer,
            dirty,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TodoStore<I, C> {
        &self.store
    }

    /// Runs commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when terminal I/O or rendering fails.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        info!(tasks = self.store.state().len(), "session started");
        self.render(&mut output)?;

        let mut line = String::new();
        loop {
            write!(output, "{INPUT_PROMPT}")?;
            output.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(output)?;
                    break;
                }
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    debug!(error = %err, "ignoring undecodable input line");
                    writeln!(output, "input was not valid UTF-8; type 'help' for commands")?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{err}; type 'help' for commands")?;
                    continue;
                }
            };

            if matches!(self.execute(command, &mut input, &mut output)?, Flow::Quit) {
                break;
            }
            if self.dirty.replace(false) {
                self.render(&mut output)?;
            }
        }

        info!(tasks = self.store.state().len(), "session ended");
        Ok(())
    }

    fn execute<R, W>(
        &mut self,
        command: Command,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        match command {
            Command::Blank => {}
            Command::Add(text) => {
                self.form.set_draft(text);
                self.form.submit(&mut self.store);
            }
            Command::Edit(position) => {
                if let Some(row) = self.row_at(position) {
                    let mut prompt = LinePrompt::new(&mut *input, &mut *output);
                    row.edit(&mut self.store, &mut prompt);
                }
            }
            Command::Toggle(position) => {
                if let Some(row) = self.row_at(position) {
                    row.toggle(&mut self.store);
                }
            }
            Command::Delete(position) => {
                if let Some(row) = self.row_at(position) {
                    row.delete(&mut self.store);
                }
            }
            Command::ToggleAll => {
                self.store.toggle_all();
            }
            Command::List => self.render(output)?,
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn row_at(&self, position: usize) -> Option<TodoRow> {
        let row = position
            .checked_sub(1)
            .and_then(|index| self.store.state().at(index))
            .map(Todo::id)
            .map(TodoRow::new);
        if row.is_none() {
            debug!(position, "no task at position");
        }
        row
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<(), SessionError> {
        let rendered = self.renderer.render(&ListView::from(self.store.state()))?;
        writeln!(output, "{rendered}")?;
        Ok(())
    }
}
