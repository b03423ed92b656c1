//! Interactive ledger session
//!
//! Reads commands line by line, dispatches them to the store, and prints the
//! changes the store reports through its subscription.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand, ValueEnum};

use super::export::{write_export, ExportFormat};
use super::words::split_words;
use crate::config::{Settings, WarikanPaths};
use crate::display::{format_expense_table, format_member_list};
use crate::error::WarikanResult;
use crate::models::{Expense, Money};
use crate::store::{Change, LedgerAction, LedgerStore, Outcome};

/// One line of session input
#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Add a member
    Member {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Record an expense
    Expense {
        paid_by: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Remove every expense with this description
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Edit a draft without committing it
    #[command(subcommand)]
    Draft(DraftCommand),
    /// Commit the current draft
    Commit {
        #[arg(value_enum)]
        target: CommitTarget,
    },
    /// List members
    Members,
    /// List expenses
    Expenses,
    /// Show drafts, members, and expenses
    Show,
    /// Export the session
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        path: PathBuf,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum DraftCommand {
    /// Replace the member draft
    Member {
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Replace the expense draft
    Expense {
        paid_by: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        description: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CommitTarget {
    Member,
    Expense,
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A terminal session over one ledger store
pub struct Session<R, W> {
    store: LedgerStore,
    settings: Settings,
    paths: WarikanPaths,
    input: R,
    output: W,
    changes: Rc<RefCell<Vec<Change>>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Wrap `store`, subscribing to its changes for rendering
    pub fn new(mut store: LedgerStore, settings: Settings, paths: WarikanPaths, input: R, output: W) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |notification| {
            if notification.change.is_commit() {
                sink.borrow_mut().push(notification.change.clone());
            }
        });

        Self {
            store,
            settings,
            paths,
            input,
            output,
            changes,
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> WarikanResult<()> {
        writeln!(self.output, "warikan session. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one input line
    pub fn execute_line(&mut self, line: &str) -> WarikanResult<Flow> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(self.output, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        let flow = self.execute(command)?;
        self.render_changes()?;
        Ok(flow)
    }

    fn execute(&mut self, command: SessionCommand) -> WarikanResult<Flow> {
        match command {
            SessionCommand::Member { name } => {
                self.store.dispatch(LedgerAction::UpdateInputMember(name.join(" ")));
                let outcome = self.store.dispatch(LedgerAction::AddMember);
                self.report_rejection(outcome)?;
            }
            SessionCommand::Expense {
                paid_by,
                amount,
                description,
            } => {
                let Some(draft) = self.parse_expense(paid_by, &amount, description)? else {
                    return Ok(Flow::Continue);
                };
                self.store.dispatch(LedgerAction::UpdateInputExpense(draft));
                let outcome = self.store.dispatch(LedgerAction::AddExpense);
                self.report_rejection(outcome)?;
            }
            SessionCommand::Remove { description } => {
                let description = description.join(" ");
                if self.store.remove_expense(&description) == 0 {
                    writeln!(self.output, "No expense named '{}'", description.trim())?;
                }
            }
            SessionCommand::Draft(DraftCommand::Member { text }) => {
                self.store.dispatch(LedgerAction::UpdateInputMember(text.join(" ")));
            }
            SessionCommand::Draft(DraftCommand::Expense {
                paid_by,
                amount,
                description,
            }) => {
                if let Some(draft) = self.parse_expense(paid_by, &amount, description)? {
                    self.store.dispatch(LedgerAction::UpdateInputExpense(draft));
                }
            }
            SessionCommand::Commit { target } => {
                let action = match target {
                    CommitTarget::Member => LedgerAction::AddMember,
                    CommitTarget::Expense => LedgerAction::AddExpense,
                };
                let outcome = self.store.dispatch(action);
                self.report_rejection(outcome)?;
            }
            SessionCommand::Members => {
                write!(self.output, "{}", format_member_list(self.store.members()))?;
            }
            SessionCommand::Expenses => {
                write!(
                    self.output,
                    "{}",
                    format_expense_table(self.store.expenses(), &self.settings.currency_symbol)
                )?;
            }
            SessionCommand::Show => self.show()?,
            SessionCommand::Export { format, path } => {
                match write_export(&self.store, format, &path, &self.settings, &self.paths) {
                    Ok(written) => writeln!(self.output, "Exported to {}", written.display())?,
                    Err(err) => writeln!(self.output, "{}", err)?,
                }
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn parse_expense(
        &mut self,
        paid_by: String,
        amount: &str,
        description: Vec<String>,
    ) -> WarikanResult<Option<Expense>> {
        match Money::parse(amount) {
            Ok(amount) => Ok(Some(Expense::new(paid_by, description.join(" "), amount))),
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                Ok(None)
            }
        }
    }

    fn report_rejection(&mut self, outcome: Outcome) -> WarikanResult<()> {
        if let Some(reason) = outcome.reason() {
            writeln!(self.output, "Not added: {}", reason)?;
        }
        Ok(())
    }

    fn show(&mut self) -> WarikanResult<()> {
        let draft = self.store.input_expense();
        writeln!(self.output, "Member draft:  {:?}", self.store.input_member())?;
        writeln!(
            self.output,
            "Expense draft: paid by {:?}, {:?}, {}",
            draft.paid_by,
            draft.description,
            draft.amount.format_with_symbol(&self.settings.currency_symbol)
        )?;
        writeln!(self.output, "\nMembers:")?;
        write!(self.output, "{}", format_member_list(self.store.members()))?;
        writeln!(self.output, "\nExpenses:")?;
        write!(
            self.output,
            "{}",
            format_expense_table(self.store.expenses(), &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn render_changes(&mut self) -> WarikanResult<()> {
        let changes: Vec<Change> = self.changes.borrow_mut().drain(..).collect();
        for change in changes {
            writeln!(self.output, "* {}", change)?;
        }
        Ok(())
    }
}
