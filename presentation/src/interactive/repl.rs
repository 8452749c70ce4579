//! REPL (Read-Eval-Print Loop) for interactive lookups
//!
//! Input is read on the async runtime while lookups run on the
//! [`LookupExecutor`], so typing is never blocked by the network. Only the
//! completion for the most recent submission is printed; results for
//! superseded terms are dropped.

use crate::config::DisplayConfig;
use crate::output::console::{ConsoleFormatter, EMPTY_INPUT_MESSAGE};
use carcino_application::{Autocomplete, LookupCompletion, LookupExecutor, LookupTicket};
use carcino_domain::{OutputFormat, Term};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// One line of user input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Quit,
    Help,
    /// `?partial` lists autocomplete suggestions
    Suggest(String),
    Lookup(Term),
    Unknown(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if let Some(partial) = line.strip_prefix('?') {
            return Self::Suggest(partial.trim().to_string());
        }
        match line {
            "/quit" | "/exit" | "/q" => Self::Quit,
            "/help" | "/h" | "/?" => Self::Help,
            cmd if cmd.starts_with('/') => Self::Unknown(cmd.to_string()),
            term => Self::Lookup(Term::new(term)),
        }
    }
}

/// Tracks the lookup whose result the user is waiting for
#[derive(Default)]
struct PendingLookup {
    ticket: Option<LookupTicket>,
}

impl PendingLookup {
    /// Replace the pending lookup, abandoning the previous one
    fn replace(&mut self, ticket: LookupTicket) {
        if let Some(previous) = self.ticket.replace(ticket) {
            debug!("Superseding lookup #{} for '{}'", previous.id(), previous.term());
            previous.abort();
        }
    }

    /// Accept `completion` if it belongs to the pending lookup
    fn accept(&mut self, completion: &LookupCompletion) -> bool {
        match &self.ticket {
            Some(ticket) if ticket.id() == completion.ticket => {
                self.ticket = None;
                true
            }
            _ => {
                debug!("Discarding stale lookup #{}", completion.ticket);
                false
            }
        }
    }

    fn is_waiting(&self) -> bool {
        self.ticket.is_some()
    }
}

/// Interactive lookup REPL
pub struct LookupRepl {
    executor: Arc<LookupExecutor>,
    autocomplete: Autocomplete,
    display: DisplayConfig,
}

impl LookupRepl {
    /// Create a new LookupRepl
    pub fn new(executor: Arc<LookupExecutor>, autocomplete: Autocomplete) -> Self {
        Self {
            executor,
            autocomplete,
            display: DisplayConfig::default(),
        }
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&self) -> io::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<LookupCompletion>();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut pending = PendingLookup::default();

        self.print_welcome();
        Self::prompt()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        println!("Bye!");
                        break;
                    };
                    match ReplInput::parse(&line) {
                        ReplInput::Quit => {
                            println!("Bye!");
                            break;
                        }
                        ReplInput::Lookup(term) => {
                            if self.display.show_progress {
                                println!("{}", format!("Searching for '{}'...", term).dimmed());
                            }
                            pending.replace(self.executor.submit_to(term, tx.clone()));
                            continue;
                        }
                        input => self.handle_local(input),
                    }
                    Self::prompt()?;
                }
                Some(completion) = rx.recv() => {
                    if pending.accept(&completion) {
                        self.print_result(&completion);
                        Self::prompt()?;
                    }
                }
            }
        }

        if pending.is_waiting() {
            self.executor.shutdown();
        }
        Ok(())
    }

    /// Handle input that needs no lookup
    fn handle_local(&self, input: ReplInput) {
        match input {
            ReplInput::Empty => println!("{}", EMPTY_INPUT_MESSAGE),
            ReplInput::Help => self.print_help(),
            ReplInput::Suggest(partial) => self.print_suggestions(&partial),
            ReplInput::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ReplInput::Quit | ReplInput::Lookup(_) => {}
        }
    }

    fn print_result(&self, completion: &LookupCompletion) {
        let output = match self.display.format {
            OutputFormat::Text => ConsoleFormatter::format(&completion.result),
            OutputFormat::Json => ConsoleFormatter::format_json(&completion.result),
        };
        println!();
        println!("{}", output.trim_end());
        println!();
    }

    fn print_suggestions(&self, partial: &str) {
        if !self.autocomplete.is_enabled() {
            println!("Suggestions are unavailable (no term list loaded).");
            return;
        }
        let suggestions = self.autocomplete.suggest(partial);
        let output = match self.display.format {
            OutputFormat::Text => ConsoleFormatter::format_suggestions(partial, &suggestions),
            OutputFormat::Json => ConsoleFormatter::format_suggestions_json(partial, &suggestions),
        };
        println!("{}", output.trim_end());
    }

    fn prompt() -> io::Result<()> {
        print!("term> ");
        io::stdout().flush()
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("Carcino Term Finder").trim_end());
        println!();
        println!("Type a medical or cancer-related term to look up its definition.");
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  <term>          - Look up a definition");
        println!("  ?<partial>      - Suggest terms starting with or containing <partial>");
        println!("  /help, /h, /?   - Show this help");
        println!("  /quit, /q       - Exit");
        println!();
    }
}
