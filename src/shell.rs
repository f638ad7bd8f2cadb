//! Interactive terminal shell
//!
//! Reads one command per line, maps it to a router action for the screen
//! currently shown, and prints the resulting screen. Works over any
//! `BufRead`/`Write` pair so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::ShellConfig;
use crate::models::Category;
use crate::navigation::{NavAction, Router, Screen, Transition};
use crate::view::ScreenView;
use crate::{Result, TourError};

const HELP: &str = "\
Commands:
  start            begin the tour (home screen)
  <n> | select <n> pick the n-th entry on the screen
  <category>       open a category by name (categories screen)
  back | b         go to the previous screen
  home | h         return to the home screen and clear history
  open <route>     jump to a route, e.g. detail/Parks/5
  help | ?         show this help
  quit | q         leave the tour
";

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Select(usize),
    Category(Category),
    Back,
    Home,
    Open(Screen),
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Empty lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_ascii_lowercase().as_str(), rest) {
            ("start", "") => Command::Start,
            ("back" | "b", "") => Command::Back,
            ("home" | "h", "") => Command::Home,
            ("help" | "?", "") => Command::Help,
            ("quit" | "q" | "exit", "") => Command::Quit,
            ("select", index) => Command::Select(parse_index(index)?),
            ("open", route) => Command::Open(route.parse()?),
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    Command::Select(index)
                } else if let Some(category) = Category::from_input(line) {
                    Command::Category(category)
                } else {
                    return Err(TourError::general(format!(
                        "Unknown command '{line}'. Type 'help' for a list of commands."
                    )));
                }
            }
        };
        Ok(Some(command))
    }
}

fn parse_index(input: &str) -> Result<usize> {
    input
        .parse::<usize>()
        .map_err(|_| TourError::general(format!("'{input}' is not a number")))
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    BackFromRoot,
}

/// Terminal front end driving a [`Router`]
pub struct TourShell<'a, R, W> {
    router: Router,
    catalog: &'a Catalog,
    settings: ShellConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> TourShell<'a, R, W> {
    pub fn new(catalog: &'a Catalog, settings: ShellConfig, input: R, output: W) -> Self {
        Self {
            router: Router::new(),
            catalog,
            settings,
            input,
            output,
        }
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Consume the shell, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("Tour session started");
        self.show()?;

        let mut line = String::new();
        let end = loop {
            write!(self.output, "{}", self.settings.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break SessionEnd::EndOfInput;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.output, "{}", e.user_message())?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(Some(end)) => break end,
                Ok(None) => {}
                Err(e @ (TourError::Io { .. } | TourError::Config { .. })) => return Err(e),
                Err(e) => {
                    debug!("Rejected command: {e}");
                    writeln!(self.output, "{}", e.user_message())?;
                }
            }
        };

        info!(?end, "Tour session ended");
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(end)
    }

    /// Execute one command; `Some` ends the session
    pub fn execute(&mut self, command: Command) -> Result<Option<SessionEnd>> {
        let action = match command {
            Command::Quit => return Ok(Some(SessionEnd::Quit)),
            Command::Help => {
                write!(self.output, "{HELP}")?;
                return Ok(None);
            }
            Command::Open(screen) => {
                let from = self.router.current();
                // Home is the root: opening it resets history like `home`
                let transition = match screen {
                    Screen::Home => self.router.go_home(),
                    screen => self.router.navigate(screen),
                };
                info!(%from, to = %screen, ?transition, "Opening route");
                self.show()?;
                return Ok(None);
            }
            Command::Start => NavAction::StartTour,
            Command::Back => NavAction::Back,
            Command::Home => NavAction::GoHome,
            Command::Category(category) => NavAction::SelectCategory(category),
            Command::Select(index) => self.selection(index)?,
        };

        let from = self.router.current();
        match self.router.apply(action)? {
            Transition::AtRoot if self.settings.exit_on_root_back => {
                return Ok(Some(SessionEnd::BackFromRoot));
            }
            Transition::AtRoot => {
                warn!("Back requested with empty history");
                writeln!(self.output, "Already at the start of the tour.")?;
                return Ok(None);
            }
            _ => {}
        }
        info!(%from, to = %self.router.current(), "{action}");
        self.show()?;
        Ok(None)
    }

    /// Resolve a 1-based pick on the current screen into an action
    fn selection(&self, index: usize) -> Result<NavAction> {
        let current = self.router.current();
        let out_of_range = || {
            let count = ScreenView::render(&current, self.catalog).choice_count();
            TourError::general(format!("Pick a number between 1 and {count}."))
        };

        match current {
            Screen::Categories => {
                let categories = self.catalog.categories();
                index
                    .checked_sub(1)
                    .and_then(|i| categories.get(i))
                    .map(|category| NavAction::SelectCategory(*category))
                    .ok_or_else(out_of_range)
            }
            Screen::LocationList { category } => {
                let locations = self.catalog.locations(category);
                index
                    .checked_sub(1)
                    .and_then(|i| locations.get(i))
                    .map(|location| NavAction::SelectLocation(location.id))
                    .ok_or_else(out_of_range)
            }
            screen => Err(TourError::invalid_transition(
                format!("select entry {index}"),
                screen,
            )),
        }
    }

    fn show(&mut self) -> Result<()> {
        let view = ScreenView::render(&self.router.current(), self.catalog);
        writeln!(self.output)?;
        write!(self.output, "{view}")?;
        Ok(())
    }
}
