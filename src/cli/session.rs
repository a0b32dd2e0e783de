//! Interactive session driver.
//!
//! A [`Session`] owns the contact book for the length of one run and talks to the
//! user over any `BufRead`/`Write` pair, so the binary wires it to the terminal
//! and tests wire it to in-memory buffers. Every rejected input prints a notice
//! and re-prompts; only terminal or storage I/O failures end the session early.
//! Closing the input stream behaves like choosing `Q`.

use super::state::{
    classify_delete_query, parse_row_choice, query_shape_ok, MainCommand, MenuState,
    SearchCommand,
};
use crate::domain::{BirthDate, EmailAddress, PersonName, PhoneNumber, ValidationError};
use crate::error::SessionResult;
use crate::models::{Contact, SearchField};
use crate::observability::SessionMetrics;
use crate::presentation::render;
use crate::repositories::ContactRepository;
use crate::services::ContactBook;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const BANNER_RULE: &str = "=======================================================";
const MAIN_MENU_LEGEND: &str =
    "Press A: Add Contact | V: View all Contacts | S: Search Contacts | D: Delete A Contact | Q: Quit";
const SEARCH_MENU_LEGEND: &str = "Press N: Search by Name | C: Search by Phone Number | E: Search by Email | B: Search by Birth Date/Month/Year | Q: Quit";
const FRESH_START: &str = "No PhoneBook Found! Starting Fresh.";
const NO_RESULTS: &str = "No Results Found.";

/// Load the book from `repo`, run the menu until the user quits, then save.
///
/// Returns the book as it was saved.
pub fn run_session<P, R, W>(repo: &P, input: R, mut output: W) -> SessionResult<ContactBook>
where
    P: ContactRepository + ?Sized,
    R: BufRead,
    W: Write,
{
    let book = match repo.load()? {
        Some(contacts) => ContactBook::from(contacts),
        None => {
            writeln!(output, "{}", FRESH_START)?;
            ContactBook::new()
        }
    };

    writeln!(output, "{}", BANNER_RULE)?;
    writeln!(output, "Welcome to Your Phone Book!")?;

    let mut session = Session::new(book, input, output);
    session.run()?;

    let (book, metrics, _) = session.into_parts();
    repo.save(book.contacts())?;
    metrics.log_summary(book.len());
    Ok(book)
}

/// One interactive run over an owned contact book.
pub struct Session<R, W> {
    book: ContactBook,
    input: R,
    output: W,
    metrics: SessionMetrics,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over `book`.
    pub fn new(book: ContactBook, input: R, output: W) -> Self {
        let metrics = SessionMetrics::new(book.len());
        Self {
            book,
            input,
            output,
            metrics,
        }
    }

    /// The contact book in its current state.
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Counters for this session so far.
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Everything written to the user so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Split the session into its book, counters and output.
    pub fn into_parts(self) -> (ContactBook, SessionMetrics, W) {
        (self.book, self.metrics, self.output)
    }

    /// Step from the main menu until the session reaches [`MenuState::Quit`].
    pub fn run(&mut self) -> SessionResult<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Quit {
            state = self.step(state)?;
        }
        info!(contacts = self.book.len(), "Session finished");
        Ok(())
    }

    /// Run one state and return the state that follows it.
    pub fn step(&mut self, state: MenuState) -> SessionResult<MenuState> {
        debug!(?state, "Entering state");
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::AddFlow => self.add_flow(),
            MenuState::ViewOnce => self.view_once(),
            MenuState::SearchMenu => self.search_menu(),
            MenuState::Search(field) => self.search(field),
            MenuState::DeleteFlow => self.delete_flow(),
            MenuState::DeleteDisambiguate(candidates) => self.delete_disambiguate(candidates),
            MenuState::Quit => Ok(MenuState::Quit),
        }
    }

    fn main_menu(&mut self) -> SessionResult<MenuState> {
        self.say(MAIN_MENU_LEGEND)?;
        let Some(choice) = self.ask("How do you want to proceed?: ")? else {
            return Ok(MenuState::Quit);
        };

        match MainCommand::parse(&choice) {
            Some(command) => Ok(command.next_state()),
            None => {
                let rejected = ValidationError::InvalidChoice(choice);
                self.metrics
                    .track_invalid_input("How do you want to proceed?: ", &rejected);
                self.say("Please Choose a Valid Option.")?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn add_flow(&mut self) -> SessionResult<MenuState> {
        let Some(first) = self.ask_valid(
            "Enter First Name: ",
            "Please Enter Valid First Name.",
            |s| PersonName::new(s),
        )?
        else {
            return Ok(MenuState::Quit);
        };
        let Some(last) = self.ask_valid(
            "Enter Last Name: ",
            "Please Enter Valid Last Name.",
            |s| PersonName::new(s),
        )?
        else {
            return Ok(MenuState::Quit);
        };
        let Some(phone) = self.ask_valid(
            "Enter Contact Number(in 10 digit format): ",
            "Please Enter Valid Phone Number.",
            |s| PhoneNumber::new(s),
        )?
        else {
            return Ok(MenuState::Quit);
        };
        let Some(email) = self.ask_valid(
            "Enter Email Address: ",
            "Please Enter Valid Email.",
            |s| EmailAddress::new(s),
        )?
        else {
            return Ok(MenuState::Quit);
        };
        let Some(birth_date) = self.ask_valid(
            "Enter Birth Date (dd/mm/yyyy): ",
            "Please Enter Birth Date in Proper Format.",
            |s| BirthDate::new(s),
        )?
        else {
            return Ok(MenuState::Quit);
        };

        if !self.book.is_unique(phone.as_str(), email.as_str()) {
            self.metrics.track_duplicate();
            self.say("Contact Already Exists.")?;
            return Ok(MenuState::MainMenu);
        }

        self.book.add(Contact::build(
            first.as_str(),
            last.as_str(),
            phone.as_str(),
            email.as_str(),
            birth_date.as_str(),
        ));
        self.metrics.track_add();
        self.say("Contact Added Successfully!")?;
        self.say("")?;
        Ok(MenuState::MainMenu)
    }

    fn view_once(&mut self) -> SessionResult<MenuState> {
        render(&mut self.output, self.book.contacts())?;
        Ok(MenuState::MainMenu)
    }

    fn search_menu(&mut self) -> SessionResult<MenuState> {
        self.say(SEARCH_MENU_LEGEND)?;
        loop {
            let Some(choice) = self.ask("Option: ")? else {
                return Ok(MenuState::Quit);
            };
            match SearchCommand::parse(&choice) {
                Some(command) => return Ok(command.next_state()),
                None => {
                    let rejected = ValidationError::InvalidChoice(choice);
                    self.metrics.track_invalid_input("Option: ", &rejected);
                    self.say("Please Choose a Valid Option for Search.")?;
                }
            }
        }
    }

    fn search(&mut self, field: SearchField) -> SessionResult<MenuState> {
        let (prompt, notice) = match field {
            SearchField::Name => (
                "Enter Name or Character(s): ",
                "Please Choose a Valid Name or Character.",
            ),
            SearchField::PhoneNumber => (
                "Enter Phone Number (Full / Partial): ",
                "Please Enter Valid Phone Number.",
            ),
            SearchField::EmailAddress => ("Enter Email (Full or Partial): ", ""),
            SearchField::BirthDate => (
                "Enter Full Birth Date(dd/mm/yyyy) or Day/Month/Year: ",
                "Please Enter Valid Date.",
            ),
        };

        let Some(query) = self.ask_valid(prompt, notice, |q| {
            if query_shape_ok(field, q) {
                Ok(q.to_string())
            } else {
                Err(ValidationError::InvalidQuery(q.to_string()))
            }
        })?
        else {
            return Ok(MenuState::Quit);
        };

        let results = self.book.search(field, &query);
        self.metrics.track_search(results.len());
        if results.is_empty() {
            self.say(NO_RESULTS)?;
        } else {
            render(&mut self.output, &results)?;
        }
        Ok(MenuState::MainMenu)
    }

    fn delete_flow(&mut self) -> SessionResult<MenuState> {
        let Some((field, query)) = self.ask_valid(
            "Enter Contact Name or Phone Number: ",
            "Please Enter a Valid Name or Phone Number.",
            |q| {
                classify_delete_query(q)
                    .map(|field| (field, q.to_string()))
                    .ok_or_else(|| ValidationError::InvalidQuery(q.to_string()))
            },
        )?
        else {
            return Ok(MenuState::Quit);
        };

        let mut candidates = self.book.search(field, &query);
        match candidates.len() {
            0 => {
                self.say("No Such Contact(s) Found.")?;
                Ok(MenuState::MainMenu)
            }
            1 => {
                let target = candidates.remove(0);
                self.delete(&target)?;
                Ok(MenuState::MainMenu)
            }
            _ => {
                render(&mut self.output, &candidates)?;
                Ok(MenuState::DeleteDisambiguate(candidates))
            }
        }
    }

    fn delete_disambiguate(&mut self, candidates: Vec<Contact>) -> SessionResult<MenuState> {
        let rows = candidates.len();
        let Some(index) = self.ask_valid(
            "Enter number of the Contact you want to Delete: ",
            "Please Choose a Valid Number.",
            |choice| {
                parse_row_choice(choice, rows)
                    .ok_or_else(|| ValidationError::InvalidChoice(choice.to_string()))
            },
        )?
        else {
            return Ok(MenuState::Quit);
        };

        self.delete(&candidates[index])?;
        Ok(MenuState::MainMenu)
    }

    fn delete(&mut self, contact: &Contact) -> SessionResult<()> {
        if self.book.delete(contact) {
            self.metrics.track_delete();
        }
        self.say("Contact Successfully Deleted.")
    }

    /// Prompt until `parse` accepts the line, printing `notice` after each rejection.
    ///
    /// Returns `None` if the input ends first.
    fn ask_valid<T>(
        &mut self,
        prompt: &str,
        notice: &str,
        mut parse: impl FnMut(&str) -> Result<T, ValidationError>,
    ) -> SessionResult<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    self.metrics.track_invalid_input(prompt, &e);
                    self.say(notice)?;
                }
            }
        }
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, which no validator accepts, so
    /// garbled input is re-prompted like any other bad answer. Returns `None`
    /// at end of input.
    fn ask(&mut self, prompt: &str) -> SessionResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("Input closed");
            writeln!(self.output)?;
            return Ok(None);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    fn say(&mut self, message: &str) -> SessionResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
