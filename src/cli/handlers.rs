//! Assistant command handlers.
//!
//! Each handler takes the raw arguments, calls into the address book and
//! returns the reply text. Failures come back as `CommandError` and are
//! turned into user-facing messages by [`error_message`].

use crate::config::Config;
use crate::domain::{Birthday, Phone};
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

/// Owns the address book for one interactive session.
pub struct Assistant {
    book: AddressBook,
    birthday_window_days: u32,
    clock: fn() -> NaiveDate,
}

impl Assistant {
    pub fn new(config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            birthday_window_days: config.birthday_window_days,
            clock: local_today,
        }
    }

    /// Replace the source of "today" used by the `birthdays` command.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one command and produce the reply.
    pub fn handle(&mut self, command: &str, args: &[String]) -> Reply {
        debug!(command, ?args, "handling command");

        let result = match command {
            "close" | "exit" => return Reply::Exit("Good bye!".to_string()),
            "hello" => Ok("How can I help you?".to_string()),
            "add" => self.add_contact(args),
            "change" => self.change_contact(args),
            "phone" => self.show_phone(args),
            "all" => Ok(self.show_all()),
            "add-birthday" => self.add_birthday(args),
            "show-birthday" => self.show_birthday(args),
            "birthdays" => Ok(self.birthdays()),
            "delete" => self.delete_contact(args),
            _ => Ok("Invalid command.".to_string()),
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(err) => {
                warn!(command, error = %err, "command failed");
                Reply::Continue(error_message(&err).to_string())
            }
        }
    }

    fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = args else {
            return Err(CommandError::MissingArguments);
        };
        let phone = Phone::new(phone.as_str());

        match self.book.find_mut(name) {
            Ok(record) => record.add_phone(phone)?,
            Err(_) => {
                let mut record = Record::new(name.as_str());
                record.add_phone(phone)?;
                self.book.add_record(record);
            }
        }
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old, new] = args else {
            return Err(CommandError::MissingArguments);
        };
        let new = Phone::try_new(new.as_str())?;

        self.book
            .find_mut(name)?
            .edit_phone(&Phone::new(old.as_str()), new)?;
        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, args: &[String]) -> CommandResult<String> {
        let [name] = args else {
            return Err(CommandError::MissingName);
        };
        let record = self.book.find(name)?;

        if record.phones().is_empty() {
            return Ok("No phones saved.".to_string());
        }
        Ok(record
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }
        self.book
            .records()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, date] = args else {
            return Err(CommandError::MissingArguments);
        };

        self.book
            .find_mut(name)?
            .add_birthday(Birthday::new(date.as_str()))?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let [name] = args else {
            return Err(CommandError::MissingName);
        };

        Ok(match self.book.find(name)?.birthday() {
            Some(birthday) => birthday.to_string(),
            None => "Birthday is not set.".to_string(),
        })
    }

    fn birthdays(&self) -> String {
        let today = (self.clock)();
        let due = self.book.birthdays_due_by(today, self.birthday_window_days);
        debug!(%today, window = self.birthday_window_days, count = due.len(), "birthday query");

        if due.is_empty() {
            return "No upcoming birthdays.".to_string();
        }
        due.join("\n")
    }

    fn delete_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name] = args else {
            return Err(CommandError::MissingName);
        };

        self.book.delete(name)?;
        Ok("Contact deleted.".to_string())
    }
}

/// User-facing text for a failed command.
pub fn error_message(err: &CommandError) -> &'static str {
    match err {
        CommandError::Book(BookError::InvalidFormat(_)) => "Give me name and phone please.",
        CommandError::Book(BookError::NotFound(_)) => "Contact is not found.",
        CommandError::MissingArguments => {
            "Invalid command. Please, provide both name and phone number."
        }
        CommandError::MissingName => "Invalid command. Please, provide a name.",
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
