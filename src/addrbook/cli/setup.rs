use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Process arguments.
#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(about = "Interactive address book and notebook", long_about = None)]
pub struct Cli {
    /// Directory holding contacts.json, notes.json and config.json
    #[arg(long, value_name = "DIR", env = "ADDRBOOK_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed at the prompt. The first word names the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Greet and list the commands
    #[command(display_order = 1)]
    Hello,

    /// Add a contact, or another phone to an existing one
    #[command(display_order = 10)]
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    #[command(display_order = 11)]
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact
    #[command(display_order = 12)]
    Phone { name: String },

    /// Show all contacts
    #[command(display_order = 13)]
    All,

    /// Delete a contact
    #[command(display_order = 14)]
    Delete { name: String },

    /// Find contacts by name, email or phone
    #[command(display_order = 15)]
    Search { query: String },

    /// Set a contact's birthday (DD.MM.YYYY)
    #[command(display_order = 20)]
    AddBirthday { name: String, birthday: String },

    /// Replace a contact's birthday
    #[command(display_order = 21)]
    ChangeBirthday { name: String, birthday: String },

    /// Remove a contact's birthday
    #[command(display_order = 22)]
    DeleteBirthday { name: String },

    /// Show a contact's birthday
    #[command(display_order = 23)]
    ShowBirthday { name: String },

    /// Birthdays coming up in the next DAYS days
    #[command(display_order = 24)]
    Birthdays { days: Option<u32> },

    /// Set a contact's email
    #[command(display_order = 30)]
    AddEmail { name: String, email: String },

    /// Replace a contact's email
    #[command(display_order = 31)]
    ChangeEmail { name: String, email: String },

    /// Remove a contact's email
    #[command(display_order = 32)]
    DeleteEmail { name: String },

    /// Show a contact's email
    #[command(display_order = 33)]
    GetEmail { name: String },

    /// Set a contact's address
    #[command(display_order = 40)]
    AddAddress {
        name: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        address: Vec<String>,
    },

    /// Replace a contact's address
    #[command(display_order = 41)]
    ChangeAddress {
        name: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        address: Vec<String>,
    },

    /// Remove a contact's address
    #[command(display_order = 42)]
    DeleteAddress { name: String },

    /// Show a contact's address
    #[command(display_order = 43)]
    GetAddress { name: String },

    /// Add a note
    #[command(display_order = 50)]
    AddNote {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Replace the text of a note
    #[command(display_order = 51)]
    EditNote {
        id: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete a note
    #[command(display_order = 52)]
    DeleteNote { id: String },

    /// Tag a note
    #[command(display_order = 53)]
    AddTag { id: String, tag: String },

    /// Remove a tag from a note
    #[command(display_order = 54)]
    DeleteTag { id: String, tag: String },

    /// Notes with exactly this tag
    #[command(display_order = 55)]
    FindTag { tag: String },

    /// Find notes by text
    #[command(display_order = 56)]
    SearchNotes { query: String },

    /// Show all notes
    #[command(display_order = 57)]
    ShowNotes,

    /// Get or set configuration
    #[command(display_order = 60)]
    Config {
        /// Configuration key (birthday_window_days or shift_weekends)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Save and quit
    #[command(alias = "close", display_order = 70)]
    Exit,
}

/// Splits a prompt line into a command. `Ok(None)` for a blank line.
///
/// Words are separated by whitespace and the command word is matched without
/// regard to case.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, clap::Error> {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let Some(first) = words.first_mut() else {
        return Ok(None);
    };
    *first = first.to_lowercase();
    if first != "help" && ReplLine::command().find_subcommand(first.as_str()).is_none() {
        return Err(clap::Error::raw(
            ErrorKind::InvalidSubcommand,
            format!("unrecognized command '{first}'\n"),
        ));
    }
    ReplLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

/// (name, description) for every visible REPL command, in display order.
pub fn command_summaries() -> Vec<(String, String)> {
    let cmd = ReplLine::command();
    let mut subcommands: Vec<_> = cmd
        .get_subcommands()
        .filter(|sc| !sc.is_hide_set() && sc.get_name() != "help")
        .collect();
    subcommands.sort_by_key(|sc| sc.get_display_order());
    subcommands
        .into_iter()
        .map(|sc| {
            let usage = std::iter::once(sc.get_name().to_string())
                .chain(
                    sc.get_positionals()
                        .map(|arg| format!("<{}>", arg.get_id().as_str())),
                )
                .collect::<Vec<_>>()
                .join(" ");
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            (usage, about)
        })
        .collect()
}
