//! Line grammar of the interactive session.
//!
//! Each input line is one command. Parsing is pure; the session loop maps
//! the resulting [`ShellCommand`] onto dashboard actions.

use thiserror::Error;

use truestate_model::{FilterGroup, ModelError, SortField, SortOrder};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Replace the draft search text (may be empty).
    Type(String),
    /// Commit the draft search, optionally replacing it first.
    Search(Option<String>),
    /// Commit the suggestion at this 1-based position.
    Pick(usize),
    /// Flip one filter checkbox in the draft.
    Toggle {
        /// Filter group.
        group: FilterGroup,
        /// Catalog spelling of the value.
        value: &'static str,
    },
    /// Set the draft start date; empty clears it.
    From(String),
    /// Set the draft end date; empty clears it.
    To(String),
    /// Commit the draft filters.
    Apply,
    /// Commit a sort.
    Sort(SortField, SortOrder),
    /// Jump to a page.
    Page(i64),
    /// Next page.
    Next,
    /// Previous page.
    Prev,
    /// Clear search and filters.
    Clear,
    /// Refetch the current query.
    Reload,
    /// Print the current table and draft again.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Reasons an input line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// The line was blank.
    #[error("empty command")]
    Empty,

    /// The first word is not a command.
    #[error("unknown command `{0}` (type `help` for a list)")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// An argument that should be a number is not.
    #[error("not a number: {0}")]
    InvalidNumber(String),

    /// The value is not offered for this filter group.
    #[error("{group} has no option `{value}` (choices: {choices})")]
    UnknownOption {
        /// Filter group the value was given for.
        group: FilterGroup,
        /// Rejected value.
        value: String,
        /// Accepted values.
        choices: String,
    },

    /// A sort or filter name did not parse.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  type <text>                 edit the search box (suggestions appear after a pause)
  search [text]               run the search
  pick <n>                    use suggestion n
  toggle <group> <value>      tick or untick a filter (region, gender, category, payment, tag)
  from <YYYY-MM-DD>           draft start date (blank clears)
  to <YYYY-MM-DD>             draft end date (blank clears)
  apply                       apply the draft filters
  sort <field> <asc|desc>     date, customer_name, final_amount or quantity
  page <n> | next | prev      move between pages
  clear                       clear search and filters
  reload                      fetch the current page again
  show                        print the table again
  help                        this list
  quit                        leave";

/// Parses one input line.
///
/// # Errors
///
/// Returns a [`ShellError`] describing why the line is not a command.
pub fn parse_command(line: &str) -> Result<ShellCommand, ShellError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Err(ShellError::Empty),
        "type" => Ok(ShellCommand::Type(rest.to_string())),
        "search" | "s" => Ok(ShellCommand::Search(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "pick" => {
            let index = parse_number::<usize>(rest, "pick <n>")?;
            if index == 0 {
                return Err(ShellError::Usage("pick <n> (counting from 1)"));
            }
            Ok(ShellCommand::Pick(index))
        }
        "toggle" | "t" => parse_toggle(rest),
        "from" => Ok(ShellCommand::From(rest.to_string())),
        "to" => Ok(ShellCommand::To(rest.to_string())),
        "apply" => Ok(ShellCommand::Apply),
        "sort" => parse_sort(rest),
        "page" | "p" => Ok(ShellCommand::Page(parse_number(rest, "page <n>")?)),
        "next" | "n" => Ok(ShellCommand::Next),
        "prev" | "previous" => Ok(ShellCommand::Prev),
        "clear" => Ok(ShellCommand::Clear),
        "reload" | "r" => Ok(ShellCommand::Reload),
        "show" | "ls" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(ShellError::UnknownCommand(other.to_string())),
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, usage: &'static str) -> Result<T, ShellError> {
    if raw.is_empty() {
        return Err(ShellError::Usage(usage));
    }
    raw.parse()
        .map_err(|_| ShellError::InvalidNumber(raw.to_string()))
}

fn parse_toggle(rest: &str) -> Result<ShellCommand, ShellError> {
    let Some((group, value)) = rest.split_once(char::is_whitespace) else {
        return Err(ShellError::Usage("toggle <group> <value>"));
    };
    let group: FilterGroup = group.parse()?;
    let value = value.trim();
    let Some(canonical) = group.canonical_option(value) else {
        return Err(ShellError::UnknownOption {
            group,
            value: value.to_string(),
            choices: group.options().join(", "),
        });
    };
    Ok(ShellCommand::Toggle {
        group,
        value: canonical,
    })
}

fn parse_sort(rest: &str) -> Result<ShellCommand, ShellError> {
    let mut words = rest.split_whitespace();
    let (Some(field), Some(order), None) = (words.next(), words.next(), words.next()) else {
        return Err(ShellError::Usage("sort <field> <asc|desc>"));
    };
    Ok(ShellCommand::Sort(field.parse()?, order.parse()?))
}
