//! The interactive session loop.
//!
//! Input lines and dashboard completions are multiplexed with
//! `tokio::select!`: a command never waits for a response, and a response is
//! rendered as soon as it is applied.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use truestate_client::SalesSource;
use truestate_core::{Dashboard, DashboardUpdate, LOADING_TEXT, Message};
use truestate_model::parse_date;

use crate::render::{render_results, render_state, render_suggestions};
use crate::shell::{HELP, ShellCommand, ShellError, parse_command};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print nothing.
    Silent,
    /// Print this text.
    Print(String),
    /// End the session.
    Quit,
}

/// Applies one command to the dashboard.
pub fn dispatch<S: SalesSource>(dashboard: &mut Dashboard<S>, command: ShellCommand) -> Reply {
    match command {
        ShellCommand::Type(text) => {
            dashboard.edit_search(text);
            Reply::Silent
        }
        ShellCommand::Search(text) => {
            if let Some(text) = text {
                dashboard.edit_search(text);
            }
            dashboard.submit_search();
            loading_notice(dashboard)
        }
        ShellCommand::Pick(position) => {
            if dashboard.select_suggestion(position - 1) {
                loading_notice(dashboard)
            } else {
                Reply::Print(format!("no suggestion {position}"))
            }
        }
        ShellCommand::Toggle { group, value } => {
            let mark = if dashboard.toggle_filter(group, value) {
                "x"
            } else {
                " "
            };
            Reply::Print(format!("[{mark}] {}: {value} (apply to use)", group.label()))
        }
        ShellCommand::From(raw) => {
            let reply = date_reply("from", &raw);
            dashboard.set_start_date(raw);
            reply
        }
        ShellCommand::To(raw) => {
            let reply = date_reply("to", &raw);
            dashboard.set_end_date(raw);
            reply
        }
        ShellCommand::Apply => {
            dashboard.apply_filters();
            loading_notice(dashboard)
        }
        ShellCommand::Sort(field, order) => {
            dashboard.change_sort(field, order);
            loading_notice(dashboard)
        }
        ShellCommand::Page(page) if page < 1 => {
            debug!(page, "ignoring page below 1");
            Reply::Silent
        }
        ShellCommand::Page(page) => {
            dashboard.change_page(page);
            loading_notice(dashboard)
        }
        ShellCommand::Next => {
            if dashboard.next_page() {
                loading_notice(dashboard)
            } else {
                Reply::Print("already on the last page".to_string())
            }
        }
        ShellCommand::Prev => {
            if dashboard.previous_page() {
                loading_notice(dashboard)
            } else {
                Reply::Print("already on the first page".to_string())
            }
        }
        ShellCommand::Clear => {
            dashboard.clear_all();
            Reply::Print("Search and filters cleared.".to_string())
        }
        ShellCommand::Reload => {
            dashboard.reload();
            Reply::Print(LOADING_TEXT.to_string())
        }
        ShellCommand::Show => Reply::Print(snapshot(dashboard)),
        ShellCommand::Help => Reply::Print(HELP.to_string()),
        ShellCommand::Quit => Reply::Quit,
    }
}

/// Text to print after a completion was applied, if any.
pub fn on_update<S: SalesSource>(dashboard: &Dashboard<S>, update: DashboardUpdate) -> Option<String> {
    match update {
        DashboardUpdate::Results => Some(render_results(&dashboard.view())),
        DashboardUpdate::Suggestions => render_suggestions(dashboard.suggestions()),
        DashboardUpdate::Stale => None,
    }
}

/// Runs the session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` fails.
pub async fn run<S, R>(
    mut dashboard: Dashboard<S>,
    mut messages: UnboundedReceiver<Message>,
    input: R,
) -> io::Result<()>
where
    S: SalesSource,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    dashboard.start();
    println!("{}", render_state(dashboard.query(), dashboard.draft()));
    println!("{LOADING_TEXT}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                let reply = match parse_command(&line) {
                    Ok(command) => dispatch(&mut dashboard, command),
                    Err(ShellError::Empty) => Reply::Silent,
                    Err(error) => Reply::Print(format!("error: {error}")),
                };
                match reply {
                    Reply::Silent => {}
                    Reply::Print(text) => println!("{text}"),
                    Reply::Quit => break,
                }
            }
            Some(message) = messages.recv() => {
                let update = dashboard.handle(message);
                if let Some(text) = on_update(&dashboard, update) {
                    println!("{text}");
                }
            }
        }
    }
    Ok(())
}

fn loading_notice<S: SalesSource>(dashboard: &Dashboard<S>) -> Reply {
    if dashboard.fetch_state().loading {
        Reply::Print(LOADING_TEXT.to_string())
    } else {
        Reply::Silent
    }
}

fn date_reply(command: &str, raw: &str) -> Reply {
    if raw.trim().is_empty() {
        return Reply::Print(format!("{command}: cleared (apply to use)"));
    }
    match parse_date(raw) {
        Ok(date) => Reply::Print(format!("{command}: {date} (apply to use)")),
        Err(error) => Reply::Print(format!("warning: {error}; it will be ignored")),
    }
}

fn snapshot<S: SalesSource>(dashboard: &Dashboard<S>) -> String {
    let mut text = render_state(dashboard.query(), dashboard.draft());
    text.push('\n');
    text.push_str(&render_results(&dashboard.view()));
    if let Some(list) = render_suggestions(dashboard.suggestions()) {
        text.push('\n');
        text.push_str(&list);
    }
    text
}
