/// Interactive terminal session
///
/// Input is line based. Plain text becomes the search term; lines starting
/// with `/` are commands. Fetches run as background tasks and report back
/// over a channel, so typing never waits on the network.
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::proxy_client::ProxyClient;
use super::state::{FetchScope, FetchTicket, ViewState};
use super::terminal::{render, RenderOptions};
use crate::apis::mirror_node::Transaction;
use crate::errors::ViewError;
use crate::logger::{self, LogTag};

pub const HELP_TEXT: &str = "\
Type text to filter by transaction id or type (empty line clears the search).
Commands:
  /connect <account id>  show transactions for one account (e.g. 0.0.1234)
  /disconnect            back to all transactions
  /reload                fetch again with the current scope
  /theme                 toggle dark/light display
  /help                  this text
  /quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Connect(String),
    Disconnect,
    Reload,
    ToggleTheme,
    Help,
    Quit,
    Invalid(String),
}

/// What the session loop has to do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Fetch(FetchTicket, FetchScope),
    ShowHelp,
    Notice(String),
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.trim_start().strip_prefix('/') else {
        return Command::Search(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest.trim(), ""),
    };

    match name.to_lowercase().as_str() {
        "connect" if arg.is_empty() => {
            Command::Invalid("usage: /connect <account id>".to_string())
        }
        "connect" => Command::Connect(arg.to_string()),
        "disconnect" => Command::Disconnect,
        "reload" | "refresh" => Command::Reload,
        "theme" => Command::ToggleTheme,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command '/{}' (try /help)", other)),
    }
}

/// Apply one command to the state
pub fn apply_command(state: ViewState, command: Command) -> (ViewState, Effect) {
    match command {
        Command::Search(term) => (state.with_search_term(term), Effect::Redraw),
        Command::Connect(account_id) => {
            let scope = FetchScope::Account(account_id);
            let (state, ticket) = state.begin_fetch(scope.clone());
            (state, Effect::Fetch(ticket, scope))
        }
        Command::Disconnect => {
            let (state, ticket) = state.disconnect().begin_fetch(FetchScope::All);
            (state, Effect::Fetch(ticket, FetchScope::All))
        }
        Command::Reload => {
            let scope = state.reload_scope();
            let (state, ticket) = state.begin_fetch(scope.clone());
            (state, Effect::Fetch(ticket, scope))
        }
        Command::ToggleTheme => (state.toggle_dark_mode(), Effect::Redraw),
        Command::Help => (state, Effect::ShowHelp),
        Command::Quit => (state, Effect::Quit),
        Command::Invalid(message) => (state, Effect::Notice(message)),
    }
}

/// One input line as text, or `None` when it is not valid UTF-8
fn decode_line(bytes: Vec<u8>) -> Option<String> {
    String::from_utf8(bytes).ok()
}

struct FetchOutcome {
    ticket: FetchTicket,
    result: Result<Vec<Transaction>, ViewError>,
}

fn spawn_fetch(
    client: &ProxyClient,
    ticket: FetchTicket,
    scope: FetchScope,
    results: mpsc::UnboundedSender<FetchOutcome>,
) {
    let client = client.clone();
    tokio::spawn(async move {
        let result = client.fetch(&scope).await;
        // Receiver is gone only when the session has ended
        let _ = results.send(FetchOutcome { ticket, result });
    });
}

fn print_screen(state: &ViewState, options: RenderOptions) {
    println!("{}\n", render(state, options));
}

/// Run the session until `/quit` or end of input
pub async fn run_session(
    client: ProxyClient,
    state: ViewState,
    initial_scope: FetchScope,
    options: RenderOptions,
) -> anyhow::Result<()> {
    let (results_tx, mut results_rx) = mpsc::unbounded_channel();

    let (mut state, ticket) = state.begin_fetch(initial_scope.clone());
    spawn_fetch(&client, ticket, initial_scope, results_tx.clone());
    print_screen(&state, options);

    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');

    loop {
        tokio::select! {
            segment = lines.next_segment() => {
                let Some(bytes) = segment? else {
                    logger::debug(LogTag::View, "End of input, leaving session");
                    break;
                };
                let Some(line) = decode_line(bytes) else {
                    logger::warning(LogTag::View, "Ignoring input line that is not valid UTF-8");
                    continue;
                };

                let (next, effect) = apply_command(state, parse_command(&line));
                state = next;

                match effect {
                    Effect::Quit => break,
                    Effect::ShowHelp => println!("{}\n", HELP_TEXT),
                    Effect::Notice(message) => logger::warning(LogTag::View, &message),
                    Effect::Fetch(ticket, scope) => {
                        logger::debug(
                            LogTag::View,
                            &format!("Fetch #{} issued ({:?})", ticket.value(), scope),
                        );
                        spawn_fetch(&client, ticket, scope, results_tx.clone());
                        print_screen(&state, options);
                    }
                    Effect::Redraw => print_screen(&state, options),
                }
            }
            Some(outcome) = results_rx.recv() => {
                if state.pending_ticket() != Some(outcome.ticket) {
                    logger::debug(
                        LogTag::View,
                        &format!("Discarding stale response for fetch #{}", outcome.ticket.value()),
                    );
                    continue;
                }

                state = state.apply_fetch_result(outcome.ticket, outcome.result);
                print_screen(&state, options);
            }
        }
    }

    Ok(())
}
