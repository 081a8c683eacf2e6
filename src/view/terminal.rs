/// Terminal rendering of the client view
///
/// Produces the full screen as a string so the session loop only has to
/// print it. Dark mode switches the table preset and palette; the data shown
/// is identical in both modes.
use colored::*;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};

use super::format::{TransactionRow, LOADING_TEXT, NO_DATA_TEXT, TITLE};
use super::state::{ViewBody, ViewState};

const HEADERS: [&str; 3] = ["Transaction ID", "Consensus Timestamp", "Type"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// ANSI colors; off when stdout is not a terminal and in tests
    pub colors: bool,
}

pub fn render(state: &ViewState, options: RenderOptions) -> String {
    let mut out = Vec::new();

    out.push(render_header(state, options));

    if let Some(err) = state.error() {
        let message = err.user_message();
        out.push(if options.colors {
            message.red().bold().to_string()
        } else {
            message.to_string()
        });
    }

    match state.body() {
        ViewBody::Loading => out.push(paint(LOADING_TEXT, options, |s| s.yellow())),
        ViewBody::NoData => out.push(paint(NO_DATA_TEXT, options, |s| s.dimmed())),
        ViewBody::Table(rows) => {
            out.push(render_table(&rows, state.dark_mode(), options).to_string());
            out.push(format!(
                "{} of {} transactions",
                rows.len(),
                state.transactions().len()
            ));
        }
    }

    out.join("\n")
}

fn render_header(state: &ViewState, options: RenderOptions) -> String {
    let mode = if state.dark_mode() { "dark" } else { "light" };
    let account = match state.account_id() {
        Some(id) => format!("connected: {}", id),
        None => "not connected".to_string(),
    };
    let search = if state.search_term().is_empty() {
        String::new()
    } else {
        format!("  search: \"{}\"", state.search_term())
    };

    let title = if options.colors {
        if state.dark_mode() {
            TITLE.bright_white().bold().to_string()
        } else {
            TITLE.black().bold().to_string()
        }
    } else {
        TITLE.to_string()
    };

    format!("{}  [{}]  {}{}", title, mode, account, search)
}

fn render_table(rows: &[TransactionRow], dark_mode: bool, options: RenderOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if dark_mode {
            presets::UTF8_FULL
        } else {
            presets::ASCII_FULL
        })
        .set_content_arrangement(ContentArrangement::Dynamic);

    if !options.colors {
        table.force_no_tty();
    }

    let header_color = if dark_mode { Color::Yellow } else { Color::Blue };
    table.set_header(HEADERS.iter().map(|h| Cell::new(h).fg(header_color)));

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.transaction_id),
            Cell::new(&row.consensus_timestamp),
            Cell::new(&row.name),
        ]);
    }

    table
}

fn paint(text: &str, options: RenderOptions, style: impl Fn(&str) -> ColoredString) -> String {
    if options.colors {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ViewError, VIEW_FETCH_ERROR};
    use crate::testing::tx;
    use crate::view::state::FetchScope;

    const PLAIN: RenderOptions = RenderOptions { colors: false };

    #[test]
    fn test_loading_hides_table() {
        let (state, _) = ViewState::new(true).begin_fetch(FetchScope::All);
        let screen = render(&state, PLAIN);
        assert!(screen.contains(LOADING_TEXT));
        assert!(!screen.contains("Transaction ID"));
        assert!(!screen.contains(NO_DATA_TEXT));
    }

    #[test]
    fn test_table_with_placeholder_name() {
        let (state, ticket) = ViewState::new(true).begin_fetch(FetchScope::All);
        let state = state.apply_fetch_result(
            ticket,
            Ok(vec![
                tx(Some("0.0.1@1@2"), Some("CRYPTOTRANSFER")),
                tx(Some("0.0.3@4@5"), None),
            ]),
        );

        let screen = render(&state, PLAIN);
        assert!(screen.contains("Transaction ID"));
        assert!(screen.contains("CRYPTOTRANSFER"));
        assert!(screen.contains("Unknown"));
        assert!(!screen.contains(NO_DATA_TEXT));
        assert!(!screen.contains(LOADING_TEXT));
        assert!(screen.contains("2 of 2 transactions"));
    }

    #[test]
    fn test_no_data_message_instead_of_table() {
        let (state, ticket) = ViewState::new(false).begin_fetch(FetchScope::All);
        let state = state.apply_fetch_result(ticket, Ok(vec![]));

        let screen = render(&state, PLAIN);
        assert!(screen.contains(NO_DATA_TEXT));
        assert!(!screen.contains("Transaction ID"));
        assert!(screen.contains("[light]"));
    }

    #[test]
    fn test_error_line_and_connection_header() {
        let (state, ticket) = ViewState::new(true).begin_fetch(FetchScope::Account("0.0.9".into()));
        let state = state.apply_fetch_result(ticket, Err(ViewError::FetchFailed));

        let screen = render(&state, PLAIN);
        assert!(screen.contains(VIEW_FETCH_ERROR));
        assert!(screen.contains("not connected"));
    }
}
