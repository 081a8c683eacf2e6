/// HTML templates for the browser view
///
/// Pages are rendered on the server from a [`ViewState`]. Search, account
/// selection and the theme toggle are plain GET forms and links, so the page
/// needs no JavaScript and every state has its own URL.
use url::form_urlencoded;

use crate::view::{ViewBody, ViewState, LOADING_TEXT, NO_DATA_TEXT, TITLE};
use crate::webserver::utils::escape_html;

/// Full page for `state`
pub fn page(state: &ViewState) -> String {
    let theme_class = if state.dark_mode() { "dark" } else { "light" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body class="{theme_class}">
    <header class="header">
        <h1>{title}</h1>
        <div class="controls">
            {search_form}
            {theme_toggle}
        </div>
        <div class="account">
            {account_controls}
        </div>
    </header>
    {error}
    <main class="table-container">
        {body}
    </main>
</body>
</html>"#,
        title = TITLE,
        styles = STYLES,
        theme_class = theme_class,
        search_form = search_form(state),
        theme_toggle = theme_toggle(state),
        account_controls = account_controls(state),
        error = error_block(state),
        body = body_content(state),
    )
}

/// Link target reproducing `state` with the given overrides
fn page_href(search: &str, account_id: Option<&str>, dark_mode: bool) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("q", search);
    }
    if let Some(account_id) = account_id {
        query.append_pair("accountId", account_id);
    }
    query.append_pair("theme", if dark_mode { "dark" } else { "light" });
    format!("/?{}", query.finish())
}

fn theme_value(dark_mode: bool) -> &'static str {
    if dark_mode {
        "dark"
    } else {
        "light"
    }
}

fn search_form(state: &ViewState) -> String {
    let account_field = match state.account_id() {
        Some(id) => format!(
            r#"<input type="hidden" name="accountId" value="{}">"#,
            escape_html(id)
        ),
        None => String::new(),
    };

    format!(
        r#"<form method="get" action="/" class="search-form">
                <input type="text" name="q" value="{value}" placeholder="Search transactions..." class="search-input">
                {account_field}
                <input type="hidden" name="theme" value="{theme}">
                <button type="submit">Search</button>
            </form>"#,
        value = escape_html(state.search_term()),
        account_field = account_field,
        theme = theme_value(state.dark_mode()),
    )
}

fn theme_toggle(state: &ViewState) -> String {
    let href = page_href(state.search_term(), state.account_id(), !state.dark_mode());
    let label = if state.dark_mode() { "Light mode" } else { "Dark mode" };
    format!(
        r#"<a class="theme-toggle" href="{}">{}</a>"#,
        escape_html(&href),
        label
    )
}

fn account_controls(state: &ViewState) -> String {
    match state.account_id() {
        Some(id) => {
            let href = page_href(state.search_term(), None, state.dark_mode());
            format!(
                r#"<span class="connected">Connected: {}</span> <a href="{}">Disconnect</a>"#,
                escape_html(id),
                escape_html(&href)
            )
        }
        None => format!(
            r#"<form method="get" action="/" class="connect-form">
                <input type="text" name="accountId" placeholder="Account ID, e.g. 0.0.1234">
                <input type="hidden" name="theme" value="{theme}">
                <button type="submit">Connect</button>
            </form>"#,
            theme = theme_value(state.dark_mode()),
        ),
    }
}

fn error_block(state: &ViewState) -> String {
    match state.error() {
        Some(err) => format!(r#"<p class="error">{}</p>"#, escape_html(err.user_message())),
        None => String::new(),
    }
}

fn body_content(state: &ViewState) -> String {
    match state.body() {
        ViewBody::Loading => format!(
            r#"<div class="loader-container"><div class="spinner"></div><p>{}</p></div>"#,
            LOADING_TEXT
        ),
        ViewBody::NoData => format!(r#"<p class="no-data">{}</p>"#, NO_DATA_TEXT),
        ViewBody::Table(rows) => {
            let mut html = String::from(
                r#"<table class="transaction-table">
            <thead><tr><th>Transaction ID</th><th>Consensus Timestamp</th><th>Type</th></tr></thead>
            <tbody>"#,
            );
            for row in rows {
                html.push_str(&format!(
                    "\n                <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&row.transaction_id),
                    escape_html(&row.consensus_timestamp),
                    escape_html(&row.name)
                ));
            }
            html.push_str("\n            </tbody>\n        </table>");
            html
        }
    }
}

const STYLES: &str = r#"
        body { font-family: sans-serif; text-align: center; padding: 20px; margin: 0; min-height: 100vh; }
        body.dark { background: #121212; color: #fff; }
        body.light { background: #f4f4f4; color: #000; }
        a { color: inherit; }
        .controls, .account { display: flex; justify-content: center; align-items: center; gap: 12px; margin-top: 12px; }
        .search-input { width: 50vw; padding: 10px; border-radius: 20px; border: none; }
        .error { color: #e53935; }
        .table-container { padding: 16px; }
        .transaction-table { width: 100%; border-collapse: collapse; }
        .transaction-table th, .transaction-table td { padding: 8px; border-bottom: 1px solid #ddd; }
        .spinner { margin: 0 auto; width: 32px; height: 32px; border: 4px solid #888; border-left-color: #ffcc00; border-radius: 50%; }
"#;
