//! HTML rendering for the `/html` page.
//!
//! Header names and values come straight from the client (or the proxy), so
//! everything interpolated into the document goes through [`escape_html`].

use std::collections::BTreeMap;

use crate::{auth::AuthContext, identity::ServiceIdentity};

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_page(
    identity: &ServiceIdentity,
    auth: &AuthContext,
    headers: &BTreeMap<String, String>,
) -> String {
    let rows: String = headers
        .iter()
        .map(|(name, value)| {
            format!(
                "        <tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(name),
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{service}</title>
    <style>
        body {{ font-family: sans-serif; margin: 2em; }}
        table {{ border-collapse: collapse; }}
        th, td {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}
    </style>
</head>
<body>
    <h1>{message}</h1>
    <p>Served by {service} ({language})</p>
    <h2>Authentication</h2>
    <ul>
        <li>User: <strong>{user}</strong></li>
        <li>Method: {method}</li>
        <li>Authenticated at: {time}</li>
    </ul>
    <h2>Request headers</h2>
    <table>
        <tr><th>Header</th><th>Value</th></tr>
{rows}    </table>
</body>
</html>
"#,
        message = escape_html(&identity.message),
        service = escape_html(&identity.service),
        language = escape_html(&identity.language),
        user = escape_html(&auth.remote_user),
        method = escape_html(&auth.auth_type),
        time = escape_html(&auth.auth_time),
        rows = rows,
    )
}
