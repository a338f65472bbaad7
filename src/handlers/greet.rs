use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    pub name: Option<String>,
}

/// GET /greet -> HTML fragment greeting the (escaped) caller-supplied name.
pub async fn greet(Query(query): Query<GreetQuery>) -> Html<String> {
    let name = query.name.as_deref().unwrap_or("guest");
    Html(format!("<h1>Hello {}</h1>", escape_html(name)))
}

/// Replace each of `& < > " '` with its HTML entity; every other character
/// passes through untouched.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
