use axum::response::Html;

const INDEX: &str = "<h2>DevSecOps Lab App</h2><p>Try /user?id=1 and /greet?name=xyz</p>";

/// GET / -> static description of the two read endpoints.
pub async fn index() -> Html<&'static str> {
    Html(INDEX)
}
