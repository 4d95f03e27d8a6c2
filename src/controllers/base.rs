use axum::response::Redirect;

pub const INDEX_PAGE: &str = "/static/index.html";

pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}
