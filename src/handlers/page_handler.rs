use axum::response::Html;

const PAGE: &str = include_str!("../../assets/index.html");

pub async fn page_handler() -> Html<&'static str> {
    Html(PAGE)
}
