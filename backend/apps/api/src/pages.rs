//! Page Handlers
//!
//! Thin server-rendered pages. The real UI lives in the frontend; these
//! exist so the route gate has pages to guard and are useful in local
//! smoke tests.

use axum::Extension;
use axum::response::Html;

use auth::AuthContext;

pub async fn home() -> Html<String> {
    Html(page("プロフィール帳", "<a href=\"/login\">ログイン</a>"))
}

pub async fn login() -> Html<String> {
    Html(page("ログイン", "<form method=\"post\" action=\"/api/auth/sign-in\"></form>"))
}

pub async fn signup() -> Html<String> {
    Html(page("新規登録", "<form method=\"post\" action=\"/api/auth/sign-up\"></form>"))
}

/// The gate redirects anonymous requests before this handler runs, so
/// the auth context extension is always present here.
pub async fn dashboard(Extension(ctx): Extension<AuthContext>) -> Html<String> {
    let greeting = format!("ようこそ、{}さん", ctx.user.display_name());
    Html(page("ダッシュボード", &greeting))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\"><head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body><h1>{title}</h1>{body}</body></html>"
    )
}
