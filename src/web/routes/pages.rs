//! Dashboard Pages
//!
//! Server-rendered shell routes:
//! - GET / - redirect to the dashboard
//! - GET /login - sign-in page, the one ungated browser route
//! - GET /dashboard - overview
//! - GET /dashboard/:section - section page from the navigation registry

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use chrono::{Duration, NaiveDateTime, Utc};

use crate::format::format_date_time;
use crate::pwa::PwaConfig;
use crate::web::error::{WebError, WebResult};
use crate::web::layout::{self, find_section, NAVIGATION};
use crate::web::session::CurrentUser;
use crate::web::state::AppState;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /login
///
/// The gate's redirect target. Credential handling belongs to the
/// identity service; this page only presents the form.
pub async fn login() -> Html<String> {
    let content = "<section class=\"login\"><h1>Sign in to Gilnokie GMS</h1>\
                   <form method=\"post\">\
                   <label>Email<input type=\"email\" name=\"email\" autocomplete=\"username\"></label>\
                   <label>Password<input type=\"password\" name=\"password\" autocomplete=\"current-password\"></label>\
                   <button type=\"submit\">Sign in</button>\
                   </form></section>";
    Html(layout::render_bare_page("Sign in", content))
}

/// GET /dashboard
pub async fn dashboard_home(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Html<String> {
    let generated = format_date_time(sast_now());

    let mut cards = String::new();
    for item in NAVIGATION.iter().skip(1) {
        cards.push_str(&format!(
            "<a class=\"card\" href=\"{}\">{}</a>",
            item.href,
            layout::escape_html(item.name)
        ));
    }
    let content = format!(
        "<h1>Dashboard</h1><p class=\"generated\">Generated {}</p>\
         <div class=\"cards\">{}</div>",
        generated, cards
    );

    Html(layout::render_page(
        "Dashboard",
        &user.email,
        "/dashboard",
        &content,
        pwa_enabled(&state),
    ))
}

/// GET /dashboard/:section
pub async fn dashboard_section(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(section): Path<String>,
) -> WebResult<Html<String>> {
    let item = find_section(&section).ok_or_else(|| {
        WebError::NotFound(format!("No dashboard section named '{}'", section))
    })?;

    let content = format!(
        "<h1>{}</h1><p class=\"empty\">Nothing to show yet.</p>",
        layout::escape_html(item.name)
    );

    Ok(Html(layout::render_page(
        item.name,
        &user.email,
        item.href,
        &content,
        pwa_enabled(&state),
    )))
}

/// Wall-clock time in South Africa. SAST is UTC+2 with no daylight
/// saving, so a fixed offset is correct year-round.
fn sast_now() -> NaiveDateTime {
    (Utc::now() + Duration::hours(2)).naive_utc()
}

fn pwa_enabled(state: &AppState) -> bool {
    PwaConfig::CURRENT.enabled(state.config.server.dev_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sast_is_two_hours_ahead() {
        let utc = Utc::now().naive_utc();
        let sast = sast_now();
        let offset = sast - utc;
        assert!(offset >= Duration::minutes(119));
        assert!(offset <= Duration::minutes(121));
    }
}
