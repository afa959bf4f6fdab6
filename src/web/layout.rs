//! Dashboard Layout Shell
//!
//! Server-rendered chrome around every dashboard page: top header with
//! the signed-in user's email, sidebar navigation, content region. These
//! renderers are opaque presentational units; they take already-resolved
//! values and produce markup, nothing else. Session resolution happens
//! upstream in the gate.

use crate::pwa::PwaConfig;

/// A sidebar navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// Sidebar navigation, in display order
pub const NAVIGATION: &[NavItem] = &[
    NavItem { name: "Dashboard", href: "/dashboard" },
    NavItem { name: "Customers", href: "/dashboard/customers" },
    NavItem { name: "Yarn Types", href: "/dashboard/yarn-types" },
    NavItem { name: "Fabric Quality", href: "/dashboard/fabric-quality" },
    NavItem { name: "Job Cards", href: "/dashboard/job-cards" },
    NavItem { name: "Production", href: "/dashboard/production" },
    NavItem { name: "Yarn Stock", href: "/dashboard/yarn-stock" },
    NavItem { name: "Packing & Delivery", href: "/dashboard/packing-delivery" },
];

/// Find a navigation entry by its section slug (the path segment after
/// /dashboard/).
pub fn find_section(slug: &str) -> Option<&'static NavItem> {
    NAVIGATION
        .iter()
        .find(|item| item.href.strip_prefix("/dashboard/") == Some(slug))
}

/// Escape text for interpolation into HTML
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the top header bar. The email is shown exactly as the identity
/// service holds it, escaped but otherwise untouched.
pub fn render_header(user_email: &str) -> String {
    format!(
        "<header class=\"topbar\"><span class=\"brand\">Gilnokie GMS</span>\
         <span class=\"session-user\">{}</span></header>",
        escape_html(user_email)
    )
}

/// Render the sidebar; `active_path` marks the current entry.
pub fn render_sidebar(active_path: &str) -> String {
    let mut links = String::new();
    for item in NAVIGATION {
        let class = if item.href == active_path {
            "nav-link active"
        } else {
            "nav-link"
        };
        links.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">{}</a>",
            class,
            item.href,
            escape_html(item.name)
        ));
    }
    format!("<aside class=\"sidebar\"><nav>{}</nav></aside>", links)
}

/// Render a full dashboard page: header, sidebar and the content region.
pub fn render_page(
    title: &str,
    user_email: &str,
    active_path: &str,
    content: &str,
    pwa_enabled: bool,
) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en-ZA\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} - Gilnokie GMS</title>\n\
         <link rel=\"manifest\" href=\"/manifest.webmanifest\">\n\
         {worker}</head>\n<body>\n{header}\n{sidebar}\n\
         <main class=\"content\">{content}</main>\n</body>\n</html>\n",
        title = escape_html(title),
        worker = service_worker_snippet(pwa_enabled),
        header = render_header(user_email),
        sidebar = render_sidebar(active_path),
        content = content,
    )
}

/// Render a page outside the shell (no header or sidebar). Used for the
/// login page, the one route a browser reaches without a session.
pub fn render_bare_page(title: &str, content: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en-ZA\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} - Gilnokie GMS</title>\n\
         </head>\n<body>\n{content}\n</body>\n</html>\n",
        title = escape_html(title),
        content = content,
    )
}

/// Service worker registration, emitted only when the shipped PWA
/// configuration allows it for the current mode.
fn service_worker_snippet(enabled: bool) -> String {
    if !enabled {
        return String::new();
    }
    let mut script = String::from(
        "<script>if ('serviceWorker' in navigator) { \
         navigator.serviceWorker.register('/sw.js'); }",
    );
    if PwaConfig::CURRENT.reload_on_online {
        script.push_str(" window.addEventListener('online', () => window.location.reload());");
    }
    script.push_str("</script>\n");
    script
}
