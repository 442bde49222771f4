//! Minimal inline HTML rendering. The pages are deliberately plain; the
//! interesting behavior lives in the services behind them.

use kernel::model::goal::{Category, GoalItem};
use strum::IntoEnumIterator;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::LongTerm => "Long-term goals",
        Category::ShortTerm => "Short-term goals",
        Category::Todo => "TODO list",
        Category::Wish => "Wish list",
    }
}

fn nav() -> String {
    let links: Vec<String> = Category::iter()
        .map(|c| format!("<a href=\"/goals/{c}\">{}</a>", category_label(c)))
        .collect();
    format!(
        "<nav>{} | <form method=\"post\" action=\"/logout\" style=\"display:inline\">\
         <button type=\"submit\">Log out</button></form></nav>",
        links.join(" | ")
    )
}

pub fn home_page() -> String {
    layout(
        "Goals",
        "<h1>Goals</h1>\
         <p>Track your goals in four lists and ask for AI guidance.</p>\
         <p><a href=\"/login\">Log in</a> | <a href=\"/register\">Register</a></p>",
    )
}

/// The login form. `query` is the raw query string; the markers set by
/// redirects (`registered`, `logout`, `error`) select a notice line.
pub fn login_page(query: Option<&str>) -> String {
    let notice = match query {
        Some(q) if q.contains("registered") => {
            "<p>Registration complete. Please log in.</p>"
        }
        Some(q) if q.contains("logout") => "<p>You have been logged out.</p>",
        Some(q) if q.contains("error") => "<p class=\"error\">Invalid username or password.</p>",
        _ => "",
    };
    layout(
        "Log in",
        &format!(
            "<h1>Log in</h1>{notice}\
             <form method=\"post\" action=\"/login\">\
             <label>Username <input name=\"username\"></label>\
             <label>Password <input name=\"password\" type=\"password\"></label>\
             <button type=\"submit\">Log in</button>\
             </form>\
             <p><a href=\"/register\">Register</a></p>"
        ),
    )
}

pub fn register_page(error: Option<&str>) -> String {
    let error_block = error
        .map(|e| format!("<p class=\"error\">{}</p>", escape(e)))
        .unwrap_or_default();
    layout(
        "Register",
        &format!(
            "<h1>Register</h1>{error_block}\
             <form method=\"post\" action=\"/register\">\
             <label>Username <input name=\"username\"></label>\
             <label>Password <input name=\"password\" type=\"password\"></label>\
             <button type=\"submit\">Register</button>\
             </form>\
             <p><a href=\"/login\">Log in</a></p>"
        ),
    )
}

pub fn category_page(
    category: Category,
    items: &[GoalItem],
    guidance: Option<&str>,
    error: Option<&str>,
) -> String {
    let mut body = String::new();
    body.push_str(&nav());
    body.push_str(&format!("<h1>{}</h1>", category_label(category)));

    if let Some(e) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>", escape(e)));
    }

    if items.is_empty() {
        body.push_str("<p>(no items yet)</p>");
    } else {
        body.push_str("<ul>");
        for item in items {
            body.push_str(&format!(
                "<li>{} <small>{}</small></li>",
                escape(&item.text),
                item.created_at.format("%Y-%m-%d %H:%M")
            ));
        }
        body.push_str("</ul>");
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/goals/{category}/add\">\
         <input name=\"text\" maxlength=\"500\">\
         <button type=\"submit\">Add</button>\
         </form>\
         <form method=\"post\" action=\"/goals/{category}/guidance\">\
         <button type=\"submit\">Get guidance</button>\
         </form>"
    ));

    if let Some(text) = guidance {
        body.push_str(&format!("<h2>Guidance</h2><pre>{}</pre>", escape(text)));
    }

    layout(category_label(category), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::model::id::{GoalItemId, UserId};

    fn item(text: &str) -> GoalItem {
        GoalItem {
            goal_item_id: GoalItemId::new(1),
            category: Category::Todo,
            text: text.to_string(),
            created_at: Utc::now(),
            owned_by: UserId::new(1),
        }
    }

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn category_page_escapes_item_text() {
        let items = [item("<script>alert(1)</script>")];
        let html = category_page(Category::Todo, &items, None, None);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn login_page_picks_notice_from_query() {
        assert!(login_page(Some("registered")).contains("Registration complete"));
        assert!(login_page(Some("logout")).contains("logged out"));
        assert!(login_page(Some("error")).contains("Invalid username or password."));
        assert!(!login_page(None).contains("Invalid username"));
    }
}
