//! HTML rendering of the post pages.
//!
//! Templates live in `templates/` and carry `{{name}}` placeholders. Values
//! are HTML-escaped before substitution, and substitution is a single pass so
//! submitted text that looks like a placeholder is left alone.

use axum::{http::StatusCode, response::Html};

use crate::{flash::Notice, models::posts::Post};

const LAYOUT: &str = include_str!("../../templates/layout.html");
const POSTS_INDEX: &str = include_str!("../../templates/posts_index.html");
const POSTS_ROW: &str = include_str!("../../templates/posts_row.html");
const POSTS_FORM: &str = include_str!("../../templates/posts_form.html");
const ERROR: &str = include_str!("../../templates/error.html");

/// Page selected by a workflow, with the data it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List { data: Vec<Post> },
    Create { title: String, content: String },
    Edit { id: String, title: String, content: String },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "posts/index",
            Self::Create { .. } => "posts/create",
            Self::Edit { .. } => "posts/edit",
        }
    }
}

pub fn render(view: &View, notices: &[Notice]) -> Html<String> {
    let (page_title, body) = match view {
        View::List { data } => {
            let rows: String = data
                .iter()
                .map(|post| {
                    fill(
                        POSTS_ROW,
                        &[
                            ("id", post.id.to_string()),
                            ("title", escape(&post.title)),
                            ("content", escape(&post.content)),
                        ],
                    )
                })
                .collect();
            ("Posts", fill(POSTS_INDEX, &[("rows", rows)]))
        }
        View::Create { title, content } => (
            "New post",
            post_form("New post", "/posts/store".to_string(), "Save", title, content),
        ),
        View::Edit { id, title, content } => {
            let action = format!("/posts/update/{}", urlencoding::encode(id));
            ("Edit post", post_form("Edit post", action, "Update", title, content))
        }
    };

    layout(page_title, notices, body)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = fill(
        ERROR,
        &[
            ("status", escape(&status.to_string())),
            ("message", escape(message)),
        ],
    );
    layout("Error", &[], body)
}

fn post_form(heading: &str, action: String, submit: &str, title: &str, content: &str) -> String {
    fill(
        POSTS_FORM,
        &[
            ("heading", escape(heading)),
            ("action", escape(&action)),
            ("submit", escape(submit)),
            ("title", escape(title)),
            ("content", escape(content)),
        ],
    )
}

fn layout(page_title: &str, notices: &[Notice], body: String) -> Html<String> {
    let notices: String = notices
        .iter()
        .map(|notice| {
            format!(
                "        <div class=\"notice notice-{}\">{}</div>\n",
                notice.level.as_str(),
                escape(&notice.message)
            )
        })
        .collect();

    Html(fill(
        LAYOUT,
        &[
            ("page_title", escape(page_title)),
            ("notices", notices),
            ("body", body),
        ],
    ))
}

/// Replaces each known `{{key}}` with its value. Unknown placeholders are kept.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_escapes_post_fields() {
        let view = View::List {
            data: vec![Post {
                id: 3,
                title: "<b>Hi</b>".to_string(),
                content: "a & b".to_string(),
            }],
        };
        let Html(html) = render(&view, &[]);

        assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("/posts/edit/3"));
        assert!(html.contains("/posts/delete/3"));
    }

    #[test]
    fn placeholder_text_in_values_is_not_expanded() {
        let view = View::Create {
            title: "{{content}}".to_string(),
            content: "body".to_string(),
        };
        let Html(html) = render(&view, &[]);

        assert!(html.contains("value=\"{{content}}\""));
    }

    #[test]
    fn edit_form_posts_to_update_route() {
        let view = View::Edit {
            id: "5".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
        };
        let Html(html) = render(&view, &[Notice::error("Please enter a Title")]);

        assert!(html.contains("action=\"/posts/update/5\""));
        assert!(html.contains("notice-error"));
        assert!(html.contains("Please enter a Title"));
    }

    #[test]
    fn edit_form_keeps_raw_id_in_path() {
        let view = View::Edit {
            id: "a b".to_string(),
            title: String::new(),
            content: "c".to_string(),
        };
        let Html(html) = render(&view, &[]);

        assert!(html.contains("action=\"/posts/update/a%20b\""));
    }

    #[test]
    fn error_page_shows_status() {
        let Html(html) = error_page(StatusCode::NOT_FOUND, "Resource not found");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Resource not found"));
    }
}
