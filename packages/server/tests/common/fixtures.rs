//! Test fixtures for creating test data.

use blog_core::common::utils::generate_slug;
use blog_core::domains::posts::PostInput;
use chrono::NaiveDate;
use serde_json::{json, Value};

/// Password configured for the editor in every test wiring.
pub const EDITOR_PASSWORD: &str = "correct horse battery staple";

/// A slug no other test uses.
pub fn unique_slug(prefix: &str) -> String {
    generate_slug(prefix)
}

pub fn post_input(title: &str, date: (i32, u32, u32)) -> PostInput {
    PostInput {
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid fixture date"),
        author: "Ada".to_string(),
        summary: format!("About {}", title),
        content: format!("# {}\n\nBody text.", title),
    }
}

/// JSON body accepted by `POST /create-post`.
pub fn post_form(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "date": date,
        "author": "Ada",
        "summary": "A short summary",
        "content": "# Heading\n\nSome **bold** text.",
    })
}
