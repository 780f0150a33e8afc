use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Error, Result};

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Submitted body of the store and update forms. Absent fields arrive as empty
/// strings so they are reported by validation instead of failing extraction.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    #[validate(length(min = 1, message = "Please enter a Title"))]
    pub title: String,
    #[validate(length(min = 1, message = "Please enter the Content"))]
    pub content: String,
}

// Order in which violations are reported.
const FIELDS: [&str; 2] = ["title", "content"];

impl PostForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn violations(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let fields = errors.field_errors();

        FIELDS
            .iter()
            .filter_map(|field| fields.get(*field))
            .flat_map(|errs| errs.iter())
            .map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => err.code.to_string(),
            })
            .collect()
    }

    pub fn check(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(violations))
        }
    }
}

pub fn validate(title: &str, content: &str) -> Vec<String> {
    PostForm::new(title, content).violations()
}
