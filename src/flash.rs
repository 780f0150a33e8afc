//! One-shot notices carried across a redirect in a signed cookie.
//!
//! A notice pushed while answering one request is read and cleared by the next
//! request that renders a page.

use axum_extra::extract::{cookie::Cookie, SignedCookieJar};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const FLASH_COOKIE: &str = "flash";

const FLASH_MAX_AGE_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Success,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }
}

/// Notices waiting in the jar. A cookie that fails signature checks or does
/// not decode is treated as empty.
fn pending(jar: &SignedCookieJar) -> Vec<Notice> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| {
            urlencoding::decode(cookie.value())
                .ok()
                .map(|raw| raw.into_owned())
        })
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Reads the pending notices and clears the cookie.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Notice>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }

    let notices = pending(&jar);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, notices)
}

/// Appends a notice to the ones already pending.
pub fn push(jar: SignedCookieJar, notice: Notice) -> SignedCookieJar {
    let mut notices = pending(&jar);
    notices.push(notice);

    let value = match serde_json::to_string(&notices) {
        Ok(value) => value,
        Err(err) => {
            warn!("Failed to encode flash notices: {:?}", err);
            return jar;
        }
    };

    let cookie = Cookie::build((FLASH_COOKIE, urlencoding::encode(&value).into_owned()))
        .path("/")
        .max_age(time::Duration::seconds(FLASH_MAX_AGE_SECS))
        .http_only(true)
        .build();

    jar.add(cookie)
}
