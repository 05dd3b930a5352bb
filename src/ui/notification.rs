use actix_web::{http::header, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Level::Success),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

/// Transient message reporting the outcome of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into() }
    }

    /// 303 redirect to `path` carrying this notification in the query string
    pub fn redirect_to(&self, path: &str) -> HttpResponse {
        let location = format!(
            "{}?level={}&notice={}",
            path,
            self.level.as_str(),
            urlencoding::encode(&self.message)
        );

        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }
}

/// Notification carried across a redirect.
/// Unknown levels fall back to success.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub level: Option<String>,
    pub notice: Option<String>,
}

impl NoticeQuery {
    pub fn into_notification(self) -> Option<Notification> {
        let message = self.notice.filter(|m| !m.trim().is_empty())?;
        Some(Notification {
            level: self.level.as_deref().and_then(Level::parse).unwrap_or(Level::Success),
            message,
        })
    }
}
