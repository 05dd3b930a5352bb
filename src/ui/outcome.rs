//! Maps failed API calls to what the UI shows.

use crate::ui::client::ClientError;
use crate::ui::notification::Notification;
use crate::utils::validation::Field;

pub const USER_NOT_FOUND: &str = "User not found";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const EMAIL_EXISTS: &str = "Email already exists";

/// What a form does after its submit call failed
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// Stay on the form, attach `message` to `field` and show `notice`
    Field {
        field: Field,
        message: String,
        notice: Notification,
    },
    /// Stay on the form and show the notice
    Notify(Notification),
    /// Leave the form for the list view
    Redirect(Notification),
}

pub fn classify_submit_failure(err: &ClientError) -> SubmitFailure {
    match err {
        ClientError::Status { status: 400, message } => match message {
            Some(msg) if msg.to_lowercase().contains("email") => SubmitFailure::Field {
                field: Field::Email,
                message: EMAIL_EXISTS.to_string(),
                notice: Notification::error(EMAIL_EXISTS),
            },
            Some(msg) => SubmitFailure::Notify(Notification::error(msg.clone())),
            None => SubmitFailure::Notify(Notification::error("Invalid data provided")),
        },
        ClientError::Status { status: 404, .. } => {
            SubmitFailure::Redirect(Notification::error(USER_NOT_FOUND))
        }
        ClientError::Status { status: 422, .. } => {
            SubmitFailure::Notify(Notification::error("Please check your input data"))
        }
        ClientError::Status { .. } => SubmitFailure::Notify(Notification::error(SERVER_ERROR)),
        ClientError::Network(_) => SubmitFailure::Notify(Notification::error(NETWORK_ERROR)),
        ClientError::Unexpected(_) => {
            SubmitFailure::Notify(Notification::error("An unexpected error occurred"))
        }
    }
}

pub fn delete_failure_notice(err: &ClientError) -> Notification {
    match err.status() {
        Some(404) => Notification::error(USER_NOT_FOUND),
        Some(500) => Notification::error(SERVER_ERROR),
        _ => Notification::error("Failed to delete user. Please try again."),
    }
}

/// Notice shown on the list view when the edit form cannot load its record
pub fn load_failure_notice(err: &ClientError) -> Notification {
    match err.status() {
        Some(404) => Notification::error(USER_NOT_FOUND),
        _ => Notification::error("Failed to load user data"),
    }
}

pub fn list_failure_reason(err: &ClientError) -> &'static str {
    match err {
        ClientError::Status { .. } => SERVER_ERROR,
        ClientError::Network(_) => NETWORK_ERROR,
        ClientError::Unexpected(_) => "Failed to load users. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: Option<&str>) -> ClientError {
        ClientError::Status {
            status,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_duplicate_email_marks_the_field() {
        let failure =
            classify_submit_failure(&status(400, Some("User with this email already exists")));

        assert_eq!(
            failure,
            SubmitFailure::Field {
                field: Field::Email,
                message: EMAIL_EXISTS.to_string(),
                notice: Notification::error(EMAIL_EXISTS),
            }
        );
    }

    #[test]
    fn test_other_bad_request_uses_api_message() {
        assert_eq!(
            classify_submit_failure(&status(400, Some("Json deserialize error"))),
            SubmitFailure::Notify(Notification::error("Json deserialize error"))
        );
        assert_eq!(
            classify_submit_failure(&status(400, None)),
            SubmitFailure::Notify(Notification::error("Invalid data provided"))
        );
    }

    #[test]
    fn test_not_found_redirects() {
        assert_eq!(
            classify_submit_failure(&status(404, Some("User not found"))),
            SubmitFailure::Redirect(Notification::error(USER_NOT_FOUND))
        );
    }

    #[test]
    fn test_remaining_failures_notify() {
        assert_eq!(
            classify_submit_failure(&status(422, None)),
            SubmitFailure::Notify(Notification::error("Please check your input data"))
        );
        assert_eq!(
            classify_submit_failure(&status(503, None)),
            SubmitFailure::Notify(Notification::error(SERVER_ERROR))
        );
        assert_eq!(
            classify_submit_failure(&ClientError::Network("refused".into())),
            SubmitFailure::Notify(Notification::error(NETWORK_ERROR))
        );
        assert_eq!(
            classify_submit_failure(&ClientError::Unexpected("bad json".into())),
            SubmitFailure::Notify(Notification::error("An unexpected error occurred"))
        );
    }

    #[test]
    fn test_delete_failures() {
        assert_eq!(delete_failure_notice(&status(404, None)).message, USER_NOT_FOUND);
        assert_eq!(delete_failure_notice(&status(500, None)).message, SERVER_ERROR);
        assert_eq!(
            delete_failure_notice(&ClientError::Network("refused".into())).message,
            "Failed to delete user. Please try again."
        );
    }

    #[test]
    fn test_list_failure_distinguishes_network() {
        assert_eq!(list_failure_reason(&status(500, None)), SERVER_ERROR);
        assert_eq!(list_failure_reason(&ClientError::Network("x".into())), NETWORK_ERROR);
    }

    #[test]
    fn test_load_failure_notice() {
        assert_eq!(load_failure_notice(&status(404, None)), Notification::error(USER_NOT_FOUND));
        assert_eq!(
            load_failure_notice(&status(500, Some("Internal server error"))),
            Notification::error("Failed to load user data")
        );
        assert_eq!(
            load_failure_notice(&ClientError::Network("refused".into())),
            Notification::error("Failed to load user data")
        );
    }
}
