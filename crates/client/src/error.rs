/// Errors from the client's calls to the portfolio API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {msg}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The envelope's `msg`, or the raw body if it was not an envelope.
        msg: String,
    },

    /// The API answered 2xx but with `success: false`.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// A form failed its local checks; nothing was sent.
    #[error("{0}")]
    Invalid(String),
}

impl ClientError {
    /// The message the server sent back, if it answered at all.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { msg, .. } | ClientError::Rejected(msg) => Some(msg.as_str()),
            ClientError::Request(_) | ClientError::Invalid(_) => None,
        }
    }

    /// What the terminal may show for a failed project or skill action.
    ///
    /// Only input mistakes are shown. Network and API failures on these
    /// paths are logged by the caller and otherwise ignored; the contact form
    /// reports its own outcome.
    pub fn user_notice(&self) -> Option<&str> {
        match self {
            ClientError::Invalid(msg) => Some(msg.as_str()),
            ClientError::Request(_) | ClientError::Api { .. } | ClientError::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_error() -> ClientError {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        ClientError::Request(err)
    }

    #[test]
    fn network_failure_is_not_shown() {
        assert_eq!(request_error().user_notice(), None);
    }

    #[test]
    fn server_answers_are_not_shown_for_actions() {
        let api = ClientError::Api {
            status: 500,
            msg: "An internal error occurred".into(),
        };
        assert_eq!(api.user_notice(), None);
        assert_eq!(ClientError::Rejected("nope".into()).user_notice(), None);
        assert_eq!(api.server_message(), Some("An internal error occurred"));
    }

    #[test]
    fn input_mistakes_are_shown() {
        let err = ClientError::Invalid("No project at position 9".into());
        assert_eq!(err.user_notice(), Some("No project at position 9"));
    }
}
