use thiserror::Error;

/// Every failure the page can hit. None of them take the page down; the
/// handlers log and surface a [`Notification`] where the user should know.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("no element with id '{0}'")]
    MissingTarget(String),
    #[error("couldn't start download: {0}")]
    DownloadDispatch(String),
    #[error("email relay failed: {0}")]
    EmailDelivery(String),
    #[error("required field '{0}' is empty")]
    IncompleteForm(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    MessageSent,
    MessageFailed,
    DownloadFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MessageSent => "Message sent successfully!",
            Self::MessageFailed => "Failed to send message. Please try again.",
            Self::DownloadFailed => "Failed to download resume. Please try again.",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::MessageSent)
    }
}
