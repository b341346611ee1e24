use thiserror::Error;

/// Every failure the book can report.
///
/// The `Display` text of each variant is exactly what the user sees, so the
/// CLI never needs its own message table.
#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("The name cannot be empty")]
    EmptyName,

    #[error("The phone number must contain only 10 digits")]
    InvalidPhone,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    #[error("Contact not found")]
    ContactNotFound,

    #[error("Phone not found")]
    PhoneNotFound,

    #[error("Phone number not found")]
    PhoneNumberNotFound,

    #[error("Contact already exists")]
    AlreadyExists,

    #[error("Not enough arguments.")]
    MissingArguments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RolodexError {
    /// True for failures caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            RolodexError::Io(_) | RolodexError::Serialization(_) | RolodexError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_render_their_prompt_text() {
        assert_eq!(
            RolodexError::InvalidDateFormat.to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            RolodexError::MissingArguments.to_string(),
            "Not enough arguments."
        );
    }

    #[test]
    fn io_errors_are_not_user_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert!(!RolodexError::from(io).is_user_error());
        assert!(RolodexError::ContactNotFound.is_user_error());
    }
}
