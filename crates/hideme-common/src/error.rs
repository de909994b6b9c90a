//! User-facing validation errors for HideMe components.

use thiserror::Error;

/// Age-verification failures.
///
/// These are user-input validation outcomes, not fatal errors: the `Display`
/// output is the exact inline message shown next to the date field, and every
/// variant is recoverable by editing the input and resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeVerificationError {
    /// No date was entered
    #[error("Please enter your date of birth")]
    MissingDate,

    /// Input did not parse as a calendar date
    #[error("Please enter a valid date")]
    InvalidDate,

    /// Entered date is after today
    #[error("Date of birth cannot be in the future")]
    FutureDate,

    /// Computed age is below the configured minimum
    #[error("You must be at least {minimum_age} years old to view this content")]
    Underage { minimum_age: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_ui_copy() {
        assert_eq!(
            AgeVerificationError::MissingDate.to_string(),
            "Please enter your date of birth"
        );
        assert_eq!(
            AgeVerificationError::InvalidDate.to_string(),
            "Please enter a valid date"
        );
        assert_eq!(
            AgeVerificationError::FutureDate.to_string(),
            "Date of birth cannot be in the future"
        );
        assert_eq!(
            AgeVerificationError::Underage { minimum_age: 21 }.to_string(),
            "You must be at least 21 years old to view this content"
        );
    }
}
