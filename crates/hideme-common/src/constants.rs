//! Shared defaults for HideMe components.

/// Default blur intensity in pixels
pub const DEFAULT_BLUR_AMOUNT: u32 = 5;

/// Default minimum age for age-verification mode
pub const DEFAULT_MINIMUM_AGE: u32 = 18;

/// Wire format for date-of-birth input (HTML date input value)
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
