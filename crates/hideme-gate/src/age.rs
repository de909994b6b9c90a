//! Date-of-birth age validation.

use chrono::{Datelike, NaiveDate, Utc};

/// Source of "today" for age computation.
///
/// Injectable so date-boundary behavior is testable; production code uses
/// [`SystemClock`].
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock UTC date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Whole elapsed years between `birth_date` and `today`.
///
/// Decrements by one if the birthday has not yet occurred this year.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Check the minimum-age requirement.
///
/// Pure function of its inputs. Empty, unparseable, and future dates are the
/// gate's job to reject before this is called. Implausibly old dates are
/// deliberately not bounded.
pub fn is_age_valid(birth_date: NaiveDate, minimum_age: u32, today: NaiveDate) -> bool {
    calculate_age(birth_date, today) >= minimum_age as i32
}
