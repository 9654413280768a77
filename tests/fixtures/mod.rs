// Test fixtures - reusable test data
// Provides consistent dates and booking requests across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use shelly_booking::models::booking::NewBooking;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Mar 10 2025
    pub fn mar_10_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    pub fn mar_12_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    /// Dec 30, 2025 (window crosses New Year)
    pub fn dec_30_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
    }

    /// Feb 28, 2024 (leap year)
    pub fn feb_28_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
    }
}

/// Sample booking requests for testing
pub mod bookings {
    use super::*;

    /// Three-day stay in Cabin 2
    pub fn smith_cabin_2() -> NewBooking {
        NewBooking::new("r2", dates::mar_10_2025(), dates::mar_12_2025(), "Smith")
    }

    /// New Year stay on a powered site, with notes
    pub fn nguyen_new_year() -> NewBooking {
        NewBooking::new(
            "r4",
            dates::dec_30_2025(),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            "Nguyen Family",
        )
        .with_notes("Cabin access 2pm, paid cash")
    }
}
