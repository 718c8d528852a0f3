use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Indexed by quarter - 1. Quarter 1 is "Winter", quarter 4 is "Fall".
const SEASONS: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];

/// Values derived from one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl DateParts {
    pub fn dd(&self) -> String {
        format!("{:02}", self.day)
    }

    pub fn mm(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn yyyy(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn yy(&self) -> String {
        format!("{:02}", self.year.rem_euclid(100))
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month0()]
    }

    pub fn month_abbr(&self) -> &'static str {
        &self.month_name()[..3]
    }

    /// December when the current month is January
    pub fn last_month_name(&self) -> &'static str {
        MONTHS[(self.month0() + 11) % 12]
    }

    /// 1 for Jan-Mar through 4 for Oct-Dec
    pub fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }

    /// Previous quarter, wrapping 1 to 4
    pub fn last_quarter(&self) -> u32 {
        match self.quarter() {
            1 => 4,
            q => q - 1,
        }
    }

    pub fn season(&self) -> &'static str {
        SEASONS[(self.quarter() - 1) as usize]
    }

    pub fn last_year(&self) -> i32 {
        self.year - 1
    }

    pub fn next_year(&self) -> i32 {
        self.year + 1
    }

    pub fn is_leap(&self) -> bool {
        is_leap_year(self.year)
    }

    fn month0(&self) -> usize {
        (self.month - 1) as usize
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}
