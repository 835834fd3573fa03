use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week as stored in the v2 `groups.voting_days` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday to Sunday, matching the `day1..day7` columns of v1.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Builds the ordered list of days whose flag is set.
    ///
    /// `flags[0]` is Monday. The result keeps Monday..Sunday order and holds
    /// each day at most once.
    pub fn from_flags(flags: &[bool; 7]) -> Vec<Weekday> {
        Self::ALL
            .iter()
            .zip(flags.iter())
            .filter(|(_, enabled)| **enabled)
            .map(|(day, _)| *day)
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
