// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Weekday;

/// Every weekday in wire order, Sunday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Returns the lower-case wire name of a weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "sunday",
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
    }
}

/// Parses a weekday name, ignoring case and surrounding whitespace.
#[must_use]
pub fn parse_weekday(token: &str) -> Option<Weekday> {
    let token: &str = token.trim();
    ALL_WEEKDAYS
        .into_iter()
        .find(|weekday| weekday_name(*weekday).eq_ignore_ascii_case(token))
}

/// A set of weekdays.
///
/// Iteration and display always run Sunday to Saturday, regardless of the
/// order members were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    const fn bit(weekday: Weekday) -> u8 {
        1 << weekday.number_days_from_sunday()
    }

    /// Returns a copy of this set with `weekday` added.
    #[must_use]
    pub const fn with(self, weekday: Weekday) -> Self {
        Self(self.0 | Self::bit(weekday))
    }

    /// Checks membership.
    #[must_use]
    pub const fn contains(self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    /// Returns true if no weekday is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    #[must_use]
    pub fn len(self) -> usize {
        self.iter().count()
    }

    /// Iterates members from Sunday to Saturday.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        ALL_WEEKDAYS
            .into_iter()
            .filter(move |weekday| self.contains(*weekday))
    }

    /// Parses a comma separated weekday list, skipping names it does not know.
    #[must_use]
    pub fn parse_lenient(csv: &str) -> Self {
        csv.split(',').filter_map(parse_weekday).collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl std::fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(weekday_name).collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday_is_case_insensitive() {
        assert_eq!(parse_weekday("Monday"), Some(Weekday::Monday));
        assert_eq!(parse_weekday("WEDNESDAY"), Some(Weekday::Wednesday));
        assert_eq!(parse_weekday(" friday "), Some(Weekday::Friday));
    }

    #[test]
    fn test_parse_weekday_rejects_abbreviations() {
        assert_eq!(parse_weekday("mon"), None);
        assert_eq!(parse_weekday(""), None);
    }

    #[test]
    fn test_set_iterates_in_wire_order() {
        let set: WeekdaySet = [Weekday::Saturday, Weekday::Monday, Weekday::Sunday]
            .into_iter()
            .collect();
        let ordered: Vec<Weekday> = set.iter().collect();
        assert_eq!(
            ordered,
            vec![Weekday::Sunday, Weekday::Monday, Weekday::Saturday]
        );
        assert_eq!(set.to_string(), "sunday,monday,saturday");
    }

    #[test]
    fn test_set_deduplicates() {
        let set: WeekdaySet = WeekdaySet::parse_lenient("monday,Monday,MONDAY");
        assert_eq!(set.len(), 1);
        assert!(set.contains(Weekday::Monday));
    }

    #[test]
    fn test_parse_lenient_skips_unknown_names() {
        let set: WeekdaySet = WeekdaySet::parse_lenient("monday,funday,thursday");
        assert_eq!(set.to_string(), "monday,thursday");
    }

    #[test]
    fn test_empty_set() {
        assert!(WeekdaySet::empty().is_empty());
        assert!(WeekdaySet::parse_lenient("noday").is_empty());
        assert_eq!(WeekdaySet::empty().to_string(), "");
    }
}
