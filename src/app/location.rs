//! URL-fragment style navigation state (`#?q=s:passed`).

use std::collections::VecDeque;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in the query value. Filter tokens like `s:passed` and
/// `@smoke` stay readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b':')
    .remove(b'@');

/// A navigable location: currently just the filter query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub query: String,
}

impl Location {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Fragment form, `#` when there is no query. Spaces become `+`.
    pub fn hash(&self) -> String {
        if self.query.is_empty() {
            return "#".to_string();
        }
        let encoded: Vec<String> = self
            .query
            .split(' ')
            .map(|part| utf8_percent_encode(part, QUERY_VALUE).to_string())
            .collect();
        format!("#?q={}", encoded.join("+"))
    }

    /// Parse a fragment produced by [`Location::hash`]. Unknown parameters are ignored.
    pub fn parse(hash: &str) -> Self {
        let params = hash.trim_start_matches('#').trim_start_matches('?');
        let query = form_urlencoded::parse(params.as_bytes())
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        Self { query }
    }
}

/// Back stack of visited locations.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<Location>,
    current: Location,
}

impl History {
    const MAX_ENTRIES: usize = 100;

    pub fn new(initial: Location) -> Self {
        Self {
            entries: VecDeque::new(),
            current: initial,
        }
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Move to a new location; navigating to the current one is a no-op.
    pub fn navigate(&mut self, location: Location) {
        if location == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, location);
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(previous);
    }

    /// Return to the previous location, if any.
    pub fn back(&mut self) -> Option<&Location> {
        let previous = self.entries.pop_back()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filters_are_readable_in_hash() {
        assert_eq!(Location::new("s:passed").hash(), "#?q=s:passed");
        assert_eq!(Location::new("").hash(), "#");
        assert_eq!(Location::new("s:failed login").hash(), "#?q=s:failed+login");
        assert_eq!(Location::new("a/b").hash(), "#?q=a%2Fb");
    }

    #[test]
    fn parses_hash() {
        assert_eq!(Location::parse("#?q=s:flaky").query, "s:flaky");
        assert_eq!(Location::parse("#?foo=1&q=p:webkit+%40smoke").query, "p:webkit @smoke");
        assert_eq!(Location::parse("#").query, "");
        assert_eq!(Location::parse("#?q=100%").query, "100%");
    }

    #[test]
    fn history_back() {
        let mut history = History::new(Location::default());
        assert!(!history.can_go_back());

        history.navigate(Location::new("s:passed"));
        history.navigate(Location::new("s:passed"));
        history.navigate(Location::new("s:failed"));
        assert_eq!(history.current().hash(), "#?q=s:failed");

        assert_eq!(history.back().map(|l| l.query.clone()), Some("s:passed".into()));
        assert_eq!(history.back().map(|l| l.query.clone()), Some(String::new()));
        assert!(history.back().is_none());
        assert_eq!(history.current().query, "");
    }

    #[test]
    fn literal_plus_and_percent_survive() {
        let location = Location::new("a+b 50%");
        assert_eq!(location.hash(), "#?q=a%2Bb+50%25");
        assert_eq!(Location::parse(&location.hash()), location);
    }

    #[test]
    fn history_keeps_most_recent_entries() {
        let mut history = History::new(Location::default());
        for i in 0..(History::MAX_ENTRIES + 20) {
            history.navigate(Location::new(format!("run{i}")));
        }
        assert_eq!(history.entries.len(), History::MAX_ENTRIES);

        let mut steps = 0;
        while history.back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, History::MAX_ENTRIES);
        // The oldest entries were dropped, so the start of history is not the initial location.
        assert_eq!(history.current().query, "run19");
    }
}
