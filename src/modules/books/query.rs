use super::models::Book;

/// Query string accepted by the list endpoint.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Built from raw query pairs. A repeated key keeps its first value; unknown keys are ignored.
impl FromIterator<(String, String)> for BookQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = BookQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl BookQuery {
    /// Pick the single filter to apply: `name`, then `reading`, then `finished`.
    pub fn criterion(&self) -> Option<Criterion> {
        if let Some(name) = &self.name {
            return Some(Criterion::name(name));
        }
        if let Some(flag) = &self.reading {
            return Some(Criterion::Reading(parse_flag(flag)));
        }
        self.finished
            .as_deref()
            .map(|flag| Criterion::Finished(parse_flag(flag)))
    }
}

/// A single list filter.
///
/// A flag of `None` is an unrecognized value and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Lowercased needle for a case-insensitive substring match.
    NameContains(String),
    Reading(Option<bool>),
    Finished(Option<bool>),
}

impl Criterion {
    pub fn name(needle: &str) -> Self {
        Criterion::NameContains(needle.to_lowercase())
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Criterion::NameContains(needle) => book.name.to_lowercase().contains(needle.as_str()),
            Criterion::Reading(Some(flag)) => book.reading == Some(*flag),
            Criterion::Finished(Some(flag)) => book.finished == *flag,
            Criterion::Reading(None) | Criterion::Finished(None) => false,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use time::OffsetDateTime;

    fn book(name: &str, reading: Option<bool>, finished: bool) -> Book {
        Book {
            id: name.to_lowercase(),
            name: name.to_string(),
            year: Value::Null,
            author: Value::Null,
            summary: Value::Null,
            publisher: Value::Null,
            page_count: Value::Null,
            read_page: Value::Null,
            finished,
            reading,
            inserted_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn no_params_means_no_filter() {
        assert_eq!(BookQuery::default().criterion(), None);
    }

    #[test]
    fn name_wins_over_flags() {
        let query = BookQuery {
            name: Some("Dico".to_string()),
            reading: Some("1".to_string()),
            finished: Some("0".to_string()),
        };
        assert_eq!(
            query.criterion(),
            Some(Criterion::NameContains("dico".to_string()))
        );
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query: BookQuery = [
            ("reading", "1"),
            ("reading", "0"),
            ("sort", "name"),
            ("finished", "0"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        assert_eq!(query.reading.as_deref(), Some("1"));
        assert_eq!(query.finished.as_deref(), Some("0"));
        assert_eq!(query.name, None);
        assert_eq!(query.criterion(), Some(Criterion::Reading(Some(true))));
    }

    #[test]
    fn reading_wins_over_finished() {
        let query = BookQuery {
            reading: Some("0".to_string()),
            finished: Some("1".to_string()),
            ..BookQuery::default()
        };
        assert_eq!(query.criterion(), Some(Criterion::Reading(Some(false))));
    }

    #[test]
    fn name_match_ignores_case() {
        let criterion = Criterion::name("DICODING");
        assert!(criterion.matches(&book("Belajar Dicoding", None, false)));
        assert!(!criterion.matches(&book("Rust", None, false)));
    }

    #[test]
    fn flags_accept_digits_and_words() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }

    #[test]
    fn unrecognized_flag_matches_nothing() {
        let criterion = Criterion::Finished(None);
        assert!(!criterion.matches(&book("A", Some(true), true)));
        assert!(!criterion.matches(&book("B", Some(false), false)));
    }

    #[test]
    fn reading_filter_skips_books_without_reading_state() {
        let criterion = Criterion::Reading(Some(false));
        assert!(criterion.matches(&book("A", Some(false), false)));
        assert!(!criterion.matches(&book("B", None, false)));
    }
}
