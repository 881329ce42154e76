//! Free-text search and tag filtering over the in-memory dataset.
//!
//! Filtering is a stable AND of two optional predicates and never reorders records.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Record;

/// Tags shown in the filter bar before it is expanded.
pub const DEFAULT_VISIBLE_TAGS: usize = 8;

/// Current search text and tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub text: String,
    pub selected_tag: Option<String>,
}

impl QueryState {
    /// True when neither predicate is active.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.selected_tag.is_none()
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter(records, &self.text, self.selected_tag.as_deref())
    }
}

/// Records matching `query` (case-insensitive substring) and `selected_tag`
/// (exact name), in their original order.
///
/// An empty query disables the text predicate. Whitespace is not trimmed, so
/// `" "` only matches records containing a space.
pub fn filter<'a>(
    records: &'a [Record],
    query: &str,
    selected_tag: Option<&str>,
) -> Vec<&'a Record> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| needle.is_empty() || matches_text(record, &needle))
        .filter(|record| selected_tag.map_or(true, |tag| record.has_tag(tag)))
        .collect()
}

fn matches_text(record: &Record, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(record.title.as_str())
        || contains(record.content.as_str())
        || record.description.as_deref().is_some_and(contains)
        || record.tags().iter().any(|tag| contains(tag.name.as_str()))
        || record.owner_name().is_some_and(contains)
}

/// Every distinct tag name in the dataset, sorted ascending.
pub fn available_tags(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.tags())
        .map(|tag| tag.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The tags the filter bar renders: all of them once expanded.
pub fn visible_tags(tags: &[String], show_all: bool) -> &[String] {
    if show_all {
        tags
    } else {
        &tags[..tags.len().min(DEFAULT_VISIBLE_TAGS)]
    }
}

pub fn has_more_tags(tags: &[String]) -> bool {
    tags.len() > DEFAULT_VISIBLE_TAGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Owner, Tag};

    fn create_test_record(id: i64, title: &str, tags: &[&str]) -> Record {
        Record {
            id,
            title: title.to_string(),
            content: format!("content of {}", title),
            description: None,
            tags: if tags.is_empty() {
                None
            } else {
                Some(
                    tags.iter()
                        .enumerate()
                        .map(|(i, name)| Tag::new(i as i64, *name))
                        .collect(),
                )
            },
            is_r18: None,
            likes: None,
            views: None,
            owner: None,
        }
    }

    fn ids(records: &[&Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = vec![
            create_test_record(3, "c", &[]),
            create_test_record(1, "a", &["x"]),
            create_test_record(2, "b", &[]),
        ];

        assert_eq!(ids(&filter(&records, "", None)), vec![3, 1, 2]);
        assert!(QueryState::default().is_empty());
    }

    #[test]
    fn test_tag_filter_preserves_order() {
        let records = vec![
            create_test_record(1, "one", &["A", "B"]),
            create_test_record(2, "two", &["B"]),
            create_test_record(3, "three", &[]),
        ];

        assert_eq!(ids(&filter(&records, "", Some("B"))), vec![1, 2]);
        assert_eq!(ids(&filter(&records, "", Some("A"))), vec![1]);
        // Exact match: tag filter is case-sensitive
        assert!(filter(&records, "", Some("b")).is_empty());
    }

    #[test]
    fn test_text_search_fields() {
        let mut described = create_test_record(1, "Plain", &[]);
        described.description = Some("Has a SECRET inside".to_string());

        let tagged = create_test_record(2, "Other", &["Secretive"]);

        let mut owned = create_test_record(3, "Third", &[]);
        owned.owner = Some(Owner {
            username: "SecretAgent".to_string(),
            avatar_url: None,
        });

        let titled = create_test_record(4, "A secret title", &[]);
        let unrelated = create_test_record(5, "Nothing here", &[]);

        let records = vec![described, tagged, owned, titled, unrelated];
        assert_eq!(ids(&filter(&records, "secret", None)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter(&records, "SECRET", None)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_matches_content() {
        let records = vec![create_test_record(1, "Title", &[])];
        assert_eq!(ids(&filter(&records, "CONTENT OF", None)), vec![1]);
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let mut spaced = create_test_record(1, "nospace", &[]);
        spaced.content = "nospace".to_string();
        let records = vec![spaced, create_test_record(2, "two words", &[])];

        assert_eq!(ids(&filter(&records, " ", None)), vec![2]);
    }

    #[test]
    fn test_text_and_tag_combine() {
        let records = vec![
            create_test_record(1, "rust guide", &["lang"]),
            create_test_record(2, "rust tools", &["tools"]),
            create_test_record(3, "go guide", &["lang"]),
        ];

        assert_eq!(ids(&filter(&records, "rust", Some("lang"))), vec![1]);

        let state = QueryState {
            text: "guide".to_string(),
            selected_tag: Some("lang".to_string()),
        };
        assert_eq!(ids(&state.apply(&records)), vec![1, 3]);
    }

    #[test]
    fn test_filter_never_adds_records() {
        let records = vec![
            create_test_record(1, "alpha", &["x"]),
            create_test_record(2, "beta", &["y"]),
        ];
        let all = filter(&records, "", None);

        for (query, tag) in [("a", None), ("zzz", None), ("", Some("x")), ("e", Some("y"))] {
            let subset = filter(&records, query, tag);
            assert!(subset.len() <= all.len());
            assert!(subset.iter().all(|r| all.contains(r)));
        }
    }

    #[test]
    fn test_available_tags_sorted_and_deduplicated() {
        let records = vec![
            create_test_record(1, "a", &["zeta", "alpha"]),
            create_test_record(2, "b", &["alpha", "Beta"]),
            create_test_record(3, "c", &[]),
        ];

        assert_eq!(available_tags(&records), vec!["Beta", "alpha", "zeta"]);
        assert!(available_tags(&[]).is_empty());
    }

    #[test]
    fn test_visible_tags() {
        let tags: Vec<String> = (0..10).map(|i| format!("t{}", i)).collect();

        assert_eq!(visible_tags(&tags, false).len(), DEFAULT_VISIBLE_TAGS);
        assert_eq!(visible_tags(&tags, true).len(), 10);
        assert!(has_more_tags(&tags));

        let few = &tags[..3];
        assert_eq!(visible_tags(few, false).len(), 3);
        assert!(!has_more_tags(few));
    }
}
