//! Record model matching the dataset's prompt objects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Tag;

/// Default length of the card preview text, in characters.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Tags shown on a card before collapsing into "+N more".
pub const PREVIEW_TAG_LIMIT: usize = 3;

const NO_CONTENT: &str = "No content available";

/// The person who published a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub username: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

/// One displayable prompt.
///
/// Only `id` is required. Every other field that is missing, `null` or of an
/// unexpected type decodes as absent (or empty text) instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Tag objects without a usable `name` are dropped.
    #[serde(
        default,
        deserialize_with = "lenient_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<Tag>>,
    /// Adult-content flag; the dataset encodes it as `0`/`1`.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_r18: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub likes: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner: Option<Owner>,
}

impl Record {
    pub fn views(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn likes(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    pub fn is_adult(&self) -> bool {
        self.is_r18.unwrap_or(false)
    }

    /// Tags as a slice, empty when the record has none.
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|tag| tag.name == name)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|owner| owner.username.as_str())
    }

    /// Card preview: content, else description, truncated to `max_chars` with `...`.
    pub fn summary(&self, max_chars: usize) -> String {
        let text = if !self.content.is_empty() {
            self.content.as_str()
        } else {
            match self.description.as_deref() {
                Some(description) if !description.is_empty() => description,
                _ => NO_CONTENT,
            }
        };

        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }

    /// The first `limit` tag names plus how many were left out.
    pub fn preview_tags(&self, limit: usize) -> (Vec<&str>, usize) {
        let tags = self.tags();
        let shown = tags.iter().take(limit).map(|tag| tag.name.as_str()).collect();
        (shown, tags.len().saturating_sub(limit))
    }
}

/// Any value that does not decode as `T` is treated as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, String>(deserializer)?.unwrap_or_default())
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<Tag>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| Tag::deserialize(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// `true`/`false`, or a number where only `1` is set. Anything else is absent.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(set) => Some(set),
        Value::Number(n) => Some(n.as_f64() == Some(1.0)),
        _ => None,
    })
}

/// Find a record by id.
pub fn find_record(records: &[Record], id: i64) -> Option<&Record> {
    records.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_record(content: &str, description: Option<&str>) -> Record {
        Record {
            id: 1,
            title: "Writer".to_string(),
            content: content.to_string(),
            description: description.map(str::to_string),
            tags: None,
            is_r18: None,
            likes: None,
            views: None,
            owner: None,
        }
    }

    #[test]
    fn test_minimal_record_parses() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "title": "Minimal",
            "content": "body"
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert!(record.tags().is_empty());
        assert_eq!(record.views(), 0);
        assert_eq!(record.likes(), 0);
        assert!(!record.is_adult());
        assert!(record.owner_name().is_none());
    }

    #[test]
    fn test_full_record_parses() {
        let record: Record = serde_json::from_value(json!({
            "id": 2,
            "title": "Code reviewer",
            "content": "Review this code",
            "description": "Reviews code",
            "tags": [{ "id": 4, "name": "code" }, { "id": 5, "name": "review" }],
            "is_r18": 1,
            "likes": 256,
            "views": 2048,
            "owner": { "username": "CodeReviewer", "avatar_url": null }
        }))
        .unwrap();

        assert!(record.is_adult());
        assert_eq!(record.likes(), 256);
        assert_eq!(record.views(), 2048);
        assert!(record.has_tag("code"));
        assert!(!record.has_tag("Code"));
        assert_eq!(record.owner_name(), Some("CodeReviewer"));
    }

    #[test]
    fn test_adult_flag_forms() {
        let flag = |value: serde_json::Value| -> bool {
            let record: Record =
                serde_json::from_value(json!({ "id": 1, "title": "t", "is_r18": value })).unwrap();
            record.is_adult()
        };

        assert!(flag(json!(1)));
        assert!(flag(json!(true)));
        assert!(!flag(json!(0)));
        assert!(!flag(json!(2)));
        assert!(!flag(json!(false)));
        assert!(!flag(json!(null)));
        assert!(!flag(json!("1")));
    }

    #[test]
    fn test_odd_fields_decode_as_absent() {
        let record: Record = serde_json::from_value(json!({
            "id": 9,
            "title": null,
            "content": null,
            "description": 42,
            "tags": [{ "name": "kept" }, { "id": 3 }, "loose", { "id": 4, "name": "also" }],
            "is_r18": "0",
            "likes": -5,
            "views": "many",
            "owner": { "avatar_url": "https://example.com/a.png" },
            "created_at": "2024-06-01"
        }))
        .unwrap();

        assert_eq!(record.title, "");
        assert_eq!(record.content, "");
        assert!(record.description.is_none());
        assert_eq!(record.tags(), &[Tag::new(0, "kept"), Tag::new(4, "also")]);
        assert!(record.is_r18.is_none());
        assert_eq!(record.likes(), 0);
        assert_eq!(record.views(), 0);
        assert!(record.owner.is_none());
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        assert!(serde_json::from_value::<Record>(json!({ "title": "no id" })).is_err());
    }

    #[test]
    fn test_summary_truncates_on_char_boundary() {
        let record = create_test_record(&"写".repeat(250), None);
        let summary = record.summary(SUMMARY_MAX_CHARS);

        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 3);
        assert!(summary.ends_with("..."));

        let short = create_test_record("short", None);
        assert_eq!(short.summary(SUMMARY_MAX_CHARS), "short");
    }

    #[test]
    fn test_summary_falls_back() {
        assert_eq!(
            create_test_record("", Some("only a description")).summary(200),
            "only a description"
        );
        assert_eq!(create_test_record("", None).summary(200), NO_CONTENT);
    }

    #[test]
    fn test_preview_tags() {
        let mut record = create_test_record("x", None);
        record.tags = Some((1..=5).map(|i| Tag::new(i, format!("t{}", i))).collect());

        let (shown, more) = record.preview_tags(PREVIEW_TAG_LIMIT);
        assert_eq!(shown, vec!["t1", "t2", "t3"]);
        assert_eq!(more, 2);

        record.tags = None;
        assert_eq!(record.preview_tags(PREVIEW_TAG_LIMIT), (Vec::new(), 0));
    }

    #[test]
    fn test_find_record() {
        let mut second = create_test_record("b", None);
        second.id = 2;
        let records = vec![create_test_record("a", None), second];

        assert_eq!(find_record(&records, 2).map(|r| r.content.as_str()), Some("b"));
        assert!(find_record(&records, 99).is_none());
    }
}
