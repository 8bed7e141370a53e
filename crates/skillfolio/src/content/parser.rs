use super::domain::PostRecord;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("document does not start with a `---` front matter block")]
    Missing,
    #[error("front matter is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front matter has no title")]
    MissingTitle,
}

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default, deserialize_with = "scalar_as_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    slug: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    draft: Option<bool>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    summary: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    description: Option<String>,
}

/// Parses one Markdown/MDX document. `default_slug` applies when the front matter has none.
pub(crate) fn parse_document(
    default_slug: &str,
    text: &str,
) -> Result<PostRecord, FrontMatterError> {
    let (yaml, body) = split_front_matter(text).ok_or(FrontMatterError::Missing)?;

    let front: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    let title = front.title.ok_or(FrontMatterError::MissingTitle)?;

    Ok(PostRecord {
        slug: front.slug.unwrap_or_else(|| default_slug.to_string()),
        title,
        summary: front.summary.or(front.description),
        date: front.date,
        tags: front.tags,
        draft: front.draft.unwrap_or(false),
        body: body.to_string(),
        source: None,
    })
}

/// Splits `---` delimited front matter from the document body.
pub(crate) fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim_end() != "---" {
        return None;
    }

    let start = opening.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == "---" {
            return Some((&text[start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

/// Accepts a sequence of scalars or a comma separated string. Non-scalar items are dropped.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(Value::String(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(other) => scalar_text(&other).into_iter().collect(),
        None => Vec::new(),
    };
    Ok(tags)
}

/// Booleans or `"true"`/`"false"` strings; anything else counts as unset.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::String(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    };
    Ok(flag)
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    Some(text).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_front_matter_from_body() {
        let text = "---\ntitle: Hello\n---\n# Body\n";
        let (yaml, body) = split_front_matter(text).expect("front matter present");
        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn unterminated_front_matter_is_rejected() {
        assert!(split_front_matter("---\ntitle: Hello\n").is_none());
        assert!(split_front_matter("title: Hello\n---\n").is_none());
    }

    #[test]
    fn optional_fields_default_gracefully() {
        let record = parse_document("notes/first", "---\ntitle: 随笔\n---\n").expect("parses");
        assert_eq!(record.slug, "notes/first");
        assert_eq!(record.title, "随笔");
        assert!(record.summary.is_none());
        assert!(record.date.is_none());
        assert!(record.tags.is_empty());
        assert!(!record.draft);
    }

    #[test]
    fn summary_falls_back_to_description() {
        let text = "---\ntitle: T\ndescription: from description\n---\n";
        let record = parse_document("t", text).expect("parses");
        assert_eq!(record.summary.as_deref(), Some("from description"));

        let text = "---\ntitle: T\nsummary: from summary\ndescription: ignored\n---\n";
        let record = parse_document("t", text).expect("parses");
        assert_eq!(record.summary.as_deref(), Some("from summary"));
    }

    #[test]
    fn tags_accept_list_or_comma_string() {
        let text = "---\ntitle: T\ntags: [LoRA, DevOps]\n---\n";
        assert_eq!(
            parse_document("t", text).unwrap().tags,
            vec!["LoRA", "DevOps"]
        );

        let text = "---\ntitle: T\ntags: docker, k8s\n---\n";
        assert_eq!(
            parse_document("t", text).unwrap().tags,
            vec!["docker", "k8s"]
        );

        let text = "---\ntitle: T\ntags:\n---\n";
        assert!(parse_document("t", text).unwrap().tags.is_empty());
    }

    #[test]
    fn mixed_scalar_tags_are_stringified() {
        let text = "---\ntitle: T\ntags: [2024, LoRA, {nested: map}, true]\n---\n";
        let record = parse_document("t", text).expect("post survives odd tags");
        assert_eq!(record.tags, vec!["2024", "LoRA", "true"]);

        let text = "---\ntitle: T\ntags: 42\n---\n";
        assert_eq!(parse_document("t", text).unwrap().tags, vec!["42"]);
    }

    #[test]
    fn draft_accepts_quoted_flags_and_ignores_garbage() {
        let text = "---\ntitle: T\ndraft: \"false\"\n---\n";
        assert!(!parse_document("t", text).expect("quoted false").draft);

        let text = "---\ntitle: T\ndraft: 'True'\n---\n";
        assert!(parse_document("t", text).expect("quoted true").draft);

        let text = "---\ntitle: T\ndraft: maybe\n---\n";
        assert!(!parse_document("t", text).expect("unknown flag").draft);

        let text = "---\ntitle: T\ndraft: [1]\n---\n";
        assert!(!parse_document("t", text).expect("non-scalar flag").draft);
    }

    #[test]
    fn numeric_dates_are_kept_as_text() {
        let text = "---\ntitle: T\ndate: 2024\nslug: custom\ndraft: true\n---\n";
        let record = parse_document("t", text).expect("parses");
        assert_eq!(record.date.as_deref(), Some("2024"));
        assert_eq!(record.slug, "custom");
        assert!(record.draft);
    }

    #[test]
    fn missing_title_is_an_error() {
        let err = parse_document("t", "---\ndate: 2024-01-01\n---\n").expect_err("no title");
        assert!(matches!(err, FrontMatterError::MissingTitle));
    }
}
