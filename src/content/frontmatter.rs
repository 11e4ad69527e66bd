//! Front-matter parsing
//!
//! Three layouts are recognised at the top of a post:
//! YAML between `---` fences, JSON between `;;;` fences, and a bare JSON
//! object. A post without any of them has empty front matter.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const YAML_FENCE: &str = "---";
const JSON_FENCE: &str = ";;;";

/// Naive layouts tried after RFC 3339, interpreted in local time
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing closing `{0}` for front-matter")]
    Unclosed(&'static str),
    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),
}

/// `tags: rust` and `tags: [rust, blog]` are both accepted
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(tag)) => vec![tag],
        Some(OneOrMany::Many(tags)) => tags,
    })
}

/// Front-matter data from a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    /// Unknown keys are ignored
    pub published: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            excerpt: None,
            slug: None,
            tags: Vec::new(),
            published: true,
        }
    }
}

impl FrontMatter {
    /// Split `content` into its front matter and the body that follows
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start();

        let (fm, body) = if let Some(rest) = content.strip_prefix(YAML_FENCE) {
            Self::parse_yaml(rest)?
        } else if let Some(rest) = content.strip_prefix(JSON_FENCE) {
            Self::parse_fenced_json(rest)?
        } else if content.starts_with('{') {
            Self::parse_bare_json(content)?
        } else {
            (FrontMatter::default(), content)
        };

        Ok((fm, body.trim_start_matches(['\n', '\r'])))
    }

    fn parse_yaml(rest: &str) -> Result<(Self, &str), FrontMatterError> {
        let rest = rest.trim_start_matches(['\n', '\r']);
        let (yaml, body) = rest
            .split_once("\n---")
            .ok_or(FrontMatterError::Unclosed(YAML_FENCE))?;

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }
        Ok((serde_yaml::from_str(yaml)?, body))
    }

    fn parse_fenced_json(rest: &str) -> Result<(Self, &str), FrontMatterError> {
        let (json, body) = rest
            .split_once(JSON_FENCE)
            .ok_or(FrontMatterError::Unclosed(JSON_FENCE))?;
        Ok((serde_json::from_str(json)?, body))
    }

    /// The object ends wherever the JSON deserializer stops reading
    fn parse_bare_json(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
        match stream.next() {
            Some(Ok(fm)) => Ok((fm, &content[stream.byte_offset()..])),
            Some(Err(e)) => Err(e.into()),
            None => Ok((FrontMatter::default(), content)),
        }
    }

    /// The `date` field as a local timestamp, if present and recognised
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        let raw = self.date.as_deref()?.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local));
        }

        let naive = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })?;

        Local.from_local_datetime(&naive).earliest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_front_matter() {
        let post = "---\ntitle: Paging Through Posts\ndate: 2023-11-02 18:45:00\nslug: paging\ntags: [rust, ssg]\nexcerpt: Why listings need pages.\nlayout: wide\n---\n\nThe body starts here.\n";

        let (fm, body) = FrontMatter::parse(post).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Paging Through Posts"));
        assert_eq!(fm.slug.as_deref(), Some("paging"));
        assert_eq!(fm.tags, ["rust", "ssg"]);
        assert_eq!(fm.excerpt.as_deref(), Some("Why listings need pages."));
        assert!(fm.published);
        assert_eq!(body, "The body starts here.\n");
    }

    #[test]
    fn test_bare_json_front_matter() {
        let post = "{\"title\": \"Archive Notes\", \"tags\": [\"meta\"], \"note\": {\"a\": 1}}\n\nBody after JSON.\n";

        let (fm, body) = FrontMatter::parse(post).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Archive Notes"));
        assert_eq!(fm.tags, ["meta"]);
        assert_eq!(body, "Body after JSON.\n");
    }

    #[test]
    fn test_parse_fenced_json_frontmatter() {
        let content = ";;;\n{\"title\": \"Fenced\", \"date\": \"2023-02-01\"}\n;;;\nBody.";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Fenced".to_string()));
        assert_eq!(remaining, "Body.");
    }

    #[test]
    fn test_datetime_is_local() {
        let fm = FrontMatter {
            date: Some("2023-11-02 18:45".to_string()),
            ..Default::default()
        };

        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2023-11-02 18:45");
    }

    #[test]
    fn test_parse_date_only() {
        let fm = FrontMatter {
            date: Some("2021/04/16".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2021-04-16");
    }

    #[test]
    fn test_unparseable_date() {
        let fm = FrontMatter {
            date: Some("last tuesday".to_string()),
            ..Default::default()
        };
        assert!(fm.parse_date().is_none());
    }

    #[test]
    fn test_single_tag_and_empty_tags() {
        let (fm, _) = FrontMatter::parse("---\ntitle: One\ntags: notes\n---\nx").unwrap();
        assert_eq!(fm.tags, ["notes"]);

        let (fm, _) = FrontMatter::parse("---\ntitle: None\ntags:\n---\nx").unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_draft_flag() {
        let content = "---\ntitle: Draft\npublished: false\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(!fm.published);
    }

    #[test]
    fn test_unclosed_frontmatter_is_error() {
        let content = "---\ntitle: Broken\n\nNo closing fence";
        assert!(matches!(
            FrontMatter::parse(content),
            Err(FrontMatterError::Unclosed("---"))
        ));
    }

    #[test]
    fn test_rfc3339_date() {
        let fm = FrontMatter {
            date: Some("2024-06-01T08:00:00+00:00".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.timestamp(), 1_717_228_800);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        assert!(matches!(
            FrontMatter::parse(content),
            Err(FrontMatterError::Yaml(_))
        ));
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("Just a body.").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, "Just a body.");
    }
}
