//! Request / response types for the `/api/content` endpoints.
//!
//! Field names are camelCase on the wire to match the browser client.

use contentgen_core::templates::is_override;
use contentgen_core::{GeneratedCampaign, Length, PromptBrief, Tone, ValidationError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const CONTENT_REQUIRED: &str = "Content type and topic are required.";
const TOPIC_REQUIRED: &str = "Topic is required for campaign generation.";

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Request body for `POST /api/content/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// A content-type tag (`"blog-post"`, …) or a detailed prompt containing
    /// `"Requirements:"`.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Subject of the generated content.
    #[serde(default)]
    pub topic: Option<String>,
    /// Optional tone (`"professional"`, `"casual"`, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Optional length (`"short"`, `"medium"`, `"long"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGenerateRequest {
    /// What the dispatcher receives as content type; a rendered brief when
    /// tone or length were supplied.
    pub content_type: String,
    pub topic: String,
}

impl GenerateContentRequest {
    pub fn validate(self) -> Result<ValidGenerateRequest, ValidationError> {
        if is_blank(&self.content_type) || is_blank(&self.topic) {
            return Err(ValidationError::MissingField(CONTENT_REQUIRED));
        }
        let content_type = self.content_type.unwrap_or_default();
        let topic = self.topic.unwrap_or_default();

        let tone = match self.tone.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => Some(
                t.to_ascii_lowercase()
                    .parse::<Tone>()
                    .map_err(|_| ValidationError::UnknownTone(t.to_owned()))?,
            ),
            None => None,
        };
        let length = match self.length.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            Some(l) => Some(
                l.to_ascii_lowercase()
                    .parse::<Length>()
                    .map_err(|_| ValidationError::UnknownLength(l.to_owned()))?,
            ),
            None => None,
        };

        let content_type = if (tone.is_some() || length.is_some()) && !is_override(&content_type) {
            PromptBrief {
                content_type: &content_type,
                topic: &topic,
                tone: tone.unwrap_or_default(),
                length: length.unwrap_or_default(),
            }
            .render()
        } else {
            content_type
        };

        Ok(ValidGenerateRequest {
            content_type,
            topic,
        })
    }
}

/// Response body for `POST /api/content/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub generated_content: String,
}

/// Request body for `POST /api/content/generate-campaign`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateCampaignRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

impl GenerateCampaignRequest {
    pub fn validate(self) -> Result<String, ValidationError> {
        if is_blank(&self.topic) {
            return Err(ValidationError::MissingField(TOPIC_REQUIRED));
        }
        Ok(self.topic.unwrap_or_default())
    }
}

/// Response body for `POST /api/content/generate-campaign`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCampaignResponse {
    /// `{socialPosts: [{post, hashtags}], blogIdea: {title, summary}, emailSubject}`
    #[schema(value_type = Object)]
    pub generated_campaign: GeneratedCampaign,
}

/// Response body for `GET /api/content/types`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentOptionsResponse {
    pub content_types: Vec<String>,
    pub tones: Vec<String>,
    pub lengths: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn req(content_type: Option<&str>, topic: Option<&str>) -> GenerateContentRequest {
        GenerateContentRequest {
            content_type: content_type.map(str::to_owned),
            topic: topic.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn missing_or_blank_fields_are_rejected() {
        for r in [
            req(None, Some("coffee")),
            req(Some("blog-post"), None),
            req(Some("  "), Some("coffee")),
            req(Some("blog-post"), Some("\n")),
        ] {
            assert_eq!(
                r.validate().unwrap_err(),
                ValidationError::MissingField(CONTENT_REQUIRED)
            );
        }
    }

    #[test]
    fn plain_tag_passes_through() {
        let valid = req(Some("blog-post"), Some("coffee")).validate().unwrap();
        assert_eq!(valid.content_type, "blog-post");
        assert_eq!(valid.topic, "coffee");
    }

    #[test]
    fn tone_or_length_renders_brief() {
        let r = GenerateContentRequest {
            tone: Some("Enthusiastic".into()),
            ..req(Some("press-release"), Some("new office"))
        };
        let valid = r.validate().unwrap();
        assert!(valid.content_type.starts_with(
            "Create a medium press release about \"new office\" with a enthusiastic tone."
        ));
        assert!(is_override(&valid.content_type));
    }

    #[test]
    fn unknown_tone_or_length_is_rejected() {
        let r = GenerateContentRequest {
            tone: Some("snarky".into()),
            ..req(Some("blog-post"), Some("x"))
        };
        assert_eq!(
            r.validate().unwrap_err(),
            ValidationError::UnknownTone("snarky".into())
        );
        let r = GenerateContentRequest {
            length: Some("epic".into()),
            ..req(Some("blog-post"), Some("x"))
        };
        assert_eq!(
            r.validate().unwrap_err(),
            ValidationError::UnknownLength("epic".into())
        );
    }

    #[test]
    fn existing_override_ignores_brief_fields() {
        let custom = "Write it.\nRequirements:\n- none";
        let r = GenerateContentRequest {
            length: Some("long".into()),
            ..req(Some(custom), Some("x"))
        };
        assert_eq!(r.validate().unwrap().content_type, custom);
    }

    #[test]
    fn campaign_topic_is_required() {
        assert!(GenerateCampaignRequest { topic: None }.validate().is_err());
        assert!(GenerateCampaignRequest { topic: Some(" ".into()) }.validate().is_err());
        assert_eq!(
            GenerateCampaignRequest { topic: Some("coffee".into()) }.validate().unwrap(),
            "coffee"
        );
    }
}
