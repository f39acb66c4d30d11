//! One-week campaign plans: prompt, reply parsing and the demo structure.

use serde::{Deserialize, Serialize};

use crate::demo::hashtag_stem;
use crate::error::CampaignError;
use crate::keywords::keywords_or_topic;

pub const HASHTAGS_PER_POST: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCampaign {
    pub social_posts: Vec<SocialPost>,
    pub blog_idea: BlogIdea,
    pub email_subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub post: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogIdea {
    pub title: String,
    pub summary: String,
}

impl GeneratedCampaign {
    /// Check the parts serde cannot: non-empty text and three hashtags per
    /// post.
    pub fn validate(&self) -> Result<(), CampaignError> {
        if self.social_posts.is_empty() {
            return Err(CampaignError::Shape("socialPosts is empty".into()));
        }
        for (i, post) in self.social_posts.iter().enumerate() {
            if post.post.trim().is_empty() {
                return Err(CampaignError::Shape(format!("socialPosts[{i}].post is empty")));
            }
            if post.hashtags.len() != HASHTAGS_PER_POST {
                return Err(CampaignError::Shape(format!(
                    "socialPosts[{i}] has {} hashtags, expected {HASHTAGS_PER_POST}",
                    post.hashtags.len()
                )));
            }
        }
        if self.blog_idea.title.trim().is_empty() {
            return Err(CampaignError::Shape("blogIdea.title is empty".into()));
        }
        if self.email_subject.trim().is_empty() {
            return Err(CampaignError::Shape("emailSubject is empty".into()));
        }
        Ok(())
    }
}

/// Instruction asking the model for the campaign as a bare JSON object.
pub fn campaign_prompt(topic: &str) -> String {
    let keywords = keywords_or_topic(topic);
    format!(
        r#"As a highly skilled social media strategist for a hackathon-winning AI Content Generator, your task is to create a comprehensive one-week social media campaign plan.

Primary Topic: "{topic}"
Key Concepts/Keywords: {keywords}

The plan should be designed to be highly effective and engaging, suitable for a hackathon demonstration. It must include:
1.  **Three distinct social media post ideas for Twitter/X.** For each post, provide the full text (concise and impactful) and 3 highly relevant hashtags.
2.  **One compelling blog post idea.** Include a catchy, SEO-friendly title and a brief 2-3 sentence summary that highlights its value.
3.  **One attention-grabbing email subject line** for a promotional newsletter related to the campaign.

Return the response as a valid JSON object with the following structure. Ensure the JSON is perfectly formatted for direct parsing:
{{
  "socialPosts": [
    {{"post": "...", "hashtags": ["...", "...", "..."]}},
    {{"post": "...", "hashtags": ["...", "...", "..."]}},
    {{"post": "...", "hashtags": ["...", "...", "..."]}}
  ],
  "blogIdea": {{"title": "...", "summary": "..."}},
  "emailSubject": "..."
}}"#
    )
}

/// Remove a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}

/// Parse and validate the model's campaign reply.
pub fn parse_campaign(text: &str) -> Result<GeneratedCampaign, CampaignError> {
    let campaign: GeneratedCampaign = serde_json::from_str(strip_code_fence(text))?;
    campaign.validate()?;
    Ok(campaign)
}

/// Fixed campaign with `topic` interpolated.
pub fn demo_campaign(topic: &str) -> GeneratedCampaign {
    let tag = format!("#{}", hashtag_stem(topic));
    let post = |text: String, second: &str, third: &str| SocialPost {
        post: text,
        hashtags: vec![tag.clone(), second.to_owned(), third.to_owned()],
    };
    GeneratedCampaign {
        social_posts: vec![
            post(
                format!(
                    "🚀 Just launched our new guide on {topic}! Discover the key strategies to succeed. #Demo"
                ),
                "#Innovation",
                "#Guide",
            ),
            post(
                format!(
                    "What's the biggest challenge when it comes to {topic}? We'd love to hear your thoughts! #Demo"
                ),
                "#Discussion",
                "#Community",
            ),
            post(
                format!(
                    "Did you know? Mastering {topic} can boost your results by over 50%. Learn how in our latest article. #Demo"
                ),
                "#ProTip",
                "#Success",
            ),
        ],
        blog_idea: BlogIdea {
            title: format!("The Ultimate 2025 Guide to {topic}"),
            summary: format!(
                "A deep dive into the core principles of {topic}. This guide covers everything \
                 from the basics to advanced techniques for professionals."
            ),
        },
        email_subject: format!("Unlock the Secrets of {topic} with Our New Guide!"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn valid_reply() -> serde_json::Value {
        json!({
            "socialPosts": [
                { "post": "one", "hashtags": ["#a", "#b", "#c"] },
                { "post": "two", "hashtags": ["#a", "#b", "#c"] },
                { "post": "three", "hashtags": ["#a", "#b", "#c"] }
            ],
            "blogIdea": { "title": "Title", "summary": "Summary" },
            "emailSubject": "Subject"
        })
    }

    #[test]
    fn demo_campaign_for_coffee_has_expected_shape() {
        let c = demo_campaign("coffee");
        assert_eq!(c.social_posts.len(), 3);
        assert!(c.social_posts.iter().all(|p| p.hashtags.len() == 3));
        assert!(c.blog_idea.title.contains("coffee"));
        assert!(c.email_subject.contains("coffee"));
        assert_eq!(c.social_posts[0].hashtags[0], "#coffee");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn demo_campaign_serializes_camel_case() {
        let v = serde_json::to_value(demo_campaign("cold brew")).unwrap();
        assert!(v.get("socialPosts").is_some());
        assert!(v.get("blogIdea").is_some());
        assert!(v.get("emailSubject").is_some());
        assert_eq!(v["socialPosts"][1]["hashtags"][0], "#coldbrew");
    }

    #[test]
    fn prompt_embeds_topic_keywords_and_shape() {
        let p = campaign_prompt("Sustainable travel tips");
        assert!(p.contains("Primary Topic: \"Sustainable travel tips\""));
        assert!(p.contains("Key Concepts/Keywords: sustainable, travel, tips"));
        assert!(p.contains("\"socialPosts\": ["));
        assert!(p.contains("\"blogIdea\": {\"title\": \"...\", \"summary\": \"...\"}"));
    }

    #[test]
    fn parses_plain_json_reply() {
        let c = parse_campaign(&valid_reply().to_string()).unwrap();
        assert_eq!(c.social_posts.len(), 3);
        assert_eq!(c.email_subject, "Subject");
    }

    #[test]
    fn parses_fenced_json_reply() {
        let text = format!("```json\n{}\n```", valid_reply());
        assert!(parse_campaign(&text).is_ok());
        let text = format!("  ```\n{}\n```  \n", valid_reply());
        assert!(parse_campaign(&text).is_ok());
    }

    #[test]
    fn prose_reply_is_parse_error() {
        let err = parse_campaign("Sure! Here is your campaign plan.").unwrap_err();
        assert!(matches!(err, CampaignError::Parse(_)));
    }

    #[test]
    fn missing_key_is_parse_error() {
        let mut v = valid_reply();
        v.as_object_mut().unwrap().remove("emailSubject");
        let err = parse_campaign(&v.to_string()).unwrap_err();
        assert!(matches!(err, CampaignError::Parse(_)));
    }

    #[test]
    fn wrong_hashtag_count_is_shape_error() {
        let mut v = valid_reply();
        v["socialPosts"][2]["hashtags"] = json!(["#a", "#b"]);
        let err = parse_campaign(&v.to_string()).unwrap_err();
        match err {
            CampaignError::Shape(msg) => assert!(msg.contains("socialPosts[2]"), "{msg}"),
            other => panic!("expected Shape, got {other:?}"),
        }
    }

    #[test]
    fn empty_posts_is_shape_error() {
        let mut v = valid_reply();
        v["socialPosts"] = json!([]);
        assert!(matches!(
            parse_campaign(&v.to_string()),
            Err(CampaignError::Shape(_))
        ));
    }
}
