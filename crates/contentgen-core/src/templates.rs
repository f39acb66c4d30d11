//! Prompt templates keyed by content type.
//!
//! The registry is a set of pure functions selected by an exhaustive `match`
//! over [`ContentType`]; nothing here is mutable at runtime.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::keywords::keywords_or_topic;

/// Caller-supplied prompts containing this marker bypass the registry.
pub const OVERRIDE_MARKER: &str = "Requirements:";

/// The closed set of content types with dedicated templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ContentType {
    #[strum(serialize = "blog-post")]
    BlogPost,
    #[strum(serialize = "social-media-post")]
    SocialMediaPost,
    #[strum(serialize = "email-newsletter")]
    EmailNewsletter,
    #[strum(serialize = "product-description")]
    ProductDescription,
    #[strum(serialize = "press-release")]
    PressRelease,
    #[strum(serialize = "ad-copy")]
    AdCopy,
    #[strum(serialize = "video-script")]
    VideoScript,
    #[strum(serialize = "landing-page")]
    LandingPage,
}

impl ContentType {
    /// Every supported tag, in registry order.
    pub fn tags() -> Vec<String> {
        Self::iter().map(|t| t.to_string()).collect()
    }

    /// Render this type's role-primed instruction.
    ///
    /// `keywords` may be empty, in which case the topic stands in for it.
    pub fn prompt(self, topic: &str, keywords: &str) -> String {
        let keywords = if keywords.is_empty() { topic } else { keywords };
        match self {
            ContentType::BlogPost => format!(
                "As a top-tier content strategist, generate a detailed and insightful blog post.

- **Main Topic:** \"{topic}\"
- **Key Concepts or Keywords:** {keywords}

Guidelines:
- Craft a compelling introduction that hooks readers.
- Structure with clear H2/H3 headings for each key idea.
- Use bullet points, examples, or mini-case studies for clarity.
- Make the writing engaging, authoritative, and SEO-friendly.
- End with a strong conclusion and actionable takeaways.
- Ensure all content is highly relevant to the topic and key concepts.

Produce a blog post that would stand out to both judges and users."
            ),
            ContentType::SocialMediaPost => format!(
                "As an expert social media copywriter, write an engaging, shareable post.

- **Platform:** [Specify if known, e.g. Twitter, LinkedIn, Instagram]
- **Topic/Campaign:** \"{topic}\"
- **Key Hashtags/Keywords:** {keywords}

Guidelines:
- Craft a catchy hook or question, optimized for engagement.
- Make the copy concise, impactful, and audience-appropriate.
- Weave in current trends, emojis, and 1-3 relevant hashtags.
- Content should be snappy, memorable, and drive action (like, share, comment).
- Context must be derived from the topic and only target relevant keywords.

Deliver a post that would capture attention on social media."
            ),
            ContentType::EmailNewsletter => format!(
                "As a professional email marketer, create a high-performing newsletter segment.

- **Topic/Primary Subject:** \"{topic}\"
- **Key Points/Keywords:** {keywords}

Instructions:
- Start with a personalized greeting and a strong subject line.
- Organize with introductory paragraph, main content in bullets or sections, and a clear call-to-action.
- Make tone friendly, informative, and trustworthy.
- Optimize for readability and engagement.
- Tailor content closely to the topic and keywords for maximum relevance.

Generate the email body and a recommended subject line."
            ),
            ContentType::ProductDescription => format!(
                "As a seasoned e-commerce copywriter, craft a persuasive product description.

- **Product Name/Topic:** \"{topic}\"
- **Unique Features/Keywords:** {keywords}

Guidelines:
- Create a standout headline and opening line.
- Emphasize unique selling points and benefits, not just features.
- Target the needs and desires of the ideal buyer.
- Format with short, impactful sentences, highlights, or lists.
- Ensure every line relates directly to the product context.

Write a description that excites and convinces customers to purchase."
            ),
            ContentType::PressRelease => format!(
                "As a professional PR specialist, draft a newsworthy press release.

- **Announcement Topic:** \"{topic}\"
- **Main Points/Keywords:** {keywords}

Instructions:
- Follow classic press release structure (headline, dateline, introduction, body, quote, boilerplate).
- Prioritize clarity, impact, and newsworthiness.
- Include a quote from a fictional company exec or spokesperson.
- Highlight why this matters and who benefits.
- Focus solely on the context of the topic/keywords.

Generate the press release for a professional audience."
            ),
            ContentType::AdCopy => format!(
                "As a creative ad copywriter, generate a high-converting advertisement.

- **Product/Service/Topic:** \"{topic}\"
- **Key Selling Points/Keywords:** {keywords}

Directions:
- Start with a bold headline or question.
- Deliver a concise, memorable pitch with a clear call to action.
- Use emotional triggers or urgency where appropriate.
- Format for quick reading (short lines, highlights).
- Context and keywords should shape the ad’s unique appeal.

Write ad copy that grabs attention and motivates immediate action."
            ),
            ContentType::VideoScript => format!(
                "As a talented scriptwriter, produce a compelling video script segment.

- **Video Theme/Topic:** \"{topic}\"
- **Core Message/Keywords:** {keywords}

Script guidelines:
- Open with a strong hook.
- Segue into key points, using a conversational, audience-focused tone.
- Include one or two brief lines for on-screen visuals or directions.
- Script should engage, inform, and drive the viewer to action.
- Ensure every line is contextually tailored to the input topic/key concepts.

Generate the script for a 1-2 minute video."
            ),
            ContentType::LandingPage => format!(
                "As an expert in landing page optimization, write persuasive landing page copy.

- **Offer/Topic:** \"{topic}\"
- **Core Benefits/Keywords:** {keywords}

Instructions:
- Write a bold headline, subheadline, and 2-3 high-impact sections.
- Use concise, benefit-driven language.
- Include bullet points, testimonials (fictional is fine), and a call-to-action.
- Copy should flow logically, leading visitors to take the target action.
- All content must closely relate to the topic and keywords.

Produce conversion-oriented landing page content."
            ),
        }
    }
}

/// Instruction used for content types the registry does not know.
pub fn generic_prompt(content_type: &str, topic: &str, keywords: &str) -> String {
    let keywords = if keywords.is_empty() { topic } else { keywords };
    format!(
        "Generate a {content_type} about \"{topic}\". Make it engaging, well-structured, \
         and professional. Key concepts: {keywords}."
    )
}

/// `true` when `content_type` is a detailed caller-supplied prompt.
pub fn is_override(content_type: &str) -> bool {
    content_type.contains(OVERRIDE_MARKER)
}

/// Compose the prompt for a `(content_type, topic)` pair.
///
/// Overrides are returned verbatim, known tags use their template, anything
/// else gets the generic instruction.
pub fn compose_prompt(content_type: &str, topic: &str) -> String {
    if is_override(content_type) {
        return content_type.to_owned();
    }
    let keywords = keywords_or_topic(topic);
    match content_type.parse::<ContentType>() {
        Ok(kind) => kind.prompt(topic, &keywords),
        Err(_) => generic_prompt(content_type, topic, &keywords),
    }
}

// ── Prompt brief ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Informative,
    Persuasive,
    Humorous,
}

impl Tone {
    pub fn all() -> Vec<String> {
        Self::iter().map(|t| t.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub fn all() -> Vec<String> {
        Self::iter().map(|l| l.to_string()).collect()
    }

    /// Target word range shown to the model.
    pub fn description(self) -> &'static str {
        match self {
            Length::Short => "100-200 words",
            Length::Medium => "300-500 words",
            Length::Long => "600-1000 words",
        }
    }
}

/// Content type, topic, tone and length rendered into an override prompt.
#[derive(Debug, Clone)]
pub struct PromptBrief<'a> {
    pub content_type: &'a str,
    pub topic: &'a str,
    pub tone: Tone,
    pub length: Length,
}

impl PromptBrief<'_> {
    /// The rendered prompt always carries [`OVERRIDE_MARKER`].
    pub fn render(&self) -> String {
        // Only the first dash is replaced: "social-media-post" reads
        // "social media-post".
        let label = self.content_type.replacen('-', " ", 1);
        format!(
            "Create a {length} {label} about \"{topic}\" with a {tone} tone.

Requirements:
- Length: {range}
- Tone: {tone}
- Format: Well-structured with appropriate headings and paragraphs
- Make it engaging and relevant to the target audience
- Include actionable insights where appropriate",
            length = self.length,
            topic = self.topic,
            tone = self.tone,
            range = self.length.description(),
        )
    }
}
