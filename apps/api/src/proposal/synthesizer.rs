//! Template synthesis — deterministic assembly of a proposal from canned paragraphs.
//!
//! Layout:
//!
//! ```text
//! {opening}\n\n{skills}{approach}{timeline}{custom}{closing}
//! ```
//!
//! `approach` and `timeline` are each prefixed with a paragraph break when present.
//! `custom` is always a paragraph break, wrapping the instructions when given.
//! The job URL is only checked for a supported platform domain; its content is never read.

use thiserror::Error;

use crate::proposal::models::{ProposalRequest, Tone, DEFAULT_TARGET_LENGTH};
use crate::proposal::templates::{
    APPROACH_SECTION, CLOSING_TEMPLATE, CUSTOM_SECTION_TEMPLATE, OPENING_CONVERSATIONAL,
    OPENING_GENERIC, OPENING_PROFESSIONAL, OPENING_TECHNICAL, SKILLS_SECTION, TIMELINE_SECTION,
};

/// Domains a job URL must contain (substring match) to be accepted.
pub const SUPPORTED_DOMAINS: &[&str] = &["upwork.com", "fiverr.com", "freelancer.com"];

/// Length factor above which the approach paragraph is included.
const APPROACH_THRESHOLD: f64 = 1.0;
/// Length factor above which the timeline paragraph is included.
const TIMELINE_THRESHOLD: f64 = 1.5;

const PARAGRAPH_BREAK: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid job URL from a supported platform")]
    UnsupportedJobUrl,
}

/// Returns true if the URL mentions one of the supported marketplace domains.
pub fn is_supported_job_url(job_url: &str) -> bool {
    SUPPORTED_DOMAINS.iter().any(|domain| job_url.contains(domain))
}

pub fn opening_for(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => OPENING_PROFESSIONAL,
        Tone::Conversational => OPENING_CONVERSATIONAL,
        Tone::Technical => OPENING_TECHNICAL,
        Tone::Generic => OPENING_GENERIC,
    }
}

/// Ratio of the requested length to the standard 250-word proposal.
fn length_factor(target_length: u32) -> f64 {
    f64::from(target_length) / f64::from(DEFAULT_TARGET_LENGTH)
}

/// Builds the proposal text for a request. Pure: same input, same bytes.
pub fn synthesize(request: &ProposalRequest) -> Result<String, ValidationError> {
    if !is_supported_job_url(&request.job_url) {
        return Err(ValidationError::UnsupportedJobUrl);
    }

    let factor = length_factor(request.target_length());

    let mut text = String::with_capacity(1024);
    text.push_str(opening_for(request.tone));
    text.push_str(PARAGRAPH_BREAK);
    text.push_str(SKILLS_SECTION);

    if factor > APPROACH_THRESHOLD {
        text.push_str(PARAGRAPH_BREAK);
        text.push_str(APPROACH_SECTION);
    }

    if factor > TIMELINE_THRESHOLD {
        text.push_str(PARAGRAPH_BREAK);
        text.push_str(TIMELINE_SECTION);
    }

    text.push_str(PARAGRAPH_BREAK);
    if let Some(instructions) = request.custom_instructions() {
        text.push_str(&CUSTOM_SECTION_TEMPLATE.replace("{instructions}", instructions));
        text.push_str(PARAGRAPH_BREAK);
    }

    text.push_str(&CLOSING_TEMPLATE.replace("{platform}", request.platform.as_str()));

    Ok(text)
}
