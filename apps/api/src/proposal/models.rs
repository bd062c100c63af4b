//! Request / response types for proposal generation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

pub const MIN_TARGET_LENGTH: u32 = 150;
pub const MAX_TARGET_LENGTH: u32 = 450;
pub const DEFAULT_TARGET_LENGTH: u32 = 250;
/// Slider granularity on the client. Not enforced server-side.
pub const TARGET_LENGTH_STEP: u32 = 50;

/// Writing style selector. Drives the opening sentence.
///
/// Unknown tone strings deserialize to `Generic` rather than failing, so older
/// or custom clients still get a proposal with the fallback opening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Technical,
    #[serde(other)]
    Generic,
}

impl Tone {
    /// Tones offered to the user. `Generic` is fallback-only.
    pub const SELECTABLE: [Tone; 3] = [Tone::Professional, Tone::Conversational, Tone::Technical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Technical => "technical",
            Tone::Generic => "generic",
        }
    }
}

/// Freelance marketplace the proposal is addressed to.
///
/// Values outside the known set are kept verbatim in `Other` and echoed back
/// in the closing line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    Upwork,
    Fiverr,
    Freelancer,
    PeoplePerHour,
    Other(String),
}

impl Platform {
    /// Options offered by the form, ending with the catch-all "other".
    pub fn selectable() -> Vec<Platform> {
        vec![
            Platform::Upwork,
            Platform::Fiverr,
            Platform::Freelancer,
            Platform::PeoplePerHour,
            Platform::Other("other".to_string()),
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Upwork => "upwork",
            Platform::Fiverr => "fiverr",
            Platform::Freelancer => "freelancer",
            Platform::PeoplePerHour => "peopleperhour",
            Platform::Other(raw) => raw,
        }
    }
}

impl From<String> for Platform {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "upwork" => Platform::Upwork,
            "fiverr" => Platform::Fiverr,
            "freelancer" => Platform::Freelancer,
            "peopleperhour" => Platform::PeoplePerHour,
            _ => Platform::Other(raw),
        }
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Platform::from)
    }
}

/// Display bucket for a target word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthLabel {
    Short,
    Standard,
    Detailed,
    Comprehensive,
}

impl LengthLabel {
    pub fn for_length(words: u32) -> Self {
        match words {
            0..=150 => LengthLabel::Short,
            151..=250 => LengthLabel::Standard,
            251..=350 => LengthLabel::Detailed,
            _ => LengthLabel::Comprehensive,
        }
    }
}

/// A single proposal submission. Constructed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRequest {
    /// Missing URLs deserialize as empty so `validate` can reject them.
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub custom_instructions: Option<String>,
    #[serde(default)]
    pub target_length: Option<u32>,
}

impl ProposalRequest {
    pub fn target_length(&self) -> u32 {
        self.target_length.unwrap_or(DEFAULT_TARGET_LENGTH)
    }

    /// Custom instructions. Only an empty string counts as absent; whitespace is kept verbatim.
    pub fn custom_instructions(&self) -> Option<&str> {
        self.custom_instructions
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    pub fn length_label(&self) -> LengthLabel {
        LengthLabel::for_length(self.target_length())
    }

    /// Form-level checks run before a request reaches a backend.
    ///
    /// Platform membership of the URL is NOT checked here; that is the
    /// synthesizer's job and surfaces as a failed generation.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_url.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter a job URL to continue.".to_string(),
            ));
        }

        if let Some(words) = self.target_length {
            if !(MIN_TARGET_LENGTH..=MAX_TARGET_LENGTH).contains(&words) {
                return Err(AppError::Validation(format!(
                    "targetLength must be between {MIN_TARGET_LENGTH} and {MAX_TARGET_LENGTH} words (got {words})"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
impl ProposalRequest {
    pub fn new(job_url: impl Into<String>, tone: Tone, platform: Platform) -> Self {
        Self {
            job_url: job_url.into(),
            tone,
            platform,
            custom_instructions: None,
            target_length: None,
        }
    }

    pub fn with_target_length(mut self, words: u32) -> Self {
        self.target_length = Some(words);
        self
    }

    pub fn with_custom_instructions(mut self, text: impl Into<String>) -> Self {
        self.custom_instructions = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
    pub proposal_text: String,
    pub length_label: LengthLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "jobUrl": "https://www.upwork.com/jobs/~1",
            "tone": "technical",
            "platform": "fiverr",
            "customInstructions": "Mention my Rust work",
            "targetLength": 300
        });
        let request: ProposalRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.tone, Tone::Technical);
        assert_eq!(request.platform, Platform::Fiverr);
        assert_eq!(request.target_length(), 300);
        assert_eq!(request.custom_instructions(), Some("Mention my Rust work"));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = serde_json::json!({ "jobUrl": "https://www.fiverr.com/x" });
        let request: ProposalRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.platform, Platform::Upwork);
        assert_eq!(request.target_length(), DEFAULT_TARGET_LENGTH);
        assert!(request.custom_instructions().is_none());
    }

    #[test]
    fn test_unknown_tone_falls_back_to_generic() {
        let tone: Tone = serde_json::from_str(r#""pirate""#).unwrap();
        assert_eq!(tone, Tone::Generic);
    }

    #[test]
    fn test_unknown_platform_is_other() {
        let platform: Platform = serde_json::from_str(r#""toptal""#).unwrap();
        assert_eq!(platform, Platform::Other("toptal".to_string()));
        assert_eq!(serde_json::to_string(&platform).unwrap(), r#""toptal""#);
        let platform: Platform = serde_json::from_str(r#""peopleperhour""#).unwrap();
        assert_eq!(platform, Platform::PeoplePerHour);
    }

    #[test]
    fn test_only_empty_custom_instructions_are_absent() {
        let base = ProposalRequest::new("https://upwork.com/j", Tone::Professional, Platform::Upwork);
        assert!(base.clone().with_custom_instructions("").custom_instructions().is_none());
        assert_eq!(
            base.with_custom_instructions("   ").custom_instructions(),
            Some("   ")
        );
    }

    #[test]
    fn test_missing_job_url_fails_validation() {
        let request: ProposalRequest =
            serde_json::from_value(serde_json::json!({ "tone": "technical" })).unwrap();
        assert!(request.job_url.is_empty());
        match request.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Please enter a job URL to continue."),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_length_labels() {
        assert_eq!(LengthLabel::for_length(150), LengthLabel::Short);
        assert_eq!(LengthLabel::for_length(200), LengthLabel::Standard);
        assert_eq!(LengthLabel::for_length(250), LengthLabel::Standard);
        assert_eq!(LengthLabel::for_length(350), LengthLabel::Detailed);
        assert_eq!(LengthLabel::for_length(400), LengthLabel::Comprehensive);
    }

    #[test]
    fn test_validate_rejects_blank_url() {
        let request = ProposalRequest::new("  ", Tone::Professional, Platform::Upwork);
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_length() {
        let base = ProposalRequest::new("https://upwork.com/j", Tone::Professional, Platform::Upwork);
        assert!(base.clone().with_target_length(100).validate().is_err());
        assert!(base.clone().with_target_length(500).validate().is_err());
        assert!(base.clone().with_target_length(150).validate().is_ok());
        assert!(base.with_target_length(450).validate().is_ok());
    }

    #[test]
    fn test_validate_does_not_check_platform() {
        let request = ProposalRequest::new("https://example.com/job", Tone::Professional, Platform::Upwork);
        assert!(request.validate().is_ok());
    }
}
