//! Wire model for the DLP v2 content inspection API
//!
//! JSON shapes mirror the remote service's REST surface (camelCase fields,
//! SCREAMING_SNAKE enum values, base64 byte payloads). Response types are
//! read-only to this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named category of sensitive data the remote service can detect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoType {
    /// Category identifier, e.g. `EMAIL_ADDRESS`
    pub name: String,
}

impl InfoType {
    /// Create an info type by name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Encoding tag for a byte content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BytesType {
    /// UTF-8 encoded text
    #[serde(rename = "TEXT_UTF8")]
    TextUtf8,
}

/// Raw byte payload with an encoding tag
///
/// `data` is the base64 form of the original bytes; the service decodes it
/// back to the exact input, so content round-trips byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteContentItem {
    /// Encoding of `data`
    #[serde(rename = "type")]
    pub bytes_type: BytesType,
    /// Base64-encoded payload
    pub data: String,
}

/// Content submitted for inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Byte payload form of the content
    pub byte_item: ByteContentItem,
}

/// Dictionary word list for a custom rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordList {
    /// Words, passed through exactly as supplied by the caller
    pub words: Vec<String>,
}

/// Dictionary backing an exclusion rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDictionary {
    /// The word list
    pub word_list: WordList,
}

/// How a dictionary term must relate to a matched span to suppress it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchingType {
    /// Term must equal the full matched span
    #[serde(rename = "MATCHING_TYPE_FULL_MATCH")]
    FullMatch,
    /// Term contained anywhere inside the matched span suppresses it
    #[serde(rename = "MATCHING_TYPE_PARTIAL_MATCH")]
    PartialMatch,
}

/// Rule that suppresses findings whose matched text satisfies a dictionary
/// condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionRule {
    /// Containment semantics for dictionary terms
    pub matching_type: MatchingType,
    /// Terms to exclude
    pub dictionary: CustomDictionary,
}

/// One rule inside a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRule {
    /// The exclusion rule
    pub exclusion_rule: ExclusionRule,
}

/// Rules scoped to a set of info types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRuleSet {
    /// Info types the rules apply to
    pub info_types: Vec<InfoType>,
    /// The rules
    pub rules: Vec<InspectionRule>,
}

/// Inspection configuration sent with each request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectConfig {
    /// Categories to detect
    pub info_types: Vec<InfoType>,
    /// Ask the service to include the matched text in each finding
    pub include_quote: bool,
    /// Exclusion rule sets
    pub rule_set: Vec<InspectionRuleSet>,
    /// Minimum likelihood for a finding to be reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_likelihood: Option<Likelihood>,
}

/// Full request body for `content:inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectContentRequest {
    /// Content to inspect
    pub item: ContentItem,
    /// Inspection configuration
    pub inspect_config: InspectConfig,
}

/// Confidence ordinal the remote service assigns to each finding
///
/// Ordering follows the ordinal scale, `VeryUnlikely < ... < VeryLikely`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Likelihood {
    /// Likelihood not set by the service
    #[default]
    #[serde(rename = "LIKELIHOOD_UNSPECIFIED")]
    Unspecified,
    /// Very unlikely to be sensitive
    #[serde(rename = "VERY_UNLIKELY")]
    VeryUnlikely,
    /// Unlikely to be sensitive
    #[serde(rename = "UNLIKELY")]
    Unlikely,
    /// Possibly sensitive
    #[serde(rename = "POSSIBLE")]
    Possible,
    /// Likely sensitive
    #[serde(rename = "LIKELY")]
    Likely,
    /// Very likely sensitive
    #[serde(rename = "VERY_LIKELY")]
    VeryLikely,
}

impl Likelihood {
    /// Wire-format name of this likelihood
    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::Unspecified => "LIKELIHOOD_UNSPECIFIED",
            Likelihood::VeryUnlikely => "VERY_UNLIKELY",
            Likelihood::Unlikely => "UNLIKELY",
            Likelihood::Possible => "POSSIBLE",
            Likelihood::Likely => "LIKELY",
            Likelihood::VeryLikely => "VERY_LIKELY",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Likelihood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "LIKELIHOOD_UNSPECIFIED" | "UNSPECIFIED" => Ok(Likelihood::Unspecified),
            "VERY_UNLIKELY" => Ok(Likelihood::VeryUnlikely),
            "UNLIKELY" => Ok(Likelihood::Unlikely),
            "POSSIBLE" => Ok(Likelihood::Possible),
            "LIKELY" => Ok(Likelihood::Likely),
            "VERY_LIKELY" => Ok(Likelihood::VeryLikely),
            other => Err(format!("unknown likelihood: {}", other)),
        }
    }
}

/// One reported instance of detected sensitive content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Matched text, present when the request asked for quotes
    #[serde(default)]
    pub quote: String,
    /// Category the finding belongs to
    pub info_type: InfoType,
    /// Confidence ordinal
    #[serde(default)]
    pub likelihood: Likelihood,
}

/// Findings payload of a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectResult {
    /// Findings in service order
    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// Full response body for `content:inspect`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectContentResponse {
    /// Inspection result
    #[serde(default)]
    pub result: InspectResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likelihood_ordering() {
        assert!(Likelihood::VeryUnlikely < Likelihood::Possible);
        assert!(Likelihood::Possible < Likelihood::VeryLikely);
        assert!(Likelihood::Unspecified < Likelihood::VeryUnlikely);
    }

    #[test]
    fn test_likelihood_parse() {
        assert_eq!("LIKELY".parse::<Likelihood>().unwrap(), Likelihood::Likely);
        assert_eq!(
            "very-likely".parse::<Likelihood>().unwrap(),
            Likelihood::VeryLikely
        );
        assert!("bogus".parse::<Likelihood>().is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&MatchingType::PartialMatch).unwrap();
        assert_eq!(json, "\"MATCHING_TYPE_PARTIAL_MATCH\"");

        let json = serde_json::to_string(&BytesType::TextUtf8).unwrap();
        assert_eq!(json, "\"TEXT_UTF8\"");

        let json = serde_json::to_string(&Likelihood::VeryLikely).unwrap();
        assert_eq!(json, "\"VERY_LIKELY\"");
    }

    #[test]
    fn test_response_deserializes_camel_case() {
        let body = r#"{
            "result": {
                "findings": [
                    {
                        "quote": "jane@example.com",
                        "infoType": { "name": "EMAIL_ADDRESS" },
                        "likelihood": "LIKELY"
                    }
                ]
            }
        }"#;

        let resp: InspectContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.result.findings.len(), 1);
        assert_eq!(resp.result.findings[0].info_type.name, "EMAIL_ADDRESS");
        assert_eq!(resp.result.findings[0].likelihood, Likelihood::Likely);
    }

    #[test]
    fn test_empty_response_deserializes() {
        let resp: InspectContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.result.findings.is_empty());
    }

    #[test]
    fn test_finding_without_quote() {
        let body = r#"{ "infoType": { "name": "PERSON_NAME" }, "likelihood": "POSSIBLE" }"#;
        let finding: Finding = serde_json::from_str(body).unwrap();
        assert!(finding.quote.is_empty());
    }
}
