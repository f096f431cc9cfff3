//! Inspection request assembly

use crate::types::{
    ByteContentItem, BytesType, ContentItem, CustomDictionary, ExclusionRule, InfoType,
    InspectConfig, InspectContentRequest, InspectionRule, InspectionRuleSet, Likelihood,
    MatchingType, WordList,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Default detection categories
pub const DEFAULT_INFO_TYPES: [&str; 4] = [
    "EMAIL_ADDRESS",
    "DOMAIN_NAME",
    "PHONE_NUMBER",
    "PERSON_NAME",
];

/// Location-scoped resource path for a project
pub fn parent_path(project_id: &str) -> String {
    format!("projects/{}/locations/global", project_id)
}

/// Builds `content:inspect` request bodies
///
/// The defaults reproduce the standard exclusion-dictionary request: the four
/// [`DEFAULT_INFO_TYPES`] categories, quotes included, no likelihood floor.
/// Category set and likelihood floor are configurable at construction so call
/// sites never change when the defaults do not fit.
#[derive(Debug, Clone)]
pub struct InspectRequestBuilder {
    info_types: Vec<InfoType>,
    include_quote: bool,
    min_likelihood: Option<Likelihood>,
}

impl InspectRequestBuilder {
    /// Builder with the default categories
    pub fn new() -> Self {
        Self {
            info_types: DEFAULT_INFO_TYPES.iter().copied().map(InfoType::new).collect(),
            include_quote: true,
            min_likelihood: None,
        }
    }

    /// Replace the detection categories
    pub fn info_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info_types = names.into_iter().map(InfoType::new).collect();
        self
    }

    /// Set a minimum likelihood floor for reported findings
    pub fn min_likelihood(mut self, likelihood: Likelihood) -> Self {
        self.min_likelihood = Some(likelihood);
        self
    }

    /// Control whether findings carry the matched quote
    pub fn include_quote(mut self, include: bool) -> Self {
        self.include_quote = include;
        self
    }

    /// Assemble the request body for one inspection
    ///
    /// `text` is carried as its exact UTF-8 bytes (base64 on the wire).
    /// `excluded_substrings` land in the dictionary verbatim: no dedup, no
    /// trimming, empty entries and an empty list are all legal. The exclusion
    /// rule is present even when the list is empty; it then matches nothing.
    pub fn build(&self, text: &str, excluded_substrings: &[String]) -> InspectContentRequest {
        let item = ContentItem {
            byte_item: ByteContentItem {
                bytes_type: BytesType::TextUtf8,
                data: BASE64.encode(text.as_bytes()),
            },
        };

        let exclusion_rule = ExclusionRule {
            matching_type: MatchingType::PartialMatch,
            dictionary: CustomDictionary {
                word_list: WordList {
                    words: excluded_substrings.to_vec(),
                },
            },
        };

        let rule_set = InspectionRuleSet {
            info_types: self.info_types.clone(),
            rules: vec![InspectionRule { exclusion_rule }],
        };

        InspectContentRequest {
            item,
            inspect_config: InspectConfig {
                info_types: self.info_types.clone(),
                include_quote: self.include_quote,
                rule_set: vec![rule_set],
                min_likelihood: self.min_likelihood,
            },
        }
    }
}

impl Default for InspectRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("proj-1"), "projects/proj-1/locations/global");
    }

    #[test]
    fn test_default_info_types_in_config_and_rule_set() {
        let request = InspectRequestBuilder::new().build("hello", &[]);

        let names: Vec<_> = request
            .inspect_config
            .info_types
            .iter()
            .map(|it| it.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["EMAIL_ADDRESS", "DOMAIN_NAME", "PHONE_NUMBER", "PERSON_NAME"]
        );

        // Rule set is scoped to the same categories.
        assert_eq!(request.inspect_config.rule_set.len(), 1);
        assert_eq!(
            request.inspect_config.rule_set[0].info_types,
            request.inspect_config.info_types
        );
    }

    #[test]
    fn test_text_round_trips_through_base64() {
        let text = "Contact jane@example.com (unicode: ünïcode)";
        let request = InspectRequestBuilder::new().build(text, &[]);

        let decoded = BASE64.decode(&request.item.byte_item.data).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), text);
        assert_eq!(request.item.byte_item.bytes_type, BytesType::TextUtf8);
    }

    #[test]
    fn test_excluded_words_pass_through_verbatim() {
        let words = vec![
            "jane@example.com".to_string(),
            "".to_string(),
            " spaced ".to_string(),
            "jane@example.com".to_string(),
        ];
        let request = InspectRequestBuilder::new().build("text", &words);

        let rule = &request.inspect_config.rule_set[0].rules[0].exclusion_rule;
        assert_eq!(rule.matching_type, MatchingType::PartialMatch);
        assert_eq!(rule.dictionary.word_list.words, words);
    }

    #[test]
    fn test_empty_exclusion_list_still_builds_rule() {
        let request = InspectRequestBuilder::new().build("text", &[]);

        let rules = &request.inspect_config.rule_set[0].rules;
        assert_eq!(rules.len(), 1);
        assert!(rules[0].exclusion_rule.dictionary.word_list.words.is_empty());
    }

    #[test]
    fn test_quote_requested_by_default() {
        let request = InspectRequestBuilder::new().build("text", &[]);
        assert!(request.inspect_config.include_quote);
    }

    #[test]
    fn test_custom_info_types() {
        let request = InspectRequestBuilder::new()
            .info_types(["CREDIT_CARD_NUMBER"])
            .build("text", &[]);

        assert_eq!(request.inspect_config.info_types.len(), 1);
        assert_eq!(
            request.inspect_config.info_types[0].name,
            "CREDIT_CARD_NUMBER"
        );
    }

    #[test]
    fn test_min_likelihood_omitted_by_default() {
        let request = InspectRequestBuilder::new().build("text", &[]);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["inspectConfig"].get("minLikelihood").is_none());

        let request = InspectRequestBuilder::new()
            .min_likelihood(Likelihood::Possible)
            .build("text", &[]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inspectConfig"]["minLikelihood"], "POSSIBLE");
    }
}
