//! Compiled-in recommendation content.
//!
//! Result keys form a closed set: markup can be checked against [`ResultKey`] at load time, and
//! [`resolve`] stays total for keys that arrive from anywhere else.

mod results;
mod services;

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub cost: &'static str,
    pub best_for: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

impl Service {
    /// The call-to-action target, if one is configured.
    pub fn call_to_action(&self) -> Option<&'static str> {
        self.link.filter(|link| !link.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultData {
    pub title: &'static str,
    pub description: &'static str,
    pub services: &'static [Service],
}

/// Shown for any key the catalog does not know.
pub static NOT_FOUND: ResultData = ResultData {
    title: "Recommendation Not Found",
    description: "Please try the decision tree again or contact support.",
    services: &[],
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub pricing: &'static str,
    pub use_cases: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown result key: {0}")]
pub struct UnknownResultKey(pub String);

macro_rules! result_keys {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResultKey {
            $($variant),+
        }

        impl ResultKey {
            pub const ALL: &'static [ResultKey] = &[$(ResultKey::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ResultKey::$variant => $key),+
                }
            }
        }

        impl FromStr for ResultKey {
            type Err = UnknownResultKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(ResultKey::$variant),)+
                    other => Err(UnknownResultKey(other.to_string())),
                }
            }
        }
    };
}

result_keys! {
    OpensearchBasic => "opensearch-basic",
    OpensearchEnterprise => "opensearch-enterprise",
    BedrockKnowledgeBase => "bedrock-knowledge-base",
    BedrockEnterpriseRag => "bedrock-enterprise-rag",
    OpensearchRag => "opensearch-rag",
    PersonalizationService => "personalization-service",
    ContentRecommendations => "content-recommendations",
    CustomRecommendations => "custom-recommendations",
    ImageSimilarity => "image-similarity",
    TextSimilarity => "text-similarity",
    BehaviorSimilarity => "behavior-similarity",
    ImageSearch => "image-search",
    VideoSearch => "video-search",
    MultimodalSearch => "multimodal-search",
    CodeSemanticSearch => "code-semantic-search",
    DocumentationSearch => "documentation-search",
    CodeSimilarity => "code-similarity",
    WebsiteChatbot => "website-chatbot",
    CustomerSupportRag => "customer-support-rag",
    PublicKnowledgeRag => "public-knowledge-rag",
    LegalRag => "legal-rag",
    MedicalRag => "medical-rag",
    TechnicalRag => "technical-rag",
}

impl ResultKey {
    pub fn data(self) -> &'static ResultData {
        results::lookup(self)
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResultKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Looks up the recommendation for a key. Never fails: unknown keys get [`NOT_FOUND`].
pub fn resolve(key: &str) -> &'static ResultData {
    key.parse::<ResultKey>()
        .map(ResultKey::data)
        .unwrap_or(&NOT_FOUND)
}

pub fn service_detail(id: &str) -> Option<&'static ServiceDetail> {
    services::lookup(id)
}
