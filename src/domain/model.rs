use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical RxNorm concept id (RxCUI) for a drug name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of looking up one drug name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Identifier),
    NotFound,
    ServiceError,
}

impl Resolution {
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Resolution::Found(id) => Some(id),
            Resolution::NotFound | Resolution::ServiceError => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionPair {
    pub severity: String,
    pub description: String,
    pub comment: String,
}

/// `Pairs(vec![])` means the service answered and knows no interaction;
/// `Failed` means no answer could be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Pairs(Vec<InteractionPair>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub severity: String,
    pub explanations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Error,
    NotFound,
    NoInteraction,
    Interaction,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Error => "error",
            OutcomeStatus::NotFound => "not_found",
            OutcomeStatus::NoInteraction => "no_interaction",
            OutcomeStatus::Interaction => "interaction",
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the presentation layer needs for one checked pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub status: OutcomeStatus,
    pub message: String,
    pub drug_a: String,
    pub drug_b: String,
    pub interaction: Option<AggregatedResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-br",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            other => Err(format!(
                "unsupported locale '{}', expected one of: en, pt-br",
                other
            )),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
