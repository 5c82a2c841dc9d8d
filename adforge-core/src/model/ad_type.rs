//! Ad format tag passed along with a design for rule specialization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Kind of ad a design is built for.
///
/// Layout rules receive it but do not branch on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdType {
    SocialMedia,
    Display,
    Banner,
    Story,
    LandingPage,
}

impl AdType {
    /// All known ad types.
    pub const ALL: [AdType; 5] = [
        AdType::SocialMedia,
        AdType::Display,
        AdType::Banner,
        AdType::Story,
        AdType::LandingPage,
    ];

    /// Kebab-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdType::SocialMedia => "social-media",
            AdType::Display => "display",
            AdType::Banner => "banner",
            AdType::Story => "story",
            AdType::LandingPage => "landing-page",
        }
    }
}

impl FromStr for AdType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        AdType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| AdvisorError::InvalidAdType {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for AdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
