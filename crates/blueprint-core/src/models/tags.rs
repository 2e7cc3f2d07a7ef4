//! Feature tags produced by idea classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One classification axis an idea can be tagged along.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeatureTag {
    /// Browser-delivered application
    Web,
    /// Native or cross-platform mobile application
    Mobile,
    /// Selling goods or taking payments
    Ecommerce,
    /// User-to-user interaction
    Social,
    /// Machine learning or model-backed features
    Ai,
}

impl FeatureTag {
    /// Every tag, in the order they are reported.
    pub const ALL: [FeatureTag; 5] = [
        FeatureTag::Web,
        FeatureTag::Mobile,
        FeatureTag::Ecommerce,
        FeatureTag::Social,
        FeatureTag::Ai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureTag::Web => "web",
            FeatureTag::Mobile => "mobile",
            FeatureTag::Ecommerce => "ecommerce",
            FeatureTag::Social => "social",
            FeatureTag::Ai => "ai",
        }
    }

    /// Human-readable label used in rendered plans.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureTag::Web => "Web App",
            FeatureTag::Mobile => "Mobile App",
            FeatureTag::Ecommerce => "E-commerce",
            FeatureTag::Social => "Social",
            FeatureTag::Ai => "AI",
        }
    }
}

impl FromStr for FeatureTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" => Ok(FeatureTag::Web),
            "mobile" => Ok(FeatureTag::Mobile),
            "ecommerce" | "e-commerce" => Ok(FeatureTag::Ecommerce),
            "social" => Ok(FeatureTag::Social),
            "ai" => Ok(FeatureTag::Ai),
            _ => Err(format!("Invalid feature tag: {s}")),
        }
    }
}

/// Boolean classification of an idea along every [`FeatureTag`] axis.
///
/// Tags are independent: any combination, including all-false, is valid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureTags {
    pub is_web_app: bool,
    pub is_mobile_app: bool,
    pub is_ecommerce: bool,
    pub is_social: bool,
    pub is_ai: bool,
}

impl FeatureTags {
    /// Returns whether the given tag is set.
    pub fn get(&self, tag: FeatureTag) -> bool {
        match tag {
            FeatureTag::Web => self.is_web_app,
            FeatureTag::Mobile => self.is_mobile_app,
            FeatureTag::Ecommerce => self.is_ecommerce,
            FeatureTag::Social => self.is_social,
            FeatureTag::Ai => self.is_ai,
        }
    }

    /// Sets or clears the given tag.
    pub fn set(&mut self, tag: FeatureTag, value: bool) {
        let slot = match tag {
            FeatureTag::Web => &mut self.is_web_app,
            FeatureTag::Mobile => &mut self.is_mobile_app,
            FeatureTag::Ecommerce => &mut self.is_ecommerce,
            FeatureTag::Social => &mut self.is_social,
            FeatureTag::Ai => &mut self.is_ai,
        };
        *slot = value;
    }

    /// Returns a copy with the given tag set.
    pub fn with(mut self, tag: FeatureTag) -> Self {
        self.set(tag, true);
        self
    }

    /// Tags that are set, in [`FeatureTag::ALL`] order.
    pub fn active(&self) -> Vec<FeatureTag> {
        FeatureTag::ALL
            .into_iter()
            .filter(|tag| self.get(*tag))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}
