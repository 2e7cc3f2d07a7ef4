//! Feature classification of idea text.
//!
//! Classification sits behind the [`IdeaClassifier`] trait so the rest of the
//! pipeline (catalog, scheduler, assembler) only ever sees [`FeatureTags`].
//! The default [`KeywordClassifier`] is a case-insensitive substring matcher:
//! each tag is tested independently, so an idea can carry any combination of
//! tags.

use log::debug;

use crate::models::{FeatureTag, FeatureTags};

/// Strategy that maps idea text to feature tags.
pub trait IdeaClassifier: Send + Sync {
    /// Classify the given text. Must be deterministic.
    fn classify(&self, text: &str) -> FeatureTags;
}

/// Default keyword table, one row per tag.
const DEFAULT_KEYWORDS: [(FeatureTag, &[&str]); 5] = [
    (
        FeatureTag::Web,
        &[
            "web",
            "website",
            "platform",
            "marketplace",
            "dashboard",
            "portal",
            "saas",
        ],
    ),
    (FeatureTag::Mobile, &["mobile", "app", "ios", "android"]),
    (
        FeatureTag::Ecommerce,
        &[
            "ecommerce",
            "e-commerce",
            "shop",
            "store",
            "marketplace",
            "payment",
            "sell",
        ],
    ),
    (
        FeatureTag::Social,
        &["social", "community", "chat", "friends", "network", "share"],
    ),
    (
        FeatureTag::Ai,
        &[
            "ai",
            "machine learning",
            "intelligent",
            "artificial intelligence",
        ],
    ),
];

/// Substring-based classifier over a per-tag keyword table.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<(FeatureTag, Vec<String>)>,
}

impl KeywordClassifier {
    /// Creates a classifier with the default keyword table.
    pub fn new() -> Self {
        let keywords = DEFAULT_KEYWORDS
            .iter()
            .map(|(tag, words)| (*tag, words.iter().map(|w| (*w).to_string()).collect()))
            .collect();
        Self { keywords }
    }

    /// Adds an extra keyword for a tag. Keywords are stored lowercase.
    pub fn with_keyword(mut self, tag: FeatureTag, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into().to_lowercase();
        if keyword.is_empty() {
            return self;
        }
        if let Some((_, words)) = self.keywords.iter_mut().find(|(t, _)| *t == tag) {
            if !words.contains(&keyword) {
                words.push(keyword);
            }
        }
        self
    }

    /// Keywords that trigger the given tag.
    pub fn keywords_for(&self, tag: FeatureTag) -> &[String] {
        self.keywords
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> FeatureTags {
        let normalized = text.to_lowercase();
        let mut tags = FeatureTags::default();

        for (tag, words) in &self.keywords {
            if let Some(word) = words.iter().find(|w| normalized.contains(w.as_str())) {
                debug!("tag '{}' matched keyword '{}'", tag.as_str(), word);
                tags.set(*tag, true);
            }
        }

        tags
    }
}
