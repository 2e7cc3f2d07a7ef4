//! Tech stack inference from feature tags.

use std::collections::HashSet;

use crate::models::FeatureTags;

const WEB: &[&str] = &["React", "TypeScript", "Tailwind CSS"];
const MOBILE: &[&str] = &["React Native", "TypeScript", "Expo"];
const BACKEND: &[&str] = &["Node.js", "Express", "PostgreSQL"];
const AI: &[&str] = &["Python", "TensorFlow", "OpenAI API"];
const ECOMMERCE: &[&str] = &["Stripe", "Shopify API"];
const GENERIC: &[&str] = &["Docker", "GitHub Actions", "AWS"];

/// Recommended technologies for the given tags.
///
/// Groups are appended in the order web, mobile, backend, AI, ecommerce,
/// generic; the backend and generic groups are always present. Entries are
/// deduplicated keeping the first occurrence.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::{models::FeatureTags, stack::infer_tech_stack};
///
/// let stack = infer_tech_stack(&FeatureTags {
///     is_web_app: true,
///     is_mobile_app: true,
///     ..Default::default()
/// });
/// assert_eq!(&stack[..4], ["React", "TypeScript", "Tailwind CSS", "React Native"]);
/// assert_eq!(stack.iter().filter(|t| *t == "TypeScript").count(), 1);
/// ```
pub fn infer_tech_stack(tags: &FeatureTags) -> Vec<String> {
    let groups = [
        (tags.is_web_app, WEB),
        (tags.is_mobile_app, MOBILE),
        (true, BACKEND),
        (tags.is_ai, AI),
        (tags.is_ecommerce, ECOMMERCE),
        (true, GENERIC),
    ];

    let mut seen = HashSet::new();
    groups
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, entries)| entries.iter().copied())
        .filter(|entry| seen.insert(*entry))
        .map(str::to_string)
        .collect()
}
