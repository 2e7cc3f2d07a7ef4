//! Optional node templates injected when feature tags call for them.

use super::{ids, NodeTemplate};
use crate::models::{Category, Complexity, FeatureTag, Priority};

/// Conditional templates, in injection order, with the tag that enables each.
pub(super) static CONDITIONAL: [(FeatureTag, NodeTemplate); 2] = [
    (
        FeatureTag::Ai,
        NodeTemplate {
            id: ids::AI_INTEGRATION,
            title: "AI/ML Integration",
            description: "Integrate model inference, prompt pipelines and evaluation into the product.",
            category: Category::Backend,
            priority: Priority::High,
            estimated_time: "2-4 weeks",
            complexity: Complexity::Complex,
            dependencies: &[ids::API_DEVELOPMENT],
            tools: &["OpenAI API", "TensorFlow", "LangChain"],
            prompts: &[
                "Design the AI features of {idea}: which model calls are needed, their inputs, outputs and fallbacks.",
                "Write an evaluation plan for the AI output quality of {idea}.",
            ],
            resources: &[
                "https://platform.openai.com/docs",
                "https://www.tensorflow.org/learn",
            ],
        },
    ),
    (
        FeatureTag::Mobile,
        NodeTemplate {
            id: ids::MOBILE_DEVELOPMENT,
            title: "Mobile App Development",
            description: "Build the cross-platform mobile client on top of the shared design system.",
            category: Category::Ui,
            priority: Priority::High,
            estimated_time: "4-6 weeks",
            complexity: Complexity::Complex,
            dependencies: &[ids::UI_DESIGN],
            tools: &["React Native", "Expo", "Xcode", "Android Studio"],
            prompts: &[
                "Plan the mobile screens and navigation for {idea} using React Native.",
                "List the native device capabilities {idea} needs and how to request permissions for each.",
            ],
            resources: &[
                "https://reactnative.dev/docs/getting-started",
                "https://docs.expo.dev/",
            ],
        },
    ),
];
