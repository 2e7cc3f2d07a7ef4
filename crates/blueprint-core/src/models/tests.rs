use std::str::FromStr;

use crate::models::{
    Category, Complexity, FeatureTag, FeatureTags, Node, Phase, Plan, Priority,
};

fn create_test_node(id: &str, dependencies: &[&str]) -> Node {
    Node {
        id: id.to_string(),
        title: "Test Node Title".to_string(),
        description: "This is a test node description".to_string(),
        category: Category::Backend,
        priority: Priority::High,
        estimated_time: "1-2 weeks".to_string(),
        complexity: Complexity::Moderate,
        dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
        tools: vec!["Postman".to_string()],
        prompts: vec!["Build the backend for {idea}, then test {idea}.".to_string()],
        resources: vec!["https://example.com".to_string()],
    }
}

fn create_test_plan() -> Plan {
    let root = create_test_node("root", &[]);
    let child = create_test_node("child", &["root"]);

    let mut foundation = Phase::new(0, "Foundation");
    foundation.nodes.push(root.clone());
    let mut core = Phase::new(1, "Core Development");
    core.nodes.push(child.clone());

    Plan {
        idea_text: "A test idea".to_string(),
        description: "A test description".to_string(),
        tags: FeatureTags::default().with(FeatureTag::Web),
        nodes: vec![root, child],
        tech_stack: vec!["React".to_string(), "Docker".to_string()],
        timeline_estimate: "3-6 months".to_string(),
        budget_estimate: "$50,000".to_string(),
        team_roles: vec!["Developer".to_string(), "Designer".to_string()],
        phases: vec![foundation, core, Phase::new(2, "Testing & Deployment")],
    }
}

#[test]
fn test_render_prompts_replaces_every_placeholder() {
    let node = create_test_node("api", &[]);
    let rendered = node.render_prompts("a pet app");
    assert_eq!(
        rendered,
        vec!["Build the backend for a pet app, then test a pet app."]
    );
    // The template itself is untouched
    assert!(node.prompts[0].contains("{idea}"));
}

#[test]
fn test_enum_round_trip_through_str() {
    for category in [Category::Architecture, Category::Ui, Category::Marketing] {
        assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
    }
    assert_eq!(Priority::from_str("CRITICAL").unwrap(), Priority::Critical);
    assert_eq!(Complexity::from_str("complex").unwrap(), Complexity::Complex);
    assert_eq!(FeatureTag::from_str("e-commerce").unwrap(), FeatureTag::Ecommerce);
    assert!(Priority::from_str("urgent").is_err());
}

#[test]
fn test_feature_tags_get_and_set() {
    let mut tags = FeatureTags::default();
    assert!(tags.is_empty());

    tags.set(FeatureTag::Mobile, true);
    assert!(tags.get(FeatureTag::Mobile));
    assert!(tags.is_mobile_app);

    tags.set(FeatureTag::Mobile, false);
    assert!(tags.is_empty());
}

#[test]
fn test_feature_tags_serialize_field_names() {
    let json = serde_json::to_value(FeatureTags::default().with(FeatureTag::Ai)).unwrap();
    assert_eq!(json["is_ai"], true);
    assert_eq!(json["is_web_app"], false);
}

#[test]
fn test_plan_lookups() {
    let plan = create_test_plan();
    assert_eq!(plan.node_count(), 2);
    assert!(plan.node("child").is_some());
    assert!(plan.node("missing").is_none());
    assert_eq!(plan.phase_of("root"), Some(0));
    assert_eq!(plan.phase_of("child"), Some(1));
    assert_eq!(plan.phase_of("missing"), None);
}

#[test]
fn test_node_display() {
    let output = format!("{}", create_test_node("child", &["root"]));

    assert!(output.contains("### Test Node Title `child` (! High)"));
    assert!(output.contains("- Category: backend"));
    assert!(output.contains("- Depends on: root"));
    assert!(output.contains("#### Tools"));
    assert!(output.contains("#### Prompts"));
    assert!(output.contains("- https://example.com"));
}

#[test]
fn test_node_display_without_dependencies() {
    let output = format!("{}", create_test_node("root", &[]));
    assert!(!output.contains("Depends on"));
}

#[test]
fn test_feature_tags_display() {
    assert_eq!(FeatureTags::default().to_string(), "none detected");
    let tags = FeatureTags::default()
        .with(FeatureTag::Ai)
        .with(FeatureTag::Mobile);
    assert_eq!(tags.to_string(), "Mobile App, AI");
}

#[test]
fn test_plan_display() {
    let output = format!("{}", create_test_plan());

    assert!(output.starts_with("# Plan: A test idea"));
    assert!(output.contains("A test description"));
    assert!(output.contains("- Features: Web App"));
    assert!(output.contains("- Team: Developer, Designer"));
    assert!(output.contains("## Tech Stack"));
    assert!(output.contains("- React"));
    assert!(output.contains("## Phase 1: Foundation"));
    assert!(output.contains("## Phase 2: Core Development"));
    assert!(output.contains("## Phase 3: Testing & Deployment"));
    assert!(output.contains("No nodes in this phase."));

    let foundation = output.find("## Phase 1").unwrap();
    let root = output.find("`root`").unwrap();
    let core = output.find("## Phase 2").unwrap();
    let child = output.find("`child`").unwrap();
    assert!(foundation < root && root < core && core < child);
}
