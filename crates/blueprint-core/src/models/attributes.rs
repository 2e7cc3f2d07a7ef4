//! Classification enumerations attached to plan nodes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Area of work a node belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Architecture,
    Ui,
    Backend,
    Database,
    Security,
    Deployment,
    Testing,
    Marketing,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "architecture" => Ok(Category::Architecture),
            "ui" => Ok(Category::Ui),
            "backend" => Ok(Category::Backend),
            "database" => Ok(Category::Database),
            "security" => Ok(Category::Security),
            "deployment" => Ok(Category::Deployment),
            "testing" => Ok(Category::Testing),
            "marketing" => Ok(Category::Marketing),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Architecture => "architecture",
            Category::Ui => "ui",
            Category::Backend => "backend",
            Category::Database => "database",
            Category::Security => "security",
            Category::Deployment => "deployment",
            Category::Testing => "testing",
            Category::Marketing => "marketing",
        }
    }
}

/// How urgently a node should be scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Get priority with a leading marker for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blueprint_core::models::Priority;
    ///
    /// assert_eq!(Priority::Critical.with_icon(), "‼ Critical");
    /// assert_eq!(Priority::Low.with_icon(), "· Low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::Critical => "‼ Critical",
            Priority::High => "! High",
            Priority::Medium => "○ Medium",
            Priority::Low => "· Low",
        }
    }
}

/// Expected difficulty of a node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "moderate" => Ok(Complexity::Moderate),
            "complex" => Ok(Complexity::Complex),
            _ => Err(format!("Invalid complexity: {s}")),
        }
    }
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}
