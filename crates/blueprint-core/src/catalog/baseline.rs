//! Baseline node templates present in every plan.

use super::{ids, NodeTemplate};
use crate::models::{Category, Complexity, Priority};

/// Baseline templates in authoring order. Each entry only depends on entries
/// above it, which keeps the baseline graph acyclic.
pub(super) static BASELINE: [NodeTemplate; 9] = [
    NodeTemplate {
        id: ids::SYSTEM_ARCHITECTURE,
        title: "System Architecture Design",
        description: "Define the overall system architecture, service boundaries, data flow and technology choices.",
        category: Category::Architecture,
        priority: Priority::Critical,
        estimated_time: "1-2 weeks",
        complexity: Complexity::Complex,
        dependencies: &[],
        tools: &["Draw.io", "Lucidchart", "Miro"],
        prompts: &[
            "Design a scalable system architecture for {idea}. Include service boundaries, data flow and the main technology choices.",
            "List the key architectural risks for {idea} and how to mitigate each one.",
        ],
        resources: &[
            "https://martinfowler.com/architecture/",
            "https://aws.amazon.com/architecture/well-architected/",
        ],
    },
    NodeTemplate {
        id: ids::DATABASE_SCHEMA,
        title: "Database Schema Design",
        description: "Model the core entities, relationships and indexes backing the application.",
        category: Category::Database,
        priority: Priority::Critical,
        estimated_time: "1 week",
        complexity: Complexity::Moderate,
        dependencies: &[ids::SYSTEM_ARCHITECTURE],
        tools: &["dbdiagram.io", "PostgreSQL", "Prisma"],
        prompts: &[
            "Design a normalized relational database schema for {idea}. Include tables, keys, relationships and indexes.",
            "Write the initial SQL migration for the core entities of {idea}.",
        ],
        resources: &[
            "https://www.postgresql.org/docs/current/ddl.html",
            "https://dbdiagram.io/docs",
        ],
    },
    NodeTemplate {
        id: ids::UI_DESIGN,
        title: "UI/UX Design",
        description: "Produce wireframes, user flows and a visual design system for the main screens.",
        category: Category::Ui,
        priority: Priority::High,
        estimated_time: "2-3 weeks",
        complexity: Complexity::Moderate,
        dependencies: &[ids::SYSTEM_ARCHITECTURE],
        tools: &["Figma", "Adobe XD", "Maze"],
        prompts: &[
            "Create user flows and wireframe descriptions for the main screens of {idea}.",
            "Propose a color palette, typography scale and spacing system for {idea}.",
        ],
        resources: &[
            "https://www.figma.com/resources/learn-design/",
            "https://m3.material.io/",
        ],
    },
    NodeTemplate {
        id: ids::COMPONENT_LIBRARY,
        title: "Component Library",
        description: "Build reusable, accessible UI components implementing the design system.",
        category: Category::Ui,
        priority: Priority::High,
        estimated_time: "2 weeks",
        complexity: Complexity::Moderate,
        dependencies: &[ids::UI_DESIGN],
        tools: &["Storybook", "Tailwind CSS", "Radix UI"],
        prompts: &[
            "Build a reusable, accessible component library for {idea} with buttons, forms, modals and navigation.",
        ],
        resources: &[
            "https://storybook.js.org/docs",
            "https://www.w3.org/WAI/ARIA/apg/",
        ],
    },
    NodeTemplate {
        id: ids::API_DEVELOPMENT,
        title: "API Development",
        description: "Implement the REST API endpoints, request validation and authentication.",
        category: Category::Backend,
        priority: Priority::Critical,
        estimated_time: "2-4 weeks",
        complexity: Complexity::Complex,
        dependencies: &[ids::DATABASE_SCHEMA],
        tools: &["Express", "Postman", "OpenAPI"],
        prompts: &[
            "Design RESTful API endpoints for {idea}, including request and response shapes and error codes.",
            "Implement authentication and authorization for the {idea} API.",
        ],
        resources: &[
            "https://swagger.io/specification/",
            "https://expressjs.com/en/guide/routing.html",
        ],
    },
    NodeTemplate {
        id: ids::BUSINESS_LOGIC,
        title: "Business Logic Implementation",
        description: "Implement the domain rules and workflows that make the product work.",
        category: Category::Backend,
        priority: Priority::High,
        estimated_time: "3-4 weeks",
        complexity: Complexity::Complex,
        dependencies: &[ids::API_DEVELOPMENT],
        tools: &["Node.js", "TypeScript", "Jest"],
        prompts: &[
            "Implement the core business workflows of {idea} as testable service functions.",
        ],
        resources: &["https://refactoring.guru/design-patterns"],
    },
    NodeTemplate {
        id: ids::SECURITY_HARDENING,
        title: "Security Hardening",
        description: "Review and harden authentication, input handling, secrets and transport security.",
        category: Category::Security,
        priority: Priority::High,
        estimated_time: "1-2 weeks",
        complexity: Complexity::Moderate,
        dependencies: &[ids::API_DEVELOPMENT],
        tools: &["OWASP ZAP", "Snyk", "Helmet"],
        prompts: &[
            "Perform a security review of {idea} against the OWASP Top 10 and list concrete fixes.",
            "Write a secrets management and key rotation plan for {idea}.",
        ],
        resources: &[
            "https://owasp.org/www-project-top-ten/",
            "https://cheatsheetseries.owasp.org/",
        ],
    },
    NodeTemplate {
        id: ids::TESTING_STRATEGY,
        title: "Testing Strategy",
        description: "Set up unit, integration and end-to-end testing with coverage targets.",
        category: Category::Testing,
        priority: Priority::High,
        estimated_time: "1-2 weeks",
        complexity: Complexity::Moderate,
        dependencies: &[ids::BUSINESS_LOGIC, ids::COMPONENT_LIBRARY],
        tools: &["Jest", "Playwright", "Cypress"],
        prompts: &[
            "Write a testing strategy for {idea} covering unit, integration and end-to-end tests.",
            "Generate end-to-end test scenarios for the critical user journeys of {idea}.",
        ],
        resources: &[
            "https://martinfowler.com/articles/practical-test-pyramid.html",
            "https://playwright.dev/docs/intro",
        ],
    },
    NodeTemplate {
        id: ids::DEPLOYMENT_PIPELINE,
        title: "Deployment Pipeline",
        description: "Containerize the application and automate build, test and release to the cloud.",
        category: Category::Deployment,
        priority: Priority::Medium,
        estimated_time: "1 week",
        complexity: Complexity::Moderate,
        dependencies: &[ids::TESTING_STRATEGY, ids::SECURITY_HARDENING],
        tools: &["Docker", "GitHub Actions", "AWS"],
        prompts: &[
            "Write a Dockerfile and a CI/CD pipeline that tests and deploys {idea} to the cloud.",
            "Describe a monitoring and rollback plan for production releases of {idea}.",
        ],
        resources: &[
            "https://docs.docker.com/get-started/",
            "https://docs.github.com/en/actions",
        ],
    },
];
