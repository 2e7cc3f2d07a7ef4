/// Ideas covering every combination of tags the scenarios care about.
pub const SAMPLE_IDEAS: [&str; 8] = [
    "A social media platform for pet owners",
    "AI-powered mobile app for language learning",
    "marketplace for handmade ecommerce goods",
    "Organize recipes",
    "An intelligent chat community for android and iOS with a web dashboard and payments",
    "a",
    "SHOP FOR VINTAGE WATCHES",
    "Machine learning pipeline monitoring portal",
];
