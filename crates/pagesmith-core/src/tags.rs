//! Static tag catalog for landing-page components. Single source of truth
//! for the catalog engine and the AI tagging prompts; fixed at compile
//! time, never mutated.

/// Primary structural tags: the section a component plays on the page.
pub const PRIMARY_STRUCTURAL: &[&str] = &[
    "hero",
    "header",
    "footer",
    "navigation",
    "cta",
    "testimonials",
    "features",
    "pricing",
    "faq",
    "contact",
    "team",
    "stats",
    "newsletter",
    "banner",
    "gallery",
    "partners",
    "showcase",
    "process",
];

pub const COMPONENT_FUNCTION: &[&str] = &[
    "action-trigger",
    "data-display",
    "content-container",
    "form-element",
    "feedback",
    "navigation-element",
    "social-proof",
    "disclosure",
    "media-display",
    "state-indicator",
];

pub const CONTENT_TYPE: &[&str] = &[
    "text-heavy",
    "visual-dominant",
    "icon-based",
    "form",
    "interactive-element",
    "data-visualization",
    "mixed-media",
];

pub const STYLING_THEME: &[&str] = &[
    "minimalist",
    "bold",
    "dark-mode",
    "gradient",
    "glassmorphism",
    "neumorphic",
    "skeuomorphic",
    "flat-design",
    "animated",
    "gradient-border",
    "shadow-heavy",
    "rounded",
];

pub const TECHNICAL_BEHAVIOR: &[&str] = &[
    "responsive-mobile",
    "responsive-desktop",
    "interactive",
    "static",
    "dynamic-content",
    "lazy-loaded",
    "fixed-position",
    "sticky-element",
    "accessibility-optimized",
    "performance-critical",
];

pub const PLACEMENT_CONTEXT: &[&str] = &[
    "above-fold",
    "below-fold",
    "full-width",
    "container-bound",
    "floating-element",
    "section-divider",
    "overlay",
];

pub const MARKETING_PURPOSE: &[&str] = &[
    "lead-generation",
    "conversion-focused",
    "brand-awareness",
    "product-highlight",
    "trust-building",
    "engagement",
    "scarcity-timer",
];

pub const COMPONENT_COMPLEXITY: &[&str] = &[
    "simple",
    "composite",
    "animated-complex",
    "custom-integration",
    "theme-variant",
];

pub const AUDIENCE_STAGE: &[&str] = &[
    "awareness-stage",
    "consideration-stage",
    "decision-stage",
    "retention-focused",
];

/// Category name to tags, in declaration order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("primary", PRIMARY_STRUCTURAL),
    ("function", COMPONENT_FUNCTION),
    ("content", CONTENT_TYPE),
    ("style", STYLING_THEME),
    ("technical", TECHNICAL_BEHAVIOR),
    ("placement", PLACEMENT_CONTEXT),
    ("marketing", MARKETING_PURPOSE),
    ("complexity", COMPONENT_COMPLEXITY),
    ("audience", AUDIENCE_STAGE),
];

/// Recommended tag combination for a well-known component.
#[derive(Debug)]
pub struct ComponentTags {
    pub name: &'static str,
    pub primary: &'static str,
    pub recommended: &'static [&'static str],
}

pub const COMPONENT_TAGS: &[ComponentTags] = &[
    ComponentTags {
        name: "hero",
        primary: "hero",
        recommended: &[
            "visual-dominant",
            "action-trigger",
            "above-fold",
            "brand-awareness",
            "awareness-stage",
        ],
    },
    ComponentTags {
        name: "pricing",
        primary: "pricing",
        recommended: &[
            "content-container",
            "data-display",
            "interactive",
            "conversion-focused",
            "decision-stage",
        ],
    },
    ComponentTags {
        name: "testimonials",
        primary: "testimonials",
        recommended: &[
            "social-proof",
            "trust-building",
            "consideration-stage",
            "text-heavy",
            "media-display",
        ],
    },
    ComponentTags {
        name: "features",
        primary: "features",
        recommended: &[
            "content-container",
            "icon-based",
            "product-highlight",
            "consideration-stage",
        ],
    },
    ComponentTags {
        name: "cta",
        primary: "cta",
        recommended: &[
            "action-trigger",
            "conversion-focused",
            "simple",
            "decision-stage",
        ],
    },
    ComponentTags {
        name: "footer",
        primary: "footer",
        recommended: &[
            "navigation-element",
            "below-fold",
            "text-heavy",
            "full-width",
        ],
    },
    ComponentTags {
        name: "header",
        primary: "header",
        recommended: &[
            "navigation-element",
            "above-fold",
            "fixed-position",
            "responsive-mobile",
        ],
    },
    ComponentTags {
        name: "faq",
        primary: "faq",
        recommended: &[
            "disclosure",
            "text-heavy",
            "consideration-stage",
            "trust-building",
        ],
    },
    ComponentTags {
        name: "contact",
        primary: "contact",
        recommended: &["form-element", "lead-generation", "decision-stage"],
    },
];

/// Components every landing page should carry.
pub const ESSENTIAL_COMPONENTS: &[&str] = &["hero", "features", "cta"];

/// Focus area to the components that strengthen it.
pub const FOCUS_COMPONENTS: &[(&str, &[&str])] = &[
    ("conversion", &["pricing", "testimonials", "faq"]),
    ("trust", &["testimonials", "partners", "team"]),
    ("awareness", &["showcase", "stats", "gallery"]),
    ("engagement", &["newsletter", "contact", "process"]),
];

/// Categories a well-tagged page is expected to cover.
pub const IMPORTANT_CATEGORIES: &[&str] = &["function", "content", "technical"];
