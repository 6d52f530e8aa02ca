//! Rule-based tag recommendation engine over the static catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tags;

/// Immutable view over the catalog tables. Cheap to construct and safe to
/// share across threads; the underlying data is compile-time constant.
#[derive(Debug, Clone, Copy)]
pub struct TagCatalog {
    categories: &'static [(&'static str, &'static [&'static str])],
    components: &'static [tags::ComponentTags],
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A component descriptor as supplied by callers. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EssentialSections {
    pub hero: bool,
    pub cta: bool,
    pub footer: bool,
}

/// Result of a structural analysis. Always well-formed, even for empty or
/// unknown input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub component_count: usize,
    pub category_coverage: BTreeMap<String, usize>,
    pub missing_categories: Vec<String>,
    pub has_essential_sections: EssentialSections,
    pub suggestions: Vec<String>,
}

impl TagCatalog {
    pub fn builtin() -> Self {
        TagCatalog {
            categories: tags::CATEGORIES,
            components: tags::COMPONENT_TAGS,
        }
    }

    /// All tags across all categories, in declaration order.
    pub fn all_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .iter()
            .flat_map(|(_, tags)| tags.iter().copied())
    }

    /// Tags of a named category, or None for an unknown category.
    pub fn category(&self, name: &str) -> Option<&'static [&'static str]> {
        self.categories
            .iter()
            .find(|entry| entry.0 == name)
            .map(|entry| entry.1)
    }

    /// Recommended tags for a component name. Case-insensitive; tries an
    /// exact association, then a substring match in either direction, then a
    /// primary structural tag contained in the name. Unknown names yield an
    /// empty list.
    pub fn lookup(&self, component_name: &str) -> Vec<String> {
        let name = component_name.trim().to_lowercase();
        if name.is_empty() {
            return Vec::new();
        }
        if let Some(component) = self.components.iter().find(|c| c.name == name) {
            return Self::primary_and_recommended(component);
        }
        if let Some(component) = self
            .components
            .iter()
            .find(|c| name.contains(c.name) || c.name.contains(&name))
        {
            return Self::primary_and_recommended(component);
        }
        if let Some(primary) = self.category("primary") {
            if let Some(tag) = primary.iter().find(|t| name.contains(*t)) {
                return vec![tag.to_string()];
            }
        }
        Vec::new()
    }

    fn primary_and_recommended(component: &tags::ComponentTags) -> Vec<String> {
        std::iter::once(component.primary)
            .chain(component.recommended.iter().copied())
            .map(str::to_string)
            .collect()
    }

    /// Tags matching a query. A query naming a category returns that whole
    /// category; otherwise a case-insensitive substring search over all tags
    /// in declaration order.
    pub fn search(&self, query: &str) -> Vec<String> {
        let q = query.trim().to_lowercase();
        if let Some(tags) = self.category(&q) {
            return tags.iter().map(|t| t.to_string()).collect();
        }
        self.all_tags()
            .filter(|t| t.contains(q.as_str()))
            .map(str::to_string)
            .collect()
    }

    /// A deterministic component selection for a landing page: the essential
    /// components, then the focus area's components for a known focus, then
    /// the catalog order as filler, truncated to `count`. Never repeats a
    /// component.
    pub fn combinations(&self, count: usize, focus: Option<&str>) -> Vec<String> {
        let mut result: Vec<&str> = tags::ESSENTIAL_COMPONENTS.to_vec();
        if let Some(focus) = focus {
            let focus = focus.trim().to_lowercase();
            if let Some(entry) = tags::FOCUS_COMPONENTS.iter().find(|entry| entry.0 == focus) {
                for component in entry.1 {
                    if !result.contains(component) {
                        result.push(*component);
                    }
                }
            }
        }
        for component in self.components {
            if result.len() >= count {
                break;
            }
            if !result.contains(&component.name) {
                result.push(component.name);
            }
        }
        result.truncate(count);
        result.into_iter().map(str::to_string).collect()
    }

    /// Category-balanced tag set: the primary tag plus the first tag of each
    /// other category (skipping the primary's own category and any excluded
    /// ones) until `additional_count` extras are collected.
    pub fn tag_set(
        &self,
        primary_tag: &str,
        additional_count: usize,
        exclude_categories: &[&str],
    ) -> Vec<String> {
        let mut result = vec![primary_tag.to_string()];
        let primary_category = self
            .categories
            .iter()
            .find(|entry| entry.1.contains(&primary_tag))
            .map(|entry| entry.0);
        for (name, tags) in self.categories {
            if result.len() >= additional_count + 1 {
                break;
            }
            if Some(*name) == primary_category || exclude_categories.contains(name) {
                continue;
            }
            if let Some(first) = tags.first() {
                result.push(first.to_string());
            }
        }
        result
    }

    /// Structural analysis of an ordered component list: per-category tag
    /// coverage, zero-coverage categories, essential-section presence by
    /// name match, and improvement suggestions.
    pub fn analyze(&self, components: &[ComponentInfo]) -> StructureReport {
        let mut coverage: BTreeMap<String, usize> = self
            .categories
            .iter()
            .map(|(name, _)| (name.to_string(), 0))
            .collect();
        let mut sections = EssentialSections::default();

        for component in components {
            let name = component.name.trim().to_lowercase();
            sections.hero |= name.contains("hero");
            sections.cta |= name.contains("cta");
            sections.footer |= name.contains("footer");
            for tag in self.lookup(&name) {
                if let Some(entry) = self
                    .categories
                    .iter()
                    .find(|entry| entry.1.contains(&tag.as_str()))
                {
                    *coverage.entry(entry.0.to_string()).or_insert(0) += 1;
                }
            }
        }

        let missing_categories: Vec<String> = self
            .categories
            .iter()
            .filter(|entry| coverage.get(entry.0).copied().unwrap_or(0) == 0)
            .map(|entry| entry.0.to_string())
            .collect();

        let mut suggestions = Vec::new();
        if !sections.hero {
            suggestions.push("Add a Hero section at the top of the page".to_string());
        }
        if !sections.cta {
            suggestions.push("Add a CTA section to drive user action".to_string());
        }
        if !sections.footer {
            suggestions.push("Add a Footer section with navigation and contact links".to_string());
        }
        for category in tags::IMPORTANT_CATEGORIES.iter().copied() {
            if coverage.get(category).copied().unwrap_or(0) == 0 {
                let example = self
                    .category(category)
                    .and_then(|tags| tags.first())
                    .copied()
                    .unwrap_or("");
                suggestions.push(format!(
                    "No component covers the '{category}' category; consider adding one tagged '{example}'"
                ));
            }
        }

        StructureReport {
            component_count: components.len(),
            category_coverage: coverage,
            missing_categories,
            has_essential_sections: sections,
            suggestions,
        }
    }

    /// Consistency warnings over the static tables: duplicate tags and
    /// component associations referencing unknown tags.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = std::collections::BTreeSet::new();
        for tag in self.all_tags() {
            if !seen.insert(tag) {
                warnings.push(format!("duplicate tag in catalog: {tag}"));
            }
        }
        for component in self.components {
            for tag in std::iter::once(&component.primary).chain(component.recommended.iter()) {
                if !seen.contains(*tag) {
                    warnings.push(format!(
                        "component '{}' references unknown tag '{}'",
                        component.name, tag
                    ));
                }
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TagCatalog {
        TagCatalog::builtin()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(catalog().lookup("Hero"), catalog().lookup("hero"));
        assert_eq!(catalog().lookup("hero")[0], "hero");
    }

    #[test]
    fn lookup_matches_partial_names() {
        let tags = catalog().lookup("HeroSection");
        assert_eq!(tags[0], "hero");
        assert!(tags.contains(&"visual-dominant".to_string()));
    }

    #[test]
    fn lookup_falls_back_to_structural_tag() {
        // No "gallery" component association, but "gallery" is a primary tag.
        assert_eq!(catalog().lookup("ImageGallery"), vec!["gallery"]);
    }

    #[test]
    fn lookup_unknown_is_empty() {
        assert!(catalog().lookup("FluxCapacitor").is_empty());
        assert!(catalog().lookup("").is_empty());
    }

    #[test]
    fn search_by_category_name() {
        assert_eq!(catalog().search("audience").len(), 4);
    }

    #[test]
    fn search_by_substring_keeps_declaration_order() {
        let hits = catalog().search("stage");
        assert_eq!(
            hits,
            vec!["awareness-stage", "consideration-stage", "decision-stage"]
        );
    }

    #[test]
    fn combinations_for_conversion_focus() {
        let combo = catalog().combinations(5, Some("conversion"));
        assert_eq!(
            combo,
            vec!["hero", "features", "cta", "pricing", "testimonials"]
        );
    }

    #[test]
    fn combinations_never_repeat_and_cap_at_available() {
        let combo = catalog().combinations(100, None);
        let mut unique = combo.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), combo.len());
        assert_eq!(combo.len(), 9);
    }

    #[test]
    fn combinations_unknown_focus_uses_defaults() {
        assert_eq!(catalog().combinations(3, Some("zen")), vec!["hero", "features", "cta"]);
    }

    #[test]
    fn tag_set_is_category_balanced() {
        let set = catalog().tag_set("hero", 3, &[]);
        assert_eq!(set, vec!["hero", "action-trigger", "text-heavy", "minimalist"]);
    }

    #[test]
    fn tag_set_honors_exclusions() {
        let set = catalog().tag_set("hero", 2, &["function"]);
        assert_eq!(set, vec!["hero", "text-heavy", "minimalist"]);
    }

    #[test]
    fn analyze_suggests_missing_sections() {
        let components = vec![
            ComponentInfo { name: "Hero".to_string() },
            ComponentInfo { name: "Features".to_string() },
        ];
        let report = catalog().analyze(&components);
        assert_eq!(report.component_count, 2);
        assert!(report.has_essential_sections.hero);
        assert!(!report.has_essential_sections.cta);
        assert!(!report.has_essential_sections.footer);
        assert!(report.suggestions.iter().any(|s| s.contains("CTA")));
        assert!(report.suggestions.iter().any(|s| s.contains("Footer")));
        assert_eq!(report.category_coverage["function"], 2);
        assert!(report.missing_categories.contains(&"technical".to_string()));
    }

    #[test]
    fn analyze_empty_input_is_well_formed() {
        let report = catalog().analyze(&[]);
        assert_eq!(report.component_count, 0);
        assert!(report.category_coverage.values().all(|&n| n == 0));
        assert!(!report.has_essential_sections.hero);
        assert!(report.suggestions.len() >= 3);
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        assert!(catalog().validate().is_empty());
    }

    #[test]
    fn report_serializes_with_expected_keys() {
        let report = catalog().analyze(&[ComponentInfo { name: "Hero".to_string() }]);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["hasEssentialSections"]["hero"].as_bool().unwrap());
        assert!(value["categoryCoverage"].is_object());
    }
}
