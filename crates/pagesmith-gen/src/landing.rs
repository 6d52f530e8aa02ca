//! Landing-page component selection: a deterministic local catalog mode
//! plus an API-backed mode that falls back to the catalog on any failure.

use pagesmith_core::catalog::{ComponentInfo, StructureReport, TagCatalog};
use serde_json::Value;

use crate::engine::Completion;
use crate::error::Result;
use crate::prompt;

/// Components appended when a selection comes back short.
const DEFAULT_COMPONENTS: &[&str] = &["Hero", "Features", "Testimonials", "CTA", "Footer"];

pub struct TagFinder {
    completion: Option<Completion>,
    catalog: TagCatalog,
}

impl TagFinder {
    /// Purely local finder; every operation is deterministic.
    pub fn local() -> Self {
        TagFinder {
            completion: None,
            catalog: TagCatalog::builtin(),
        }
    }

    /// API-backed finder. Selection falls back to the local path on any
    /// completion failure.
    pub fn new(completion: Completion) -> Self {
        TagFinder {
            completion: Some(completion),
            catalog: TagCatalog::builtin(),
        }
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Select at least `count` components for a landing page. Never fails:
    /// without a provider, or when the provider errors, the local catalog
    /// recommendation is used.
    pub async fn find_tags(&self, components: &[String], count: usize) -> Vec<String> {
        if let Some(completion) = &self.completion {
            match self.find_tags_api(completion, components, count).await {
                Ok(tags) => return tags,
                Err(err) => {
                    tracing::warn!(error = %err, "completion failed, falling back to local catalog");
                }
            }
        }
        self.find_tags_local(components, count)
    }

    /// Deterministic local selection: known components from the input in
    /// their given order, filled from the catalog's default combination.
    pub fn find_tags_local(&self, components: &[String], count: usize) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        for component in components {
            if selected.len() >= count {
                break;
            }
            if self.catalog.lookup(component).is_empty() {
                continue;
            }
            if !selected.iter().any(|s| s.eq_ignore_ascii_case(component)) {
                selected.push(component.clone());
            }
        }
        for name in self.catalog.combinations(count, None) {
            if selected.len() >= count {
                break;
            }
            if !selected.iter().any(|s| s.eq_ignore_ascii_case(&name)) {
                selected.push(name);
            }
        }
        selected.truncate(count);
        selected
    }

    async fn find_tags_api(
        &self,
        completion: &Completion,
        components: &[String],
        count: usize,
    ) -> Result<Vec<String>> {
        tracing::info!(available = components.len(), count, "selecting landing page components");
        let user_prompt = prompt::landing_prompt(components, count);
        let result = completion
            .complete_json(&user_prompt, Some(prompt::LANDING_SYSTEM), None)
            .await?;

        let items = match result {
            Value::Array(items) => items,
            // Some responses wrap the array in an object; take its first
            // array value.
            Value::Object(map) => map
                .into_iter()
                .find_map(|(_, v)| match v {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        let mut tags: Vec<String> = items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();

        if tags.len() < count {
            tracing::warn!(got = tags.len(), want = count, "selection came back short, topping up");
            for default in DEFAULT_COMPONENTS {
                if tags.len() >= count {
                    break;
                }
                if !tags.iter().any(|t| t == default) {
                    tags.push((*default).to_string());
                }
            }
        }
        Ok(tags)
    }

    /// Recommended tags for a single component name.
    pub fn tags_for_component(&self, component_name: &str) -> Vec<String> {
        self.catalog.lookup(component_name)
    }

    /// Structural analysis of an ordered component list.
    pub fn analyze_structure(&self, components: &[ComponentInfo]) -> StructureReport {
        self.catalog.analyze(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mode_empty_input_returns_default_combination() {
        let finder = TagFinder::local();
        let tags = finder.find_tags_local(&[], 5);
        assert_eq!(tags, vec!["hero", "features", "cta", "pricing", "testimonials"]);
    }

    #[test]
    fn local_mode_keeps_known_components_first() {
        let finder = TagFinder::local();
        let input = vec![
            "Hero".to_string(),
            "Bogus".to_string(),
            "Pricing".to_string(),
        ];
        let tags = finder.find_tags_local(&input, 4);
        assert_eq!(tags, vec!["Hero", "Pricing", "features", "cta"]);
    }

    #[test]
    fn local_mode_never_duplicates() {
        let finder = TagFinder::local();
        let input = vec!["Hero".to_string(), "hero".to_string(), "HERO".to_string()];
        let tags = finder.find_tags_local(&input, 5);
        assert_eq!(tags.len(), 5);
        let lowered: std::collections::BTreeSet<String> =
            tags.iter().map(|t| t.to_lowercase()).collect();
        assert_eq!(lowered.len(), 5);
    }

    #[tokio::test]
    async fn find_tags_without_provider_never_fails() {
        let finder = TagFinder::local();
        let tags = finder.find_tags(&[], 5).await;
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn analysis_delegates_to_catalog() {
        let finder = TagFinder::local();
        let report = finder.analyze_structure(&[ComponentInfo { name: "Hero".into() }]);
        assert!(report.has_essential_sections.hero);
    }
}
