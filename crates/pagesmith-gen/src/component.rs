//! End-to-end component processing: conversion, icon extraction, tagging.

use pagesmith_core::catalog::TagCatalog;
use pagesmith_core::IconRef;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::convert::TsConverter;
use crate::engine::Completion;
use crate::error::Result;
use crate::postprocess;
use crate::prompt;

#[derive(Debug, Clone, Serialize)]
pub struct ComponentFile {
    pub name: String,
    pub code: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentTagSet {
    pub primary: String,
    pub additional: Vec<String>,
    pub all: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedComponent {
    pub component: ComponentFile,
    pub props: ComponentFile,
    pub icons: Vec<IconRef>,
    pub tags: ComponentTagSet,
    pub original_file: String,
}

/// Processes shadcn-style components: TypeScript conversion, icon
/// identification, and catalog-based tagging.
pub struct ComponentProcessor {
    completion: Completion,
    converter: TsConverter,
    catalog: TagCatalog,
}

impl ComponentProcessor {
    pub fn new(completion: Completion) -> Self {
        ComponentProcessor {
            converter: TsConverter::new(completion.clone()),
            completion,
            catalog: TagCatalog::builtin(),
        }
    }

    pub async fn process(
        &self,
        component_code: &str,
        file_path: &str,
    ) -> Result<ProcessedComponent> {
        tracing::info!(file = file_path, "processing component");
        let converted = self.converter.convert(component_code).await?;

        let stem = file_stem(file_path);
        let component_name = converted
            .metadata
            .name
            .clone()
            .unwrap_or_else(|| derive_component_name(file_path, component_code));
        let props_name = converted
            .metadata
            .props
            .clone()
            .unwrap_or_else(|| format!("{component_name}Props"));
        let props_file_name = converted
            .metadata
            .props_file_name
            .clone()
            .unwrap_or_else(|| format!("{stem}.props.ts"));

        let icons = self.extract_icons(component_code, &converted.component).await;
        let tags = self.tag_component(&component_name, &converted.component).await;

        tracing::info!(component = %component_name, "component processed");
        Ok(ProcessedComponent {
            component: ComponentFile {
                name: component_name,
                code: converted.component,
                file_name: format!("{stem}.tsx"),
            },
            props: ComponentFile {
                name: props_name,
                code: converted.props,
                file_name: props_file_name,
            },
            icons,
            tags,
            original_file: file_path.to_string(),
        })
    }

    /// Icons used by the component. Asks the model for a list constrained to
    /// the icon-reference schema; on failure, scans the code for common icon
    /// import patterns instead.
    async fn extract_icons(&self, original_code: &str, typescript_code: &str) -> Vec<IconRef> {
        let schema = serde_json::to_value(schemars::schema_for!(Vec<IconRef>)).ok();
        let user_prompt = prompt::icon_prompt(original_code, typescript_code);
        match self
            .completion
            .complete_json(&user_prompt, Some(prompt::ICON_SYSTEM), schema.as_ref())
            .await
        {
            Ok(value) => validated_icons(value),
            Err(err) => {
                tracing::warn!(error = %err, "icon identification failed, scanning code instead");
                scan_icons(original_code, typescript_code)
            }
        }
    }

    /// Tag a component: catalog lookup first, then model analysis of the
    /// code, then a balanced default set.
    async fn tag_component(&self, component_name: &str, typescript_code: &str) -> ComponentTagSet {
        let mut tags = self.catalog.lookup(component_name);

        if tags.is_empty() {
            match self.analyze_code_tags(component_name, typescript_code).await {
                Ok(found) => tags = found,
                Err(err) => {
                    tracing::warn!(error = %err, "code analysis for tagging failed")
                }
            }
        }

        if tags.is_empty() {
            tags = self.catalog.tag_set(&component_name.to_lowercase(), 3, &[]);
        }

        let primary = tags
            .first()
            .cloned()
            .unwrap_or_else(|| component_name.to_lowercase());
        let additional = tags.iter().skip(1).cloned().collect();
        ComponentTagSet {
            primary,
            additional,
            all: tags,
        }
    }

    async fn analyze_code_tags(
        &self,
        component_name: &str,
        typescript_code: &str,
    ) -> Result<Vec<String>> {
        let user_prompt = prompt::tag_analysis_prompt(component_name, typescript_code);
        let value = self.completion.complete_json(&user_prompt, None, None).await?;
        let mut tags = Vec::new();
        if let Some(primary) = value.get("primary_tag").and_then(Value::as_str) {
            if !primary.is_empty() {
                tags.push(primary.to_string());
                if let Some(additional) = value.get("additional_tags").and_then(Value::as_array) {
                    tags.extend(additional.iter().filter_map(Value::as_str).map(str::to_string));
                }
            }
        }
        Ok(tags)
    }
}

fn validated_icons(value: Value) -> Vec<IconRef> {
    let items = match value {
        Value::Array(items) => items,
        // Some responses wrap the list: {"icons": [...]}.
        Value::Object(mut map) => match map.remove("icons") {
            Some(Value::Array(items)) => items,
            _ => {
                tracing::warn!("unexpected icon extraction result shape");
                return Vec::new();
            }
        },
        _ => {
            tracing::warn!("unexpected icon extraction result shape");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<IconRef>(item).ok())
        .collect()
}

/// Regex fallback over the raw and converted code for icon imports and
/// JSX usages.
fn scan_icons(original_code: &str, typescript_code: &str) -> Vec<IconRef> {
    let code = format!("{original_code}\n{typescript_code}");
    let mut icons = Vec::new();

    if let Ok(re) = Regex::new(
        r#"import\s+\{\s*([A-Z][a-zA-Z0-9]*Icon[a-zA-Z0-9]*)\s*\}\s*from\s*['"]([^'"]+)['"]"#,
    ) {
        for cap in re.captures_iter(&code) {
            icons.push(IconRef {
                name: cap[1].to_string(),
                package: cap[2].to_string(),
            });
        }
    }
    if let Ok(re) = Regex::new(
        r#"import\s+\{\s*([A-Z][a-zA-Z0-9]*)\s*\}\s*from\s*['"]react-icons/([^'"]+)['"]"#,
    ) {
        for cap in re.captures_iter(&code) {
            icons.push(IconRef {
                name: cap[1].to_string(),
                package: format!("react-icons/{}", &cap[2]),
            });
        }
    }
    if let Ok(re) = Regex::new(r"<([A-Z][a-zA-Z0-9]*Icon[a-zA-Z0-9]*)[\s/>]") {
        for cap in re.captures_iter(&code) {
            let name = cap[1].to_string();
            let package = guess_icon_package(&name);
            icons.push(IconRef { name, package });
        }
    }
    icons
}

fn guess_icon_package(name: &str) -> String {
    for (prefix, package) in [
        ("Fa", "react-icons/fa"),
        ("Md", "react-icons/md"),
        ("Io", "react-icons/io"),
        ("Bi", "react-icons/bi"),
    ] {
        if name.starts_with(prefix) {
            return package.to_string();
        }
    }
    "unknown".to_string()
}

/// Component name from the file path, or from an exported declaration in
/// the source as a fallback.
fn derive_component_name(file_path: &str, component_code: &str) -> String {
    let stem = file_stem(file_path);
    if stem.contains('-') || stem.contains('_') {
        return stem
            .split(['-', '_'])
            .map(postprocess::capitalize)
            .collect();
    }
    if let Ok(re) = Regex::new(r"(?:export\s+)?(?:const|function|class)\s+([A-Z][a-zA-Z0-9]+)") {
        if let Some(cap) = re.captures(component_code) {
            return cap[1].to_string();
        }
    }
    postprocess::capitalize(&stem)
}

fn file_stem(file_path: &str) -> String {
    std::path::Path::new(file_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_pascal_case_from_kebab_path() {
        assert_eq!(
            derive_component_name("components/hero-banner.jsx", ""),
            "HeroBanner"
        );
        assert_eq!(
            derive_component_name("snake_case_card.jsx", ""),
            "SnakeCaseCard"
        );
    }

    #[test]
    fn derives_name_from_export_declaration() {
        let code = "export const PricingTable = () => <div />;";
        assert_eq!(derive_component_name("widget.jsx", code), "PricingTable");
    }

    #[test]
    fn falls_back_to_capitalized_stem() {
        assert_eq!(derive_component_name("banner.jsx", "no exports here"), "Banner");
    }

    #[test]
    fn scan_finds_react_icons_imports() {
        let code = r#"import { FaUser } from 'react-icons/fa';
const X = () => <FaUser />;"#;
        let icons = scan_icons(code, "");
        assert!(icons.iter().any(|i| i.name == "FaUser" && i.package == "react-icons/fa"));
    }

    #[test]
    fn scan_guesses_package_from_jsx_prefix() {
        let code = "const X = () => <MdHomeIcon />;";
        let icons = scan_icons("", code);
        assert!(icons.iter().any(|i| i.name == "MdHomeIcon" && i.package == "react-icons/md"));
    }

    #[test]
    fn validated_icons_accepts_wrapped_lists() {
        let value = serde_json::json!({
            "icons": [
                { "package": "react-icons/fa", "name": "FaUser" },
                { "package": "react-icons/md" }
            ]
        });
        let icons = validated_icons(value);
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].name, "FaUser");
    }

    #[test]
    fn validated_icons_rejects_non_lists() {
        assert!(validated_icons(serde_json::json!("FaUser")).is_empty());
    }
}
