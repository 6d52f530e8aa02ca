//! Prompt assembly for the generation, tagging, and conversion flows.

use pagesmith_core::tags;
use serde_json::Value;

pub const GENERATION_SYSTEM: &str = "You are a data generation expert specializing in creating \
realistic JSON data that conforms to specific schemas.";

pub const LANDING_SYSTEM: &str = "You are a UI/UX expert specializing in landing page design.";

pub const CONVERT_SYSTEM: &str =
    "You are a TypeScript expert specializing in React component conversion.";

pub const ICON_SYSTEM: &str = "You are an expert at identifying React icons in component code.";

const JSON_ONLY: &str = "You must respond with valid JSON only, no other text. \
Ensure the response can be parsed as JSON.";

/// System prompt for JSON-shaped completions, optionally constraining the
/// response to a JSON Schema.
pub fn json_system_prompt(base: Option<&str>, schema: Option<&Value>) -> String {
    let mut out = String::new();
    if let Some(base) = base {
        out.push_str(base);
        out.push_str("\n\n");
    }
    out.push_str(JSON_ONLY);
    if let Some(schema) = schema {
        out.push_str("\n\nThe response must conform to this JSON Schema:\n");
        out.push_str(&serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string()));
    }
    out
}

pub fn generation_prompt(schemas: &[Value], instructions: &str, num_examples: usize) -> String {
    let schemas_str =
        serde_json::to_string_pretty(schemas).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Generate {num_examples} examples of JSON data that conform to the following schema(s):\n\n\
{schemas_str}\n\n\
Additional requirements: {instructions}\n\n\
Fill image assets with Unsplash stock images you know exist.\n\
Use icons for svgs or logos if the component requires them. Return icons as a JSON dict with \
fields 'package' (react-icons package name) and 'name' (icon name), e.g., \
{{'package': 'react-icons/fa', 'name': 'FaUser'}}. Only use known icons from react-icons.\n\n\
Return ONLY valid JSON data that matches the schema(s) provided. \
Format as a list of JSON objects, even if there's only one example."
    )
}

pub fn landing_prompt(components: &[String], count: usize) -> String {
    let list = serde_json::to_string(components).unwrap_or_else(|_| "[]".to_string());
    format!(
        "As a UI/UX expert, select at least {count} components in sequence for a landing page \
from the following list.\n\
Choose components that work well together for a modern, effective landing page.\n\
Format your response as a JSON array of strings containing only component names.\n\n\
Available components: {list}\n\n\
Remember to:\n\
1. Select at least {count} components\n\
2. Choose components that logically work together\n\
3. Return only a valid JSON array of component names\n\n\
JSON array:"
    )
}

pub fn convert_prompt(component_code: &str) -> String {
    format!(
        "Convert following react component code to typescript compatible code with proper props \
types and export statement.\n\
Convert any button to anchor tag with href prop and make href a required prop.\n\
Extract the user visible things like Text, Button, URL, Image, etc as props. Ensure that the \
component is compatible with TypeScript and follows best practices for type definitions.\n\
Create Props in separate file.\n\n\
{component_code}\n\n\
Also give json for component name and component props name in following format,\n\n\
{{\n\
\"name\": \"<component name>\",\n\
\"props\": \"<component props name>\",\n\
\"props_file_name\": \"<component props file name>\"\n\
}}\n"
    )
}

pub fn icon_prompt(original_code: &str, typescript_code: &str) -> String {
    format!(
        "Identify all icons used in the following React component code. \
Return a JSON array of objects with 'package' and 'name' for each icon. \
For example, if the component uses FaUser from react-icons/fa, return \
{{ \"package\": \"react-icons/fa\", \"name\": \"FaUser\" }}. \
Only include known icons from react-icons packages such as fa, md, io, bi, etc. \
If no icons are used, return an empty array.\n\n\
Original code:\n{original_code}\n\n\
TypeScript code:\n{typescript_code}"
    )
}

pub fn tag_analysis_prompt(component_name: &str, typescript_code: &str) -> String {
    format!(
        "Analyze the following React component code and identify the most appropriate tags \
for it. Return a JSON object with 'primary_tag' and 'additional_tags' keys. \
The primary tag should be one of the following structural tags:\n\
{}\n\n\
Additional tags should be selected from the following categories:\n\
- Function: {}\n\
- Content: {}\n\
- Style: {}\n\
- Technical: {}\n\n\
Component name: {component_name}\n\n\
Component code:\n{typescript_code}",
        tags::PRIMARY_STRUCTURAL.join(", "),
        tags::COMPONENT_FUNCTION.join(", "),
        tags::CONTENT_TYPE.join(", "),
        tags::STYLING_THEME.join(", "),
        tags::TECHNICAL_BEHAVIOR.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_system_prompt_keeps_base_first() {
        let out = json_system_prompt(Some("Base."), None);
        assert!(out.starts_with("Base."));
        assert!(out.contains("valid JSON only"));
    }

    #[test]
    fn json_system_prompt_embeds_schema() {
        let schema = json!({ "type": "object", "required": ["name"] });
        let out = json_system_prompt(None, Some(&schema));
        assert!(out.contains("JSON Schema"));
        assert!(out.contains("\"required\""));
    }

    #[test]
    fn generation_prompt_embeds_schema_and_count() {
        let out = generation_prompt(&[json!({ "type": "object" })], "use short names", 3);
        assert!(out.contains("Generate 3 examples"));
        assert!(out.contains("\"type\": \"object\""));
        assert!(out.contains("use short names"));
    }

    #[test]
    fn tag_analysis_prompt_lists_catalog_tags() {
        let out = tag_analysis_prompt("Hero", "const Hero = () => null;");
        assert!(out.contains("hero, header, footer"));
        assert!(out.contains("action-trigger"));
    }
}
