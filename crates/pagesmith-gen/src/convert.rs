//! React-to-TypeScript component conversion.

use serde::{Deserialize, Serialize};

use crate::engine::Completion;
use crate::error::{CompletionError, Result};
use crate::extract;
use crate::prompt;

/// Metadata block the model is asked to append to a conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub props: Option<String>,
    #[serde(default)]
    pub props_file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvertedComponent {
    pub component: String,
    pub props: String,
    pub metadata: ComponentMetadata,
}

/// Converts React (shadcn-style) components to TypeScript with a separate
/// props file and a metadata block.
pub struct TsConverter {
    completion: Completion,
}

impl TsConverter {
    pub fn new(completion: Completion) -> Self {
        TsConverter { completion }
    }

    pub async fn convert(&self, component_code: &str) -> Result<ConvertedComponent> {
        tracing::info!("converting component to TypeScript");
        let user_prompt = prompt::convert_prompt(component_code);
        let raw = self
            .completion
            .complete(&user_prompt, Some(prompt::CONVERT_SYSTEM))
            .await?;

        let component = ["tsx", "typescript", "ts"]
            .iter()
            .find_map(|lang| extract::fenced_block(&raw, lang))
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CompletionError::Extraction {
                expected: "a TypeScript code block",
                reason: "no tsx/typescript/ts fence in the response".to_string(),
                raw: raw.clone(),
            })?;

        let props = extract::fenced_block(&raw, "ts").unwrap_or_default().to_string();

        let metadata = match extract::extract_json(&raw, &["name", "props", "props_file_name"]) {
            Ok(value) => serde_json::from_value(value).unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "no parsable metadata block, continuing without");
                ComponentMetadata::default()
            }
        };

        Ok(ConvertedComponent {
            component,
            props,
            metadata,
        })
    }
}
