//! Schema-driven JSON data generation.

use serde_json::Value;

use crate::engine::Completion;
use crate::error::{CompletionError, Result};
use crate::postprocess;
use crate::prompt;

/// Generates realistic JSON data conforming to caller-supplied schemas,
/// then normalizes image and icon fields.
pub struct DataGenerator {
    completion: Completion,
}

impl DataGenerator {
    pub fn new(completion: Completion) -> Self {
        DataGenerator { completion }
    }

    /// Generate `num_examples` data items for the given JSON Schemas.
    /// Always returns a list, even when a single object was generated.
    pub async fn generate(
        &self,
        schemas: &[Value],
        instructions: &str,
        num_examples: usize,
    ) -> Result<Vec<Value>> {
        tracing::info!(schemas = schemas.len(), num_examples, "generating schema data");
        let user_prompt = prompt::generation_prompt(schemas, instructions, num_examples);
        let result = self
            .completion
            .complete_json(&user_prompt, Some(prompt::GENERATION_SYSTEM), None)
            .await?;

        let items = match result {
            Value::Array(items) => items,
            Value::Object(_) => vec![result],
            other => {
                return Err(CompletionError::Extraction {
                    expected: "a JSON object or array",
                    reason: format!("model returned a bare {}", value_kind(&other)),
                    raw: other.to_string(),
                })
            }
        };

        let processed: Vec<Value> = items.iter().map(postprocess::process).collect();
        tracing::info!(items = processed.len(), "generated schema data");
        Ok(processed)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
