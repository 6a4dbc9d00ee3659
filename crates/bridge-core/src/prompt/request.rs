use serde::Serialize;
use serde_json::Value;

use crate::args::ArgSpec;

/// Petición entregada al colaborador `Prompt`; se consume en la llamada.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    pub field_name: String,
    pub prompt_text: String,
    pub default_value: Option<Value>,
}

impl PromptRequest {
    pub fn for_field(spec: &ArgSpec) -> Self {
        Self { field_name: spec.name.clone(),
               prompt_text: spec.prompt_text(),
               default_value: spec.default.clone() }
    }
}
