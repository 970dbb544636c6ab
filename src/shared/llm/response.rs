use schemars::gen::SchemaGenerator;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Model output types that degrade to a marked default instead of failing
pub trait LlmResponse: DeserializeOwned + Default + JsonSchema {
    fn mark_as_fallback(&mut self, error_message: String);

    fn is_success(&self) -> bool;

    /// Pretty JSON schema, embedded in prompts so the model knows the shape
    fn json_schema_string() -> String {
        let mut gen = SchemaGenerator::default();
        let schema = gen.root_schema_for::<Self>();
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
    }
}
