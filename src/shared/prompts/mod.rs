//! Prompt templates for the classification model.
//!
//! Templates are stored in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::Value;
use std::collections::HashMap;

use crate::features::reports::models::Severity;

/// Categories suggested to the model; it may still answer with another label
pub const SUGGESTED_CATEGORIES: [&str; 4] = [
    "Acoso",
    "Violación de Seguridad",
    "Corrupción",
    "Práctica Laboral Injusta",
];

/// Render the classifier system prompt.
///
/// # Arguments
/// * `json_schema` - JSON schema string for the expected output
pub fn render_classifier_prompt(json_schema: &str) -> Result<String, TemplateError> {
    let severities: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();

    let mut ctx: HashMap<&str, Value> = HashMap::new();
    ctx.insert("categories", Value::from(SUGGESTED_CATEGORIES.to_vec()));
    ctx.insert("severities", Value::from(severities));
    ctx.insert("json_schema", Value::from(json_schema));

    render_template("classifier/system.jinja", &ctx)
}
