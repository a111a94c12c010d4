use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use std::sync::Arc;

/// Input schema for an MCP tool with every subschema inlined.
///
/// rmcp's default `schema_for_type()` emits `$ref` definitions; inlining them
/// lets clients render industry and function parameters as dropdowns of slugs.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];

    let schema = settings.into_generator().into_root_schema_for::<T>();
    // Request structs always produce object schemas; a boolean `true` schema
    // accepts anything, which `{}` also does.
    Arc::new(schema.as_object().cloned().unwrap_or_default())
}
