//! JSON Schema compilation and validation for configuration files.
//!
//! Schemas ship inside the crate and pin their `schema_version` with a
//! `const`. Loading extracts that version so callers can report it, then
//! compiles a validator that collects every violation instead of stopping at
//! the first one.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Compiled schema plus the version it pins.
pub(crate) struct CompiledSchema {
    pub schema_version: String,
    compiled: JSONSchema,
}

/// Parse and compile a schema document.
pub(crate) fn load_json_schema(name: &str, raw: &str) -> Result<CompiledSchema> {
    let schema: Value =
        serde_json::from_str(raw).map_err(|err| anyhow!("parsing schema {name}: {err}"))?;
    let schema_version = extract_schema_version(&schema)
        .ok_or_else(|| anyhow!("schema {name} missing schema_version const"))?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| anyhow!("compiling schema {name}: {err}"))?;
    Ok(CompiledSchema {
        schema_version,
        compiled,
    })
}

impl CompiledSchema {
    /// Validate `instance`, reporting all violations at once.
    pub fn validate(&self, instance: &Value, origin: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{origin} failed schema validation:\n{details}");
        }
        Ok(())
    }
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
