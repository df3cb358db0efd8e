//! Load resolver output and write selection results.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;

use crate::core::invariants::validate_missing_deps;
use crate::model::{DepsToAdd, MissingDeps};

/// JSON Schema for the resolver's missing-dependency file.
pub const MISSING_DEPS_SCHEMA: &str =
    include_str!("../../../schemas/missing_deps/v1.schema.json");

/// Load and validate resolver output from disk (schema + invariants).
pub fn load_missing_deps(path: &Path) -> Result<MissingDeps> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_missing_deps(&contents).with_context(|| format!("load {}", path.display()))
}

/// Parse and validate resolver output from a JSON string.
pub fn parse_missing_deps(contents: &str) -> Result<MissingDeps> {
    let value: Value = serde_json::from_str(contents).context("parse missing deps json")?;
    validate_schema(&value)?;
    let missing: MissingDeps =
        serde_json::from_value(value).context("deserialize missing deps")?;
    let errors = validate_missing_deps(&missing);
    if !errors.is_empty() {
        return Err(anyhow!("invariant violations:\n- {}", errors.join("\n- ")));
    }
    Ok(missing)
}

/// Render selection results as pretty JSON with a trailing newline.
pub fn render_deps_to_add(deps: &DepsToAdd) -> Result<String> {
    let mut buf = serde_json::to_string_pretty(deps).context("serialize deps to add")?;
    buf.push('\n');
    Ok(buf)
}

/// Write selection results to `path`.
pub fn write_deps_to_add(path: &Path, deps: &DepsToAdd) -> Result<()> {
    let buf = render_deps_to_add(deps)?;
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(MISSING_DEPS_SCHEMA).context("parse missing deps schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(instance) {
        let messages = compiled
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "schema validation failed:\n- {}",
            messages.join("\n- ")
        ));
    }
    Ok(())
}
