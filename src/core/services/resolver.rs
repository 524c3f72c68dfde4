//! Config resolver service - turns an optional configuration file into sections
//!
//! The file is YAML holding either one section or a list of sections:
//!
//! ```yaml
//! - terms: ⛔
//!   locations:
//!     - title
//!     - label
//! - terms:
//!     - fixup!
//!     - squash!
//!   locations: commit
//! ```
//!
//! Each field may be a scalar or a list. A missing or empty field is taken
//! from the default section, independently of the other field.

use serde_yaml::Value;

use crate::core::models::{Location, ResolvedConfig, Section};
use crate::core::ports::{ContentSource, FetchError};
use crate::error::{Result, WipError};

/// Resolve the sections for one pass
///
/// Without a path, or when the file does not exist, the built-in default
/// section is used. Any other fetch failure is fatal.
pub fn resolve(source: &dyn ContentSource, path: Option<&str>) -> Result<ResolvedConfig> {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        log::debug!("no configuration file configured, using defaults");
        return Ok(ResolvedConfig::builtin());
    };

    match fetch_config(source, path) {
        Ok(content) => resolve_content(&content),
        Err(WipError::ConfigNotFound(path)) => {
            log::debug!("configuration file {path} not found, using defaults");
            Ok(ResolvedConfig::builtin())
        },
        Err(e) => Err(e),
    }
}

/// Read the configuration file
///
/// A missing file is [`WipError::ConfigNotFound`]; any other failure is
/// [`WipError::ConfigFetch`].
pub fn fetch_config(source: &dyn ContentSource, path: &str) -> Result<String> {
    source.fetch_text(path).map_err(|e| match e {
        FetchError::NotFound(_) => WipError::ConfigNotFound(path.to_string()),
        FetchError::Other(e) => WipError::ConfigFetch {
            path: path.to_string(),
            message: format!("{e:#}"),
        },
    })
}

/// Resolve sections from configuration text that has already been read
pub fn resolve_content(content: &str) -> Result<ResolvedConfig> {
    match parse_sections(content)? {
        Some(sections) => {
            log::debug!("using custom configuration: {sections:?}");
            Ok(ResolvedConfig {
                sections,
                used_custom_config: true,
            })
        },
        None => {
            log::debug!("configuration file is empty, using defaults");
            Ok(ResolvedConfig::builtin())
        },
    }
}

/// Parse configuration text into sections
///
/// Returns `None` for an empty document (or an empty list), which callers
/// treat like a missing file.
pub fn parse_sections(content: &str) -> Result<Option<Vec<Section>>> {
    let value: Value = serde_yaml::from_str(content)
        .map_err(|e| WipError::ConfigParse(format!("invalid YAML: {e}")))?;

    let entries = match value {
        Value::Null => return Ok(None),
        Value::Sequence(items) if items.is_empty() => return Ok(None),
        Value::Sequence(items) => items,
        mapping @ Value::Mapping(_) => vec![mapping],
        Value::Tagged(tagged) => vec![tagged.value],
        other => {
            return Err(WipError::ConfigParse(format!(
                "expected a section or a list of sections, found {}",
                kind(&other)
            )));
        },
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_section(index, entry))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn parse_section(index: usize, entry: &Value) -> Result<Section> {
    let Value::Mapping(map) = entry else {
        return Err(WipError::ConfigParse(format!(
            "section #{} must be a mapping with `terms` and `locations`, found {}",
            index + 1,
            kind(entry)
        )));
    };

    let terms = string_list(map.get("terms"), "terms", index)?.unwrap_or_else(Section::default_terms);

    let locations = match string_list(map.get("locations"), "locations", index)? {
        Some(raw) => raw
            .iter()
            .map(|s| {
                s.parse::<Location>()
                    .map_err(|e| WipError::ConfigParse(format!("section #{}: {e}", index + 1)))
            })
            .collect::<Result<Vec<_>>>()?,
        None => Section::default_locations(),
    };

    Ok(Section::new(terms, locations))
}

/// Normalize a field to a list of strings
///
/// `None` means the field is absent or empty and the default applies.
fn string_list(value: Option<&Value>, field: &str, index: usize) -> Result<Option<Vec<String>>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Sequence(items)) => items.iter().collect::<Vec<_>>(),
        Some(scalar) => vec![scalar],
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match scalar_to_string(item) {
            Some(s) if s.is_empty() => {},
            Some(s) => out.push(s),
            None if item.is_null() => {},
            None => {
                return Err(WipError::ConfigParse(format!(
                    "section #{}: `{field}` entries must be scalars, found {}",
                    index + 1,
                    kind(item)
                )));
            },
        }
    }

    Ok(if out.is_empty() { None } else { Some(out) })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
