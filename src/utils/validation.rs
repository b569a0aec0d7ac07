use crate::utils::error::{ImportError, Result};
use std::path::{Component, Path};
use url::Url;

pub const MAX_REQUEST_TIMEOUT_SECONDS: u64 = 120;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> ImportError {
    ImportError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The endpoint is a base URL that `/volumes?q=...` gets appended to, so it
/// must be http(s) with a host and carry no query or fragment of its own.
pub fn validate_catalog_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field_name, endpoint, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field_name,
                endpoint,
                format!("Unsupported URL scheme: {}", scheme),
            ))
        }
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, endpoint, "URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            endpoint,
            "Base URL cannot carry a query or fragment",
        ));
    }
    Ok(())
}

/// Paths are resolved against the storage root and must stay inside it.
pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    let parsed = Path::new(path);
    if parsed.is_absolute() || parsed.has_root() {
        return Err(invalid(
            field_name,
            path,
            "Path must be relative to the working directory",
        ));
    }
    if parsed.components().any(|c| c == Component::ParentDir) {
        return Err(invalid(
            field_name,
            path,
            "Path cannot leave the working directory",
        ));
    }
    Ok(())
}

/// Rejects any two entries pointing at the same file, e.g. an output path
/// that would overwrite the export being read.
pub fn validate_distinct_paths(paths: &[(&str, &str)]) -> Result<()> {
    for (i, (field, path)) in paths.iter().enumerate() {
        let normalized: Vec<Component> = Path::new(path)
            .components()
            .filter(|c| *c != Component::CurDir)
            .collect();
        for (other_field, other_path) in &paths[i + 1..] {
            let other: Vec<Component> = Path::new(other_path)
                .components()
                .filter(|c| *c != Component::CurDir)
                .collect();
            if normalized == other {
                return Err(invalid(
                    field,
                    path,
                    format!("Same file as '{}'", other_field),
                ));
            }
        }
    }
    Ok(())
}

pub fn validate_timeout(field_name: &str, seconds: u64) -> Result<()> {
    if !(1..=MAX_REQUEST_TIMEOUT_SECONDS).contains(&seconds) {
        return Err(invalid(
            field_name,
            seconds,
            format!(
                "Timeout must be between 1 and {} seconds",
                MAX_REQUEST_TIMEOUT_SECONDS
            ),
        ));
    }
    Ok(())
}
