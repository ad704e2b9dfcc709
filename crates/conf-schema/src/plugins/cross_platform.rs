//! Cross-platform executable documents.
//!
//! Like [`super::executable`], but an entry may give `windowsPath` and
//! `linuxPath` instead of one `path`, together with optional per-platform
//! argument lists. Platform-specific fields win over generic ones.
//!
//! The predicate is all-or-nothing: one entry breaking the path rule
//! disqualifies the whole document. Kept for compatibility with existing
//! documents even though a per-entry rejection would be more forgiving.

use conf_fs::RawDocument;
use conf_resolver::{ExecutableResolver, Platform};
use serde_json::{Map, Value as Json};

use super::executable::{self, FieldSelection};
use crate::validation::child;
use crate::{ParsedSection, Result, ValidationError, shape};

const WINDOWS_FIELDS: FieldSelection = FieldSelection {
    path: &["windowsPath", "path"],
    arguments: &["windowsArguments", "arguments"],
    debug_arguments: &["windowsDebugArguments", "debugArguments"],
};

const LINUX_FIELDS: FieldSelection = FieldSelection {
    path: &["linuxPath", "path"],
    arguments: &["linuxArguments", "arguments"],
    debug_arguments: &["linuxDebugArguments", "debugArguments"],
};

/// How an entry declares its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathStyle {
    /// `windowsPath` and `linuxPath`, no `path`.
    PlatformPair,
    /// `path`, without both platform paths.
    Generic,
    /// Anything else.
    Invalid,
}

fn path_style(obj: &Map<String, Json>) -> PathStyle {
    let pair = obj.contains_key("windowsPath") && obj.contains_key("linuxPath");
    let generic = obj.contains_key("path");
    match (pair, generic) {
        (true, false) => PathStyle::PlatformPair,
        (false, true) => PathStyle::Generic,
        _ => PathStyle::Invalid,
    }
}

/// Every entry is an object with a valid path style, and at least one entry
/// uses the platform pair.
pub fn matches(doc: &RawDocument) -> bool {
    let Some(entries) = shape::executable_entries(doc) else {
        return false;
    };

    let mut has_pair = false;
    for entry in &entries {
        let Some(obj) = entry.entry.as_object() else {
            return false;
        };
        match path_style(obj) {
            PathStyle::Invalid => return false,
            PathStyle::PlatformPair => has_pair = true,
            PathStyle::Generic => {}
        }
    }
    has_pair
}

pub fn parse(doc: &RawDocument, resolver: &ExecutableResolver) -> Result<ParsedSection> {
    executable::parse_with(doc, resolver, fields_for(resolver.platform()))
}

pub fn validate(doc: &RawDocument, _resolver: &ExecutableResolver) -> Vec<ValidationError> {
    executable::validate_entries(doc, |at, obj, findings| {
        if path_style(obj) == PathStyle::Invalid {
            findings.push(ValidationError::new(
                at,
                "entry must have either `windowsPath` and `linuxPath`, or a generic `path`",
            ));
        }
        for field in ["path", "windowsPath", "linuxPath"] {
            if let Some(raw) = obj.get(field) {
                executable::check_string(&child(at, field), raw, findings);
            }
        }
    })
}

fn fields_for(platform: Platform) -> FieldSelection {
    match platform {
        Platform::Windows => WINDOWS_FIELDS,
        Platform::Unix => LINUX_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style(entry: Json) -> PathStyle {
        path_style(entry.as_object().unwrap())
    }

    #[test]
    fn path_styles() {
        assert_eq!(style(json!({"windowsPath": "a", "linuxPath": "b"})), PathStyle::PlatformPair);
        assert_eq!(style(json!({"path": "a"})), PathStyle::Generic);
        assert_eq!(style(json!({"path": "a", "windowsPath": "b"})), PathStyle::Generic);
        assert_eq!(
            style(json!({"path": "a", "windowsPath": "b", "linuxPath": "c"})),
            PathStyle::Invalid
        );
        assert_eq!(style(json!({"windowsPath": "b"})), PathStyle::Invalid);
        assert_eq!(style(json!({})), PathStyle::Invalid);
    }

    #[test]
    fn fields_follow_platform() {
        assert_eq!(fields_for(Platform::Windows).path[0], "windowsPath");
        assert_eq!(fields_for(Platform::Unix).arguments[0], "linuxArguments");
    }
}
