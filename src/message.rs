//! Heuristic commit message generation from filenames.
//!
//! Pure lookup with a fixed priority: exact filename match first, extension
//! template second, generic fallback last.

use std::path::Path;

use phf::phf_map;

use crate::git::StatusCode;

/// Files that always get a fixed message, regardless of status code.
static SPECIAL_FILES: phf::Map<&'static str, &'static str> = phf_map! {
    "vite.config.ts" => "configured vite and removed lovable tags",
    "package.json" => "updated dependencies and removed unused packages",
    "index.html" => "cleaned up index.html meta tags",
    ".gitignore" => "added gitignore to keep things clean",
    "README.md" => "added a readme file",
    "tsconfig.json" => "set up typescript configuration",
    "tailwind.config.ts" => "fixed tailwind configuration imports",
    "command.tsx" => "fixed types in command component",
    "textarea.tsx" => "fixed types in textarea component",
};

/// Template families for the extension-based fallback.
#[derive(Debug, Clone, Copy)]
enum ExtTemplate {
    Component,
    Utility,
    Styles,
    Config,
}

static EXT_TEMPLATES: phf::Map<&'static str, ExtTemplate> = phf_map! {
    "tsx" => ExtTemplate::Component,
    "ts" => ExtTemplate::Utility,
    "css" => ExtTemplate::Styles,
    "json" => ExtTemplate::Config,
};

/// Derive a human-readable commit message for a changed path.
///
/// The action verb is "updated" when the status code reports a modification,
/// "added" otherwise. `<name>` is the filename minus its final extension.
pub fn describe_change(path: &Path, status: &StatusCode) -> String {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    if let Some(fixed) = SPECIAL_FILES.get(filename.as_ref()) {
        return (*fixed).to_string();
    }

    let action = if status.is_modified() {
        "updated"
    } else {
        "added"
    };
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    let ext = path.extension().map(|ext| ext.to_string_lossy());
    if let Some(template) = ext.as_deref().and_then(|ext| EXT_TEMPLATES.get(ext)) {
        return match template {
            ExtTemplate::Component => format!("{action} the {name} component"),
            ExtTemplate::Utility => format!("{action} {name} utility/config"),
            ExtTemplate::Styles => format!("{action} styles for {name}"),
            ExtTemplate::Config => format!("{action} {name} configuration"),
        };
    }

    format!("{action} {filename}")
}
