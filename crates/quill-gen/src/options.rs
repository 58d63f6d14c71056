//! Generation options.
//!
//! Always passed in explicitly per invocation; the engine reads no ambient
//! configuration. The serde shape matches the host-side option names so a
//! partial JSON object deserializes with the documented defaults.

/// Options recognized by the scaffolding engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocOptions {
    /// Emit heritage (`@extends`/`@implements`) and `@template` lines.
    pub include_types: bool,
    /// Emit an `Author:` line with a fillable slot.
    pub include_author_tag: bool,
    /// Name placed on the `Author:` line.
    pub author_name: String,
}

impl Default for DocOptions {
    fn default() -> DocOptions {
        DocOptions {
            include_types: true,
            include_author_tag: false,
            author_name: String::new(),
        }
    }
}
