//! Names used in generated calls.

use serde::Deserialize;

/// Call names emitted by the converter. Every field has a default, so a
/// partial config (e.g. `{ "createFn": "h" }` from the WASM API) is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Callee for components: `create_fn(type, props, ...children)`.
    pub create_fn: String,
    /// Callee for text runs, called with the text as a template literal.
    pub text_fn: String,
    /// Element-handle identifier paired with `ref` values.
    pub refs_ident: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            create_fn: "Xjsx.create".into(),
            text_fn: "document.createTextNode".into(),
            refs_ident: "els".into(),
        }
    }
}
