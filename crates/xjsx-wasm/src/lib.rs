//! WASM bindings for the XJSX compiler.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen. Syntax errors are
//! thrown as `SyntaxError` objects carrying `line` and `column` properties.

use wasm_bindgen::prelude::*;
use xjsx_codegen::{ConvertOptions, SyntaxError};

/// Compile XJSX source to JavaScript with the default call names.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<String, JsValue> {
    match xjsx_codegen::compile(source) {
        Ok(js) => Ok(js),
        Err(e) => Err(syntax_error_to_js(&e)?),
    }
}

/// Compile XJSX source with call names from a plain object, e.g.
/// `{ createFn: "h", textFn: "text", refsIdent: "refs" }`. Missing fields
/// keep their defaults.
#[wasm_bindgen(js_name = compileWithOptions)]
pub fn compile_with_options(source: &str, options: JsValue) -> Result<String, JsValue> {
    let options: ConvertOptions = if options.is_undefined() || options.is_null() {
        ConvertOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from(JsError::new(&format!("Invalid options: {e}"))))?
    };

    match xjsx_codegen::compile_with(source, &options) {
        Ok(js) => Ok(js),
        Err(e) => Err(syntax_error_to_js(&e)?),
    }
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Build the JS `SyntaxError` thrown for a compile failure. A failure to
/// attach `line`/`column` is thrown in its place.
fn syntax_error_to_js(err: &SyntaxError) -> Result<JsValue, JsError> {
    let js_err = js_sys::SyntaxError::new(&err.to_string());
    js_sys::Reflect::set(&js_err, &"line".into(), &(err.line as u32).into())
        .map_err(|_| JsError::new("Failed to set line property"))?;
    js_sys::Reflect::set(&js_err, &"column".into(), &(err.column as u32).into())
        .map_err(|_| JsError::new("Failed to set column property"))?;
    Ok(js_err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — verify the compile pipeline works
    // =========================================================================

    fn native_compile(source: &str) -> String {
        xjsx_codegen::compile(source).unwrap()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(native_compile(""), "");
    }

    #[test]
    fn test_render_call_example() {
        let output = native_compile("Xjsx.render(<App/>, \"app\");");
        assert_eq!(output, "Xjsx.render(Xjsx.create(App, {}), \"app\");");
    }

    #[test]
    fn test_component_example() {
        let output = native_compile(
            "function Counter() {\n  \
             return [<p ref={p}>{0}</p>, <button onClick={inc}>Click</button>];\n}",
        );
        assert!(output.contains("Xjsx.create(\"p\", {ref: [\"p\", els]}, 0)"));
        assert!(output.contains(
            "Xjsx.create(\"button\", {onClick: inc}, document.createTextNode(`Click`))"
        ));
        assert!(!output.contains("<p"));
    }

    #[test]
    fn test_syntax_error_message() {
        let err = xjsx_codegen::compile("<a></b>").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.to_string().contains("a element does not have a closing tag"));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_compiles() {
        // Verify no state leaks between compiles
        let out1 = native_compile("<A/>");
        let out2 = native_compile("<b/>");
        assert_eq!(out1, "Xjsx.create(A, {})");
        assert_eq!(out2, "Xjsx.create(\"b\", {})");
    }
}
