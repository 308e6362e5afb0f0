//! Head and tail text around the generated body.
//!
//! A standalone render function receives `<model>`, `<helpers>` and `__vopts`
//! as parameters. A helper body runs with `this` bound to the calling helpers
//! object and shares its buffer and model.

use crate::buffer::BUFFER_VAR;
use crate::escape::escape_for_debug;
use crate::options::CodegenOptions;

pub fn head(options: &CodegenOptions) -> String {
    let helpers = &options.helpers_name;
    let model = &options.model_name;
    let mut out = String::new();
    if options.debug {
        out.push_str("try { \n");
    }
    out.push_str(&format!("var {} = {}.buffer; \n", BUFFER_VAR, helpers));
    out.push_str(&format!("{}.options = __vopts; \n", helpers));
    out.push_str(&format!("{m} = {m} || {{}}; \n", m = model));
    if options.use_with {
        out.push_str(&format!("with( {} ){{ \n", model));
    }
    out
}

pub fn tail(options: &CodegenOptions) -> String {
    let helpers = &options.helpers_name;
    let mut out = if options.simple {
        format!("return {}.buffer.join(\"\"); \n", helpers)
    } else {
        format!(
            ";(__vopts && __vopts.onRenderEnd && __vopts.onRenderEnd(null, {h})); \n\
             return (__vopts && __vopts.asContext) \n  ? {h} \n  : {h}.toString(); \n",
            h = helpers
        )
    };
    if options.use_with {
        out.push_str("} \n");
    }
    if options.debug {
        out.push_str(&debug_catch(options));
    }
    out
}

pub fn helper_head(options: &CodegenOptions) -> String {
    let mut out = String::new();
    if options.debug {
        out.push_str("try { \n");
    }
    out.push_str(&format!(
        "var {} = this.buffer; \nvar {} = this.model; \nvar {} = this; \n",
        BUFFER_VAR, options.model_name, options.helpers_name
    ));
    out
}

pub fn helper_tail(options: &CodegenOptions) -> String {
    if options.debug {
        debug_catch(options)
    } else {
        String::new()
    }
}

/// `catch` block forwarding a runtime error, the current line/column and the
/// escaped template source to `<helpers>.reportError`.
fn debug_catch(options: &CodegenOptions) -> String {
    let helpers = &options.helpers_name;
    let source = escape_for_debug(options.source.as_deref().unwrap_or_default());
    format!(
        "}} catch( e ){{ \n  {h}.reportError( e, {h}.vl, {h}.vc, \"{src}\" ); \n}} \n",
        h = helpers,
        src = source
    )
}
