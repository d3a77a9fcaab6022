//! Rendering of the generated declaration and definition blocks

use crate::scan::NameSet;

/// First line of every generated region
pub const BANNER_BEGIN: &str = "// Autogenerated by wrapgen - begin";
/// Last line of every generated region
pub const BANNER_END: &str = "// Autogenerated by wrapgen - end";

/// Which artifact to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Function enumeration plus one exception class declaration per name
    Header,
    /// The two one-line method bodies per exception class
    #[default]
    Body,
}

/// Render the generated block for `names`.
///
/// Pure function of the name set: byte-identical across runs, and
/// well-formed (banners included) even when the set is empty.
pub fn render(names: &NameSet, mode: Mode) -> String {
    let mut out = String::new();
    out.push_str(BANNER_BEGIN);
    out.push('\n');
    match mode {
        Mode::Header => render_header(names, &mut out),
        Mode::Body => render_body(names, &mut out),
    }
    out.push_str(BANNER_END);
    out.push('\n');
    out
}

fn render_header(names: &NameSet, out: &mut String) {
    out.push_str("enum class Function {\n");
    let entries: Vec<String> = names
        .iter()
        .map(|name| format!("    {}", name.to_uppercase()))
        .collect();
    if !entries.is_empty() {
        out.push_str(&entries.join(",\n"));
        out.push('\n');
    }
    out.push_str("};\n");

    for name in names.iter() {
        out.push_str(&format!("class {}_error : public sys_error {{\n", name));
        out.push_str("    public:\n");
        out.push_str("        using sys_error::sys_error;\n");
        out.push_str("        Function function() const override;\n");
        out.push_str("        const char* name() const override;\n");
        out.push_str("};\n");
    }
}

fn render_body(names: &NameSet, out: &mut String) {
    for name in names.iter() {
        out.push_str(&format!(
            "Function {}_error::function() const {{ return Function::{}; }}\n",
            name,
            name.to_uppercase()
        ));
        out.push_str(&format!(
            "const char* {}_error::name() const {{ return \"{}\"; }}\n",
            name, name
        ));
    }
}
