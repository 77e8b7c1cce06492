//! Adds the translation runtime import to a rewritten file.

use tree_sitter::Node;

use super::edits::SpanEdit;
use crate::core::parsers::{
    go::{SourceUnit, import_spec_nodes},
    literal::quote,
};

/// Alias under which the runtime package is imported, so `T(...)` resolves unqualified.
pub const WRAPPER_IMPORT_ALIAS: &str = ".";

/// Edit that dot-imports `runtime_package`, or `None` if the file already does.
///
/// Placement, in order of preference: appended to the first grouped import,
/// after the last single import declaration, or after the package clause.
pub fn import_edit(unit: &SourceUnit, runtime_package: &str) -> Option<SpanEdit> {
    if unit.has_import(runtime_package, Some(WRAPPER_IMPORT_ALIAS)) {
        return None;
    }

    let spec = format!("{} {}", WRAPPER_IMPORT_ALIAS, quote(runtime_package));
    let root = unit.root();

    if let Some(list) = first_import_spec_list(root) {
        let last_spec = import_spec_nodes(root)
            .into_iter()
            .rev()
            .find(|spec| spec.parent().is_some_and(|parent| parent.id() == list.id()));
        return Some(match last_spec {
            Some(last) => SpanEdit::insert(last.end_byte(), format!("\n\t{}", spec)),
            None => {
                // `import ()`: insert right after the opening parenthesis.
                let open = list.child(0).map_or(list.start_byte() + 1, |paren| paren.end_byte());
                SpanEdit::insert(open, format!("\n\t{}\n", spec))
            }
        });
    }

    let mut cursor = root.walk();
    let children: Vec<Node<'_>> = root.named_children(&mut cursor).collect();

    if let Some(last_import) = children
        .iter()
        .rev()
        .find(|child| child.kind() == "import_declaration")
    {
        return Some(SpanEdit::insert(
            last_import.end_byte(),
            format!("\nimport {}", spec),
        ));
    }

    let anchor = children
        .iter()
        .find(|child| child.kind() == "package_clause")
        .map_or(0, |clause| clause.end_byte());
    Some(SpanEdit::insert(anchor, format!("\n\nimport {}", spec)))
}

fn first_import_spec_list(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    let declarations: Vec<Node<'_>> = root
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "import_declaration")
        .collect();

    declarations.into_iter().find_map(|declaration| {
        let mut decl_cursor = declaration.walk();
        declaration
            .named_children(&mut decl_cursor)
            .find(|child| child.kind() == "import_spec_list")
    })
}
