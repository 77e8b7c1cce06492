use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::core::errors::{EngineError, EngineResult};

use super::literal::decode_string_literal;

/// Tree-sitter node kinds for Go string literals.
pub const STRING_LITERAL_KINDS: &[&str] = &["interpreted_string_literal", "raw_string_literal"];

/// Byte offset plus 1-based line and column of a node in the original text.
///
/// Columns count bytes, the way Go's `token.Position` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Maps syntax-tree nodes back to positions in the source text.
pub trait PositionIndex {
    fn position(&self, node: &Node<'_>) -> Position;
}

/// One import declared by a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Decoded import path.
    pub path: String,
    /// Alias as written (`.`, `_`, or an identifier), if any.
    pub alias: Option<String>,
}

/// One parsed Go file.
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
    /// Name from the `package` clause.
    pub package_name: String,
    pub imports: Vec<ImportSpec>,
}

impl SourceUnit {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: &Node<'_>) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }

    /// Path as written into catalogs: forward slashes on every platform.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    /// File name without directories.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// True if an import of `path` uses the given alias.
    pub fn has_import(&self, path: &str, alias: Option<&str>) -> bool {
        self.imports
            .iter()
            .any(|import| import.path == path && import.alias.as_deref() == alias)
    }
}

impl PositionIndex for SourceUnit {
    fn position(&self, node: &Node<'_>) -> Position {
        let point = node.start_position();
        Position {
            offset: node.start_byte(),
            line: point.row + 1,
            column: point.column + 1,
        }
    }
}

/// Read and parse a Go file from disk.
pub fn parse_go_file(path: &Path) -> EngineResult<SourceUnit> {
    let source = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
    parse_go_source(source, path)
}

/// Parse Go source text into a [`SourceUnit`].
///
/// Tree-sitter recovers from syntax errors; any error or missing node in the
/// tree is reported as a parse error so the file is left alone.
pub fn parse_go_source(source: String, path: &Path) -> EngineResult<SourceUnit> {
    let parse_error = |message: String| EngineError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| parse_error(format!("failed to load Go grammar: {}", e)))?;

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| parse_error("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        let location = first_error(root)
            .map(|node| {
                let point = node.start_position();
                format!("syntax error at line {}, column {}", point.row + 1, point.column + 1)
            })
            .unwrap_or_else(|| "syntax error".to_string());
        return Err(parse_error(location));
    }

    let package_name = package_name(root, &source)
        .ok_or_else(|| parse_error("missing package clause".to_string()))?;
    let imports = collect_imports(root, &source);

    Ok(SourceUnit {
        path: path.to_path_buf(),
        source,
        tree,
        package_name,
        imports,
    })
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

fn package_name(root: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_clause")?;
    let mut clause_cursor = clause.walk();
    let name = clause
        .named_children(&mut clause_cursor)
        .find(|child| child.kind() == "package_identifier")?;
    Some(source[name.start_byte()..name.end_byte()].to_string())
}

/// All import specs, from both single and grouped declarations.
fn collect_imports(root: Node<'_>, source: &str) -> Vec<ImportSpec> {
    import_spec_nodes(root)
        .into_iter()
        .filter_map(|spec| {
            let path_node = spec.child_by_field_name("path")?;
            let raw = &source[path_node.start_byte()..path_node.end_byte()];
            let path = decode_string_literal(raw).ok()?;
            let alias = spec
                .child_by_field_name("name")
                .map(|name| source[name.start_byte()..name.end_byte()].to_string());
            Some(ImportSpec { path, alias })
        })
        .collect()
}

/// `import_spec` nodes in document order.
pub fn import_spec_nodes(root: Node<'_>) -> Vec<Node<'_>> {
    let mut specs = Vec::new();
    let mut cursor = root.walk();
    for declaration in root
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "import_declaration")
    {
        let mut decl_cursor = declaration.walk();
        for child in declaration.named_children(&mut decl_cursor) {
            match child.kind() {
                "import_spec" => specs.push(child),
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    specs.extend(
                        child
                            .named_children(&mut list_cursor)
                            .filter(|spec| spec.kind() == "import_spec"),
                    );
                }
                _ => {}
            }
        }
    }
    specs
}

/// Visit every node in pre-order (document order).
pub fn walk_preorder<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// True if `kind` is a Go string literal node kind.
pub fn is_string_literal_kind(kind: &str) -> bool {
    STRING_LITERAL_KINDS.contains(&kind)
}
