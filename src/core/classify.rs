//! Decides which string literal nodes are translation candidates.

use tree_sitter::Node;

use crate::core::exclusions::{FileExclusions, is_blank};
use crate::core::parsers::{
    go::{SourceUnit, is_string_literal_kind},
    literal::decode_string_literal,
};

/// File name suffix of Go test files.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Which pass is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Extract,
    Rewrite,
}

/// Outcome of classifying a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Translatable literal with its decoded value.
    Candidate(String),
    /// Not a string literal node at all.
    NotLiteral,
    /// String literal that does not qualify.
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Blank,
    Excluded,
    AlreadyWrapped,
    /// Position where Go does not allow a call expression (import, const, struct tag).
    ConstantContext,
    /// Escapes could not be decoded.
    Undecodable(String),
}

/// Per-file classification context.
pub struct Classifier<'a> {
    unit: &'a SourceUnit,
    exclusions: FileExclusions<'a>,
    mode: Mode,
    wrapper_symbol: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(
        unit: &'a SourceUnit,
        exclusions: FileExclusions<'a>,
        mode: Mode,
        wrapper_symbol: &'a str,
    ) -> Self {
        Self {
            unit,
            exclusions,
            mode,
            wrapper_symbol,
        }
    }

    pub fn is_candidate(&self, node: &Node<'_>) -> bool {
        matches!(self.classify(node), Verdict::Candidate(_))
    }

    pub fn classify(&self, node: &Node<'_>) -> Verdict {
        if !is_string_literal_kind(node.kind()) {
            return Verdict::NotLiteral;
        }

        let value = match decode_string_literal(self.unit.text(node)) {
            Ok(value) => value,
            Err(err) => return Verdict::Rejected(Rejection::Undecodable(err.to_string())),
        };

        if value.is_empty() {
            return Verdict::Rejected(Rejection::Empty);
        }
        if is_blank(&value) {
            return Verdict::Rejected(Rejection::Blank);
        }
        if self.exclusions.contains(&value) {
            return Verdict::Rejected(Rejection::Excluded);
        }

        if self.mode == Mode::Rewrite {
            if in_constant_context(node) {
                return Verdict::Rejected(Rejection::ConstantContext);
            }
            if self.is_wrapped(node) {
                return Verdict::Rejected(Rejection::AlreadyWrapped);
            }
        }

        Verdict::Candidate(value)
    }

    /// True if `node` is the sole argument of a call to the wrapper symbol,
    /// either `T("x")` or `pkg.T("x")`. Parentheses around the literal are looked through.
    fn is_wrapped(&self, node: &Node<'_>) -> bool {
        let mut arguments = node.parent();
        while let Some(parent) = arguments
            && parent.kind() == "parenthesized_expression"
        {
            arguments = parent.parent();
        }
        let Some(arguments) = arguments else {
            return false;
        };
        if arguments.kind() != "argument_list" || arguments.named_child_count() != 1 {
            return false;
        }
        let Some(call) = arguments.parent() else {
            return false;
        };
        if call.kind() != "call_expression" {
            return false;
        }
        let Some(function) = call.child_by_field_name("function") else {
            return false;
        };

        let callee = match function.kind() {
            "identifier" => Some(function),
            "selector_expression" => function.child_by_field_name("field"),
            _ => None,
        };
        callee.is_some_and(|callee| self.unit.text(&callee) == self.wrapper_symbol)
    }
}

/// Import paths, constant declarations and struct tags must stay literals.
fn in_constant_context(node: &Node<'_>) -> bool {
    if let Some(parent) = node.parent()
        && parent.kind() == "field_declaration"
        && parent
            .child_by_field_name("tag")
            .is_some_and(|tag| tag.id() == node.id())
    {
        return true;
    }

    let mut current = node.parent();
    while let Some(ancestor) = current {
        match ancestor.kind() {
            "import_spec" | "const_declaration" => return true,
            // Function literals inside a const are impossible, so any body ends the search.
            "function_declaration" | "method_declaration" | "func_literal" => return false,
            _ => current = ancestor.parent(),
        }
    }
    false
}

/// True if `file_name` follows the Go test-file naming convention.
pub fn is_test_file(file_name: &str) -> bool {
    file_name.ends_with(TEST_FILE_SUFFIX)
}
