// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical textual rendering protocol.
//!
//! Every operation type implements [`Pretty`]: produce a deterministic
//! multi-line string describing the tree. Leaves render as a single line;
//! composite nodes render a header ending in `:` followed by each child's
//! full rendering, indented by two additional spaces.
//!
//! Indentation is purely additive per nesting level. A node never knows
//! its absolute depth; it only indents its children's finished output via
//! [`push_indented`], which keeps rendering compositional.

use alloc::string::String;

/// Number of spaces added per nesting level.
pub const INDENT: &str = "  ";

/// Canonical multi-line textual rendering.
///
/// The output never carries a trailing newline; lines are joined by `\n`.
/// The textual form is write-only: it exists for display and test
/// assertions, not for parsing.
pub trait Pretty {
    /// Renders this value's canonical textual form.
    fn pretty(&self) -> String;
}

/// Appends `block` to `out`, each line on its own row and indented one
/// level relative to whatever `out` currently ends with.
pub(crate) fn push_indented(out: &mut String, block: &str) {
    for line in block.split('\n') {
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::push_indented;

    #[test]
    fn indents_every_line_of_a_block() {
        let mut out = String::from("Header:");
        push_indented(&mut out, "one\ntwo");
        assert_eq!(out, "Header:\n  one\n  two");
    }

    #[test]
    fn nesting_is_additive() {
        let mut inner = String::from("Inner:");
        push_indented(&mut inner, "leaf");
        let mut outer = String::from("Outer:");
        push_indented(&mut outer, &inner);
        assert_eq!(outer, "Outer:\n  Inner:\n    leaf");
    }
}
