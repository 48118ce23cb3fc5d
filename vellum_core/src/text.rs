// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Literal text blocks.

use alloc::string::String;
use alloc::vec::Vec;

use crate::pretty::{Pretty, push_indented};

/// An ordered block of literal text lines.
///
/// The only operation in the text algebra. Lines are carried verbatim and
/// in order; zero lines is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextOp {
    /// The text lines, first to last.
    pub lines: Vec<String>,
}

impl TextOp {
    /// Creates a text block from zero or more lines.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Pretty for TextOp {
    fn pretty(&self) -> String {
        let mut out = String::from("Text:");
        for line in &self.lines {
            push_indented(&mut out, line);
        }
        out
    }
}

impl core::fmt::Display for TextOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.pretty())
    }
}
