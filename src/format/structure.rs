// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// One node of the parsed panel structure: either a bare token (a figure
/// path) or a bracketed list of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    Token(String),
    List(Vec<StructureNode>),
}

impl StructureNode {
    pub fn token(text: impl Into<String>) -> Self {
        Self::Token(text.into())
    }

    pub fn list(nodes: impl Into<Vec<StructureNode>>) -> Self {
        Self::List(nodes.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureParseError {
    UnmatchedClosingBracket { position: usize },
    UnclosedBracket { open_count: usize },
}

impl fmt::Display for StructureParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedClosingBracket { position } => {
                write!(f, "unmatched ']' at byte {position}: no bracket is currently open")
            }
            Self::UnclosedBracket { open_count } => {
                write!(
                    f,
                    "unclosed '[': {open_count} bracket(s) still open at end of input"
                )
            }
        }
    }
}

impl std::error::Error for StructureParseError {}

fn flush_token(stack: &mut [Vec<StructureNode>], buffer: &mut String) {
    if buffer.is_empty() {
        return;
    }
    let top = stack.last_mut().expect("stack is never empty");
    top.push(StructureNode::Token(std::mem::take(buffer)));
}

/// Parse a bracketed panel structure string into a nested token tree.
///
/// A single left-to-right scan over the input:
/// - whitespace is skipped entirely (tokens cannot contain spaces)
/// - `,` closes the pending token, if any
/// - `[` opens a nested list, `]` closes the innermost open list
/// - any other character extends the pending token
///
/// A flush of an empty pending token is a no-op, so trailing or doubled
/// commas produce no empty tokens. Unbalanced brackets are rejected.
pub fn parse_structure(text: &str) -> Result<Vec<StructureNode>, StructureParseError> {
    let mut stack: Vec<Vec<StructureNode>> = vec![Vec::new()];
    let mut buffer = String::new();

    for (position, ch) in text.char_indices() {
        match ch {
            ch if ch.is_whitespace() => {}
            ',' => flush_token(&mut stack, &mut buffer),
            '[' => {
                flush_token(&mut stack, &mut buffer);
                stack.push(Vec::new());
            }
            ']' => {
                flush_token(&mut stack, &mut buffer);
                if stack.len() < 2 {
                    return Err(StructureParseError::UnmatchedClosingBracket { position });
                }
                let closed = stack.pop().expect("checked above");
                let parent = stack.last_mut().expect("checked above");
                parent.push(StructureNode::List(closed));
            }
            ch => buffer.push(ch),
        }
    }

    flush_token(&mut stack, &mut buffer);

    if stack.len() > 1 {
        return Err(StructureParseError::UnclosedBracket { open_count: stack.len() - 1 });
    }

    Ok(stack.pop().expect("stack holds exactly the top-level list"))
}

fn render_node(out: &mut String, node: &StructureNode) {
    match node {
        StructureNode::Token(text) => out.push_str(text),
        StructureNode::List(nodes) => {
            out.push('[');
            render_into(out, nodes);
            out.push(']');
        }
    }
}

fn render_into(out: &mut String, nodes: &[StructureNode]) {
    for (idx, node) in nodes.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        render_node(out, node);
    }
}

/// Render a structure tree back to its canonical text form: commas between
/// siblings, brackets around sublists, no whitespace.
///
/// `parse_structure(render_structure(nodes))` yields `nodes` again for any
/// tree whose tokens contain no delimiter characters.
pub fn render_structure(nodes: &[StructureNode]) -> String {
    let mut out = String::new();
    render_into(&mut out, nodes);
    out
}
