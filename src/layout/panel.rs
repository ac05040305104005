// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::path::Path;

use crate::format::StructureNode;
use crate::model::{Figure, Letters};
use crate::store::{FigureSource, LoadError};

/// One node of the panel tree handed to the compositor.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelNode {
    /// A figure source path; loading it consumes the next label.
    Leaf(String),
    /// An already-built figure; passed through untouched and never re-labeled.
    Built(Figure),
    /// A row of sibling nodes. Must be non-empty.
    Row(Vec<PanelNode>),
}

impl From<StructureNode> for PanelNode {
    fn from(node: StructureNode) -> Self {
        match node {
            StructureNode::Token(text) => Self::Leaf(text),
            StructureNode::List(nodes) => Self::Row(nodes.into_iter().map(Into::into).collect()),
        }
    }
}

/// Wrap a parsed top-level structure into a single composable row.
pub fn panel_tree(nodes: Vec<StructureNode>) -> PanelNode {
    PanelNode::Row(nodes.into_iter().map(Into::into).collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    /// Overall output width the final composite is rescaled to.
    pub width: f64,
    /// Blank spacing inserted when two panels are combined.
    pub margin: f64,
    /// Font size of leaf labels.
    pub fontsize: f64,
    /// Corner inset of leaf labels.
    pub label_pad: f64,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self { width: 1000.0, margin: 0.0, fontsize: 24.0, label_pad: 0.0 }
    }
}

#[derive(Debug)]
pub enum ComposeError {
    EmptyRow { at: String },
    Load { leaf: String, source: Box<LoadError> },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRow { at } => {
                write!(f, "empty row at {at}: a row must contain at least one element")
            }
            Self::Load { leaf, source } => {
                write!(f, "cannot load figure {leaf}: {source}")
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyRow { .. } => None,
            Self::Load { source, .. } => Some(source),
        }
    }
}

/// Compose a panel tree into one figure.
///
/// Leaves are loaded through `source` and labeled from `letters` in strict
/// depth-first, left-to-right order — exactly one label per leaf. Rows fold
/// left-to-right; the stacking direction for each step comes from the kinds
/// of the two consecutive row elements: two adjacent sub-rows stack
/// vertically, every other pairing places panels side by side.
pub fn compose(
    node: PanelNode,
    source: &dyn FigureSource,
    letters: &mut Letters,
    opts: &ComposeOptions,
) -> Result<Figure, ComposeError> {
    compose_at(node, source, letters, opts, "root")
}

fn compose_at(
    node: PanelNode,
    source: &dyn FigureSource,
    letters: &mut Letters,
    opts: &ComposeOptions,
    at: &str,
) -> Result<Figure, ComposeError> {
    match node {
        PanelNode::Leaf(path) => {
            let figure = source.load_figure(Path::new(&path)).map_err(|source| {
                ComposeError::Load { leaf: path.clone(), source: Box::new(source) }
            })?;
            let label = letters.next().expect("letter sequence is infinite");
            Ok(figure.with_label(&label, opts.fontsize, opts.label_pad))
        }
        PanelNode::Built(figure) => Ok(figure),
        PanelNode::Row(items) => {
            if items.is_empty() {
                return Err(ComposeError::EmptyRow { at: at.to_owned() });
            }

            // A row wrapping exactly one child is transparent.
            if items.len() == 1 {
                let only = items.into_iter().next().expect("one element");
                return compose_at(only, source, letters, opts, &format!("{at}[0]"));
            }

            // The horizontal/vertical decision is made from the syntactic
            // kinds of adjacent elements, recorded before they are consumed.
            let is_row: Vec<bool> =
                items.iter().map(|item| matches!(item, PanelNode::Row(_))).collect();

            let mut iter = items.into_iter().enumerate();
            let (_, first) = iter.next().expect("row has at least two elements");
            let mut acc = compose_at(first, source, letters, opts, &format!("{at}[0]"))?;

            for (idx, item) in iter {
                let next = compose_at(item, source, letters, opts, &format!("{at}[{idx}]"))?;
                acc = if is_row[idx - 1] && is_row[idx] {
                    acc.margin_bottom(opts.margin) / next
                } else {
                    acc.margin_right(opts.margin) + next
                };
            }

            Ok(acc)
        }
    }
}

/// Compose a whole panel with a fresh label sequence, then rescale the result
/// to `opts.width` as the very last step.
pub fn compose_panel(
    tree: PanelNode,
    source: &dyn FigureSource,
    opts: &ComposeOptions,
) -> Result<Figure, ComposeError> {
    let mut letters = Letters::new();
    Ok(compose(tree, source, &mut letters, opts)?.scale_width(opts.width))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::io;
    use std::path::Path;

    use super::{compose, compose_panel, ComposeError, ComposeOptions, PanelNode};
    use crate::model::{Figure, Letters, SceneNode};
    use crate::store::{FigureSource, LoadError};

    const EPS: f64 = 1e-9;

    struct StubSource {
        sizes: BTreeMap<String, (f64, f64)>,
        loads: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn new(sizes: &[(&str, f64, f64)]) -> Self {
            let sizes = sizes
                .iter()
                .map(|&(name, w, h)| (name.to_owned(), (w, h)))
                .collect::<BTreeMap<_, _>>();
            Self { sizes, loads: RefCell::new(Vec::new()) }
        }

        fn uniform(names: &[&str], width: f64, height: f64) -> Self {
            let sizes = names.iter().map(|&name| (name, width, height)).collect::<Vec<_>>();
            Self::new(&sizes)
        }
    }

    impl FigureSource for StubSource {
        fn load_figure(&self, path: &Path) -> Result<Figure, LoadError> {
            let key = path.to_string_lossy().into_owned();
            let Some(&(width, height)) = self.sizes.get(&key) else {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such fixture"),
                });
            };
            self.loads.borrow_mut().push(key);
            Ok(Figure::new(SceneNode::markup("<svg/>"), width, height))
        }
    }

    fn leaf(name: &str) -> PanelNode {
        PanelNode::Leaf(name.to_owned())
    }

    fn row(items: Vec<PanelNode>) -> PanelNode {
        PanelNode::Row(items)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
    }

    #[test]
    fn flat_row_labels_leaves_in_order() {
        let source = StubSource::uniform(&["a.svg", "b.svg", "c.svg"], 100.0, 50.0);
        let mut letters = Letters::new();
        let figure = compose(
            row(vec![leaf("a.svg"), leaf("b.svg"), leaf("c.svg")]),
            &source,
            &mut letters,
            &ComposeOptions::default(),
        )
        .expect("compose");

        let texts: Vec<&str> = figure.labels().iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(*source.loads.borrow(), vec!["a.svg", "b.svg", "c.svg"]);

        assert_eq!(figure.height(), 50.0);
        assert_close(figure.width(), 300.0);
    }

    #[test]
    fn leaves_are_loaded_depth_first_left_to_right() {
        let source = StubSource::uniform(&["a", "b", "c", "d", "e"], 100.0, 50.0);
        let mut letters = Letters::new();
        let tree = row(vec![
            leaf("a"),
            row(vec![leaf("b"), row(vec![leaf("c"), leaf("d")])]),
            leaf("e"),
        ]);
        compose(tree, &source, &mut letters, &ComposeOptions::default()).expect("compose");
        assert_eq!(*source.loads.borrow(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn single_element_rows_are_transparent() {
        let direct_source = StubSource::uniform(&["x"], 120.0, 70.0);
        let mut letters = Letters::new();
        let direct = compose(leaf("x"), &direct_source, &mut letters, &ComposeOptions::default())
            .expect("compose direct");

        let wrapped_source = StubSource::uniform(&["x"], 120.0, 70.0);
        let mut letters = Letters::new();
        let wrapped = compose(
            row(vec![row(vec![leaf("x")])]),
            &wrapped_source,
            &mut letters,
            &ComposeOptions::default(),
        )
        .expect("compose wrapped");

        assert_eq!(direct.width(), wrapped.width());
        assert_eq!(direct.height(), wrapped.height());
    }

    #[test]
    fn adjacent_rows_stack_vertically() {
        let source = StubSource::uniform(&["a", "b", "c", "d"], 100.0, 50.0);
        let mut letters = Letters::new();
        let tree = row(vec![
            row(vec![leaf("a"), leaf("b")]),
            row(vec![leaf("c"), leaf("d")]),
        ]);
        let figure =
            compose(tree, &source, &mut letters, &ComposeOptions::default()).expect("compose");

        // Each row is 200x50; the second stacks below the first.
        assert_eq!(figure.width(), 200.0);
        assert_close(figure.height(), 100.0);

        let texts: Vec<&str> = figure.labels().iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn three_adjacent_rows_form_a_column() {
        let source = StubSource::uniform(&["a", "b", "c"], 100.0, 50.0);
        let mut letters = Letters::new();
        let tree = row(vec![
            row(vec![leaf("a")]),
            row(vec![leaf("b")]),
            row(vec![leaf("c")]),
        ]);
        let figure =
            compose(tree, &source, &mut letters, &ComposeOptions::default()).expect("compose");

        assert_eq!(figure.width(), 100.0);
        assert_close(figure.height(), 150.0);
    }

    #[test]
    fn stacking_decision_depends_on_element_order() {
        // leaf,row,row: horizontal first, then vertical.
        let source = StubSource::uniform(&["l", "a", "b"], 100.0, 50.0);
        let mut letters = Letters::new();
        let tree = row(vec![leaf("l"), row(vec![leaf("a")]), row(vec![leaf("b")])]);
        let figure =
            compose(tree, &source, &mut letters, &ComposeOptions::default()).expect("compose");
        assert_close(figure.width(), 200.0);
        assert_close(figure.height(), 150.0);

        // row,row,leaf: vertical first, then horizontal.
        let source = StubSource::uniform(&["l", "a", "b"], 100.0, 50.0);
        let mut letters = Letters::new();
        let tree = row(vec![row(vec![leaf("a")]), row(vec![leaf("b")]), leaf("l")]);
        let figure =
            compose(tree, &source, &mut letters, &ComposeOptions::default()).expect("compose");
        assert_close(figure.width(), 300.0);
        assert_close(figure.height(), 100.0);
    }

    #[test]
    fn built_figures_pass_through_without_labels() {
        let source = StubSource::uniform(&["a"], 100.0, 50.0);
        let mut letters = Letters::new();
        let built = Figure::new(SceneNode::markup("<svg/>"), 100.0, 50.0);
        let tree = row(vec![PanelNode::Built(built), leaf("a")]);
        let figure =
            compose(tree, &source, &mut letters, &ComposeOptions::default()).expect("compose");

        // Only the leaf consumed a label, and it got the first one.
        let texts: Vec<&str> = figure.labels().iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["a"]);
        assert_eq!(letters.next().expect("letters"), "b");
    }

    #[test]
    fn margin_widens_horizontal_combinations() {
        let source = StubSource::uniform(&["a", "b"], 100.0, 50.0);
        let mut letters = Letters::new();
        let opts = ComposeOptions { margin: 10.0, ..ComposeOptions::default() };
        let figure = compose(row(vec![leaf("a"), leaf("b")]), &source, &mut letters, &opts)
            .expect("compose");
        assert_close(figure.width(), 210.0);
        assert_eq!(figure.height(), 50.0);
    }

    #[test]
    fn rejects_empty_rows_with_their_position() {
        let source = StubSource::new(&[]);
        let mut letters = Letters::new();
        let err = compose(row(Vec::new()), &source, &mut letters, &ComposeOptions::default())
            .unwrap_err();
        let ComposeError::EmptyRow { at } = err else {
            panic!("expected EmptyRow, got {err:?}");
        };
        assert_eq!(at, "root");

        let mut letters = Letters::new();
        let err = compose(
            row(vec![row(Vec::new())]),
            &source,
            &mut letters,
            &ComposeOptions::default(),
        )
        .unwrap_err();
        let ComposeError::EmptyRow { at } = err else {
            panic!("expected EmptyRow, got {err:?}");
        };
        assert_eq!(at, "root[0]");
    }

    #[test]
    fn load_failures_carry_the_leaf() {
        let source = StubSource::new(&[]);
        let mut letters = Letters::new();
        let err = compose(leaf("missing.svg"), &source, &mut letters, &ComposeOptions::default())
            .unwrap_err();
        let ComposeError::Load { leaf, .. } = err else {
            panic!("expected Load, got {err:?}");
        };
        assert_eq!(leaf, "missing.svg");
    }

    #[test]
    fn compose_panel_rescales_to_the_requested_width() {
        let source = StubSource::uniform(&["a", "b", "c"], 123.0, 77.0);
        let opts = ComposeOptions { width: 1200.0, ..ComposeOptions::default() };
        let tree = row(vec![row(vec![leaf("a"), leaf("b")]), row(vec![leaf("c")])]);
        let figure = compose_panel(tree, &source, &opts).expect("compose");
        assert_close(figure.width(), 1200.0);
    }
}
