// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::Path;

use galatea::format::StructureNode;
use galatea::model::{Figure, SceneNode};
use galatea::store::{FigureSource, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    NestedRows,
    LargeGrid,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::NestedRows => "nested_rows",
            Self::LargeGrid => "large_grid",
        }
    }
}

/// Deterministic structure text for a case.
///
/// `small` is a flat three-panel row; `nested_rows` has two bracketed rows of
/// four panels under a header panel; `large_grid` is 24 rows of 8 panels.
pub fn structure_text(case: Case) -> String {
    match case {
        Case::Small => "panel-0.svg,panel-1.svg,panel-2.svg".to_owned(),
        Case::NestedRows => {
            let mut text = String::from("header.svg");
            for row in 0..2 {
                text.push_str(",[");
                for col in 0..4 {
                    if col > 0 {
                        text.push(',');
                    }
                    text.push_str(&format!("panel-{row}-{col}.svg"));
                }
                text.push(']');
            }
            text
        }
        Case::LargeGrid => {
            let mut text = String::new();
            for row in 0..24 {
                if row > 0 {
                    text.push(',');
                }
                text.push('[');
                for col in 0..8 {
                    if col > 0 {
                        text.push(',');
                    }
                    text.push_str(&format!("panel-{row}-{col}.svg"));
                }
                text.push(']');
            }
            text
        }
    }
}

pub fn leaf_count(case: Case) -> u64 {
    match case {
        Case::Small => 3,
        Case::NestedRows => 9,
        Case::LargeGrid => 24 * 8,
    }
}

/// Leaf count of a parsed structure, used to keep the whole tree live under
/// the optimizer.
pub fn checksum_structure(nodes: &[StructureNode]) -> u64 {
    nodes
        .iter()
        .map(|node| match node {
            StructureNode::Token(_) => 1,
            StructureNode::List(items) => checksum_structure(items),
        })
        .sum()
}

/// Hands out synthetic in-memory panels so composition benchmarks measure
/// geometry and labeling, not filesystem and XML parsing.
pub struct SyntheticSource {
    width: f64,
    height: f64,
}

impl SyntheticSource {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl FigureSource for SyntheticSource {
    fn load_figure(&self, path: &Path) -> Result<Figure, LoadError> {
        let name = path.display().to_string();
        let markup = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\"><title>{name}</title></svg>",
            w = self.width,
            h = self.height,
        );
        Ok(Figure::new(SceneNode::markup(markup), self.width, self.height))
    }
}
