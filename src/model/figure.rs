// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::{Add, Div};

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::scene::SceneNode;

pub const DEFAULT_LABEL_FONTSIZE: f64 = 48.0;
pub const DEFAULT_LABEL_PAD: f64 = 10.0;

/// A text overlay on a figure.
///
/// `fontsize` and `pad` are stored in the owning figure's current unscaled
/// frame; the absolute position is always derived as `(pad, pad + fontsize)`.
/// When the figure is scaled both values are divided by the factor, so the
/// rendered label keeps a constant visual size and corner inset.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: SmolStr,
    fontsize: f64,
    pad: f64,
}

impl Label {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fontsize(&self) -> f64 {
        self.fontsize
    }

    pub fn pad(&self) -> f64 {
        self.pad
    }

    pub fn x(&self) -> f64 {
        self.pad
    }

    pub fn y(&self) -> f64 {
        self.pad + self.fontsize
    }
}

/// A sized, positionable, labelable figure.
///
/// Every operation consumes the receiver and returns the derived figure;
/// combination (`+`, `/`) consumes both operands and embeds their scene
/// roots, so a combined-away figure can never be reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    root: SceneNode,
    width: f64,
    height: f64,
    // Outermost-added label first; the scene tree references entries by index.
    labels: SmallVec<[Label; 4]>,
}

impl Figure {
    pub fn new(root: SceneNode, width: f64, height: f64) -> Self {
        Self { root, width, height, labels: SmallVec::new() }
    }

    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Multiply the scene root's scale by `factor`.
    ///
    /// Labels compensate: their font size and pad are divided by the factor,
    /// so after the root's scale is applied the rendered label is unchanged.
    /// The stored width/height are not touched; use [`Figure::scale_width`] or
    /// [`Figure::scale_height`] to change dimensions.
    pub fn scale(mut self, factor: f64) -> Self {
        self.root.scale_by(factor);
        for label in &mut self.labels {
            label.fontsize /= factor;
            label.pad /= factor;
        }
        self
    }

    /// Scale so the height becomes `height`, keeping the aspect ratio.
    pub fn scale_height(mut self, height: f64) -> Self {
        let factor = height / self.height;
        self.height = height;
        self.width *= factor;
        self.scale(factor)
    }

    /// Scale so the width becomes `width`, keeping the aspect ratio.
    pub fn scale_width(mut self, width: f64) -> Self {
        let factor = width / self.width;
        self.width = width;
        self.height *= factor;
        self.scale(factor)
    }

    /// Move the scene root to the absolute position `(x, y)`.
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.root.move_to(x, y);
        self
    }

    /// Grow the bounding box by `margin` on the left: the figure shifts to
    /// `(margin, 0)` and the width includes the blank strip.
    pub fn margin_right(mut self, margin: f64) -> Self {
        self.width += margin;
        self.move_to(margin, 0.0)
    }

    /// Grow the bounding box by `margin` on the top: the figure shifts to
    /// `(0, margin)` and the height includes the blank strip.
    pub fn margin_bottom(mut self, margin: f64) -> Self {
        self.height += margin;
        self.move_to(0.0, margin)
    }

    /// Overlay a text label at `(pad, pad + fontsize)`.
    ///
    /// The new label is prepended (outermost-added labels come first) and the
    /// scene tree's existing label references are re-based accordingly.
    /// Dimensions are unchanged.
    pub fn with_label(self, text: &str, fontsize: f64, pad: f64) -> Self {
        let Self { mut root, width, height, mut labels } = self;
        root.shift_label_indices(1);
        labels.insert(0, Label { text: SmolStr::new(text), fontsize, pad });
        Self { root: SceneNode::group(vec![root, SceneNode::label(0)]), width, height, labels }
    }
}

impl Add for Figure {
    type Output = Figure;

    /// Horizontal combination: `rhs` is scaled to `self`'s height and placed
    /// immediately to the right. The result keeps `self`'s height exactly;
    /// widths add; labels concatenate left-then-right.
    fn add(self, rhs: Figure) -> Figure {
        let Figure { root: left_root, width, height, mut labels } = self;
        let rhs = rhs.scale_height(height).move_to(width, 0.0);
        let Figure { root: mut right_root, width: right_width, height: _, labels: right_labels } =
            rhs;
        right_root.shift_label_indices(labels.len());
        labels.extend(right_labels);
        Figure {
            root: SceneNode::group(vec![left_root, right_root]),
            width: width + right_width,
            height,
            labels,
        }
    }
}

impl Div for Figure {
    type Output = Figure;

    /// Vertical combination: `rhs` is scaled to `self`'s width and placed
    /// immediately below. The result keeps `self`'s width exactly; heights
    /// add; labels concatenate top-then-bottom.
    fn div(self, rhs: Figure) -> Figure {
        let Figure { root: top_root, width, height, mut labels } = self;
        let rhs = rhs.scale_width(width).move_to(0.0, height);
        let Figure { root: mut bottom_root, width: _, height: bottom_height, labels: bottom_labels } =
            rhs;
        bottom_root.shift_label_indices(labels.len());
        labels.extend(bottom_labels);
        Figure {
            root: SceneNode::group(vec![top_root, bottom_root]),
            width,
            height: height + bottom_height,
            labels,
        }
    }
}
