// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal scene graph for composed figures.
//!
//! Every node carries a transform that serializes as
//! `translate(tx, ty) scale(s)`, so the translation is expressed in the
//! parent's units and is unaffected by the node's own scale.

/// Uniform scale plus absolute translation, applied translation-first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { scale: 1.0, tx: 0.0, ty: 0.0 };

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.tx == 0.0 && self.ty == 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneContent {
    /// Verbatim SVG markup of a loaded source figure (prolog stripped).
    Markup(String),
    /// A label overlay, referencing the owning figure's label list by index.
    Label(usize),
    /// Composed children, drawn in order (later children on top).
    Group(Vec<SceneNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    transform: Transform,
    content: SceneContent,
}

impl SceneNode {
    pub fn markup(markup: impl Into<String>) -> Self {
        Self { transform: Transform::IDENTITY, content: SceneContent::Markup(markup.into()) }
    }

    pub fn label(index: usize) -> Self {
        Self { transform: Transform::IDENTITY, content: SceneContent::Label(index) }
    }

    pub fn group(children: Vec<SceneNode>) -> Self {
        Self { transform: Transform::IDENTITY, content: SceneContent::Group(children) }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn content(&self) -> &SceneContent {
        &self.content
    }

    /// Multiply this node's scale (translation untouched).
    pub fn scale_by(&mut self, factor: f64) {
        self.transform.scale *= factor;
    }

    /// Set this node's translation to the absolute position `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.transform.tx = x;
        self.transform.ty = y;
    }

    /// Re-base every label reference in this subtree by `offset`.
    ///
    /// Used when two figures merge their label lists: the right operand's
    /// indices shift past the left operand's labels.
    pub fn shift_label_indices(&mut self, offset: usize) {
        if offset == 0 {
            return;
        }
        match &mut self.content {
            SceneContent::Markup(_) => {}
            SceneContent::Label(index) => *index += offset,
            SceneContent::Group(children) => {
                for child in children {
                    child.shift_label_indices(offset);
                }
            }
        }
    }
}
