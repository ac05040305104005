// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Figure, Label, SceneContent, SceneNode, Transform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgRenderError {
    DanglingLabel { index: usize, label_count: usize },
}

impl fmt::Display for SvgRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingLabel { index, label_count } => write!(
                f,
                "scene references label index {index} but the figure has {label_count} label(s)"
            ),
        }
    }
}

impl std::error::Error for SvgRenderError {}

fn transform_value(transform: &Transform) -> String {
    let mut parts = Vec::with_capacity(2);
    if transform.tx != 0.0 || transform.ty != 0.0 {
        parts.push(format!("translate({}, {})", transform.tx, transform.ty));
    }
    if transform.scale != 1.0 {
        parts.push(format!("scale({})", transform.scale));
    }
    parts.join(" ")
}

fn push_transform_attr(out: &mut String, transform: &Transform) {
    if transform.is_identity() {
        return;
    }
    out.push_str(" transform=\"");
    out.push_str(&transform_value(transform));
    out.push('"');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn write_label(out: &mut String, node: &SceneNode, label: &Label) {
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"bold\"",
        label.x(),
        label.y(),
        label.fontsize()
    ));
    push_transform_attr(out, node.transform());
    out.push('>');
    out.push_str(&escape_text(label.text()));
    out.push_str("</text>");
}

fn write_node(out: &mut String, node: &SceneNode, labels: &[Label]) -> Result<(), SvgRenderError> {
    match node.content() {
        SceneContent::Markup(markup) => {
            out.push_str("<g");
            push_transform_attr(out, node.transform());
            out.push('>');
            out.push_str(markup);
            out.push_str("</g>");
        }
        SceneContent::Label(index) => {
            let label = labels.get(*index).ok_or(SvgRenderError::DanglingLabel {
                index: *index,
                label_count: labels.len(),
            })?;
            write_label(out, node, label);
        }
        SceneContent::Group(children) => {
            out.push_str("<g");
            push_transform_attr(out, node.transform());
            out.push('>');
            for child in children {
                write_node(out, child, labels)?;
            }
            out.push_str("</g>");
        }
    }
    Ok(())
}

/// Serialize a composed figure into a standalone SVG document.
///
/// Loaded source figures are embedded verbatim (as nested `<svg>` elements)
/// inside transform groups; labels render as bold `<text>` elements at
/// `(pad, pad + fontsize)` with their current font size.
pub fn render_svg_document(figure: &Figure) -> Result<String, SvgRenderError> {
    let width = figure.width();
    let height = figure.height();

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    ));
    write_node(&mut out, figure.root(), figure.labels())?;
    out.push_str("</svg>\n");
    Ok(out)
}
