// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tiny_skia::Pixmap;

use crate::model::{Figure, SceneNode};
use crate::render::{render_svg_document, SvgRenderError};


#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Svg { path: PathBuf, source: usvg::Error },
    NotUtf8 { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Svg { path, source } => write!(f, "cannot parse SVG {path:?}: {source}"),
            Self::NotUtf8 { path } => write!(f, "figure file {path:?} is not valid UTF-8"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Svg { source, .. } => Some(source),
            Self::NotUtf8 { .. } => None,
        }
    }
}

/// Where the compositor gets leaf figures from.
///
/// The filesystem implementation is [`FileSource`]; tests substitute stubs
/// that hand out synthetic figures.
pub trait FigureSource {
    fn load_figure(&self, path: &Path) -> Result<Figure, LoadError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl FigureSource for FileSource {
    fn load_figure(&self, path: &Path) -> Result<Figure, LoadError> {
        load_figure(path)
    }
}

// The composite embeds source documents verbatim; an XML prolog or doctype
// inside the composite would be invalid, so everything before `<svg` goes.
fn document_markup(text: &str) -> &str {
    match text.find("<svg") {
        Some(start) => text[start..].trim_end(),
        None => text.trim(),
    }
}

/// Load an SVG figure file.
///
/// The document size (resolved by `usvg`, so `viewBox`-only documents work)
/// becomes the figure's dimensions; the file's markup is embedded verbatim as
/// the figure's scene content.
pub fn load_figure(path: &Path) -> Result<Figure, LoadError> {
    let data =
        fs::read(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options)
        .map_err(|source| LoadError::Svg { path: path.to_path_buf(), source })?;
    let size = tree.size();

    let text = String::from_utf8(data)
        .map_err(|_| LoadError::NotUtf8 { path: path.to_path_buf() })?;
    let markup = document_markup(&text).to_owned();

    Ok(Figure::new(
        SceneNode::markup(markup),
        f64::from(size.width()),
        f64::from(size.height()),
    ))
}

/// Output format, selected purely by the destination path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ExportError {
    UnsupportedFormat { path: PathBuf },
    Render { source: SvgRenderError },
    Io { path: PathBuf, source: io::Error },
    Svg { path: PathBuf, source: usvg::Error },
    InvalidRasterSize { path: PathBuf, width: f64, height: f64 },
    PngEncode { path: PathBuf, reason: String },
    PdfConvert { path: PathBuf, reason: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { path } => write!(
                f,
                "unsupported output suffix for {path:?} (expected .svg, .png, or .pdf)"
            ),
            Self::Render { source } => write!(f, "cannot render composite figure: {source}"),
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Svg { path, source } => {
                write!(f, "cannot re-parse composite SVG for {path:?}: {source}")
            }
            Self::InvalidRasterSize { path, width, height } => write!(
                f,
                "cannot rasterize {path:?}: composite size {width}x{height} is out of range"
            ),
            Self::PngEncode { path, reason } => {
                write!(f, "cannot encode PNG {path:?}: {reason}")
            }
            Self::PdfConvert { path, reason } => {
                write!(f, "cannot convert to PDF {path:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Svg { source, .. } => Some(source),
            Self::UnsupportedFormat { .. }
            | Self::InvalidRasterSize { .. }
            | Self::PngEncode { .. }
            | Self::PdfConvert { .. } => None,
        }
    }
}

/// Export a composed figure to `path`, dispatching on the suffix.
///
/// `.svg` writes the rendered document as-is; `.png` rasterizes it via
/// `resvg` at 1:1 scale; `.pdf` converts the same tree via `svg2pdf`.
/// Nothing is written on failure.
pub fn export_figure(figure: &Figure, path: &Path) -> Result<(), ExportError> {
    let Some(format) = ExportFormat::from_path(path) else {
        return Err(ExportError::UnsupportedFormat { path: path.to_path_buf() });
    };

    let svg = render_svg_document(figure).map_err(|source| ExportError::Render { source })?;

    match format {
        ExportFormat::Svg => fs::write(path, svg)
            .map_err(|source| ExportError::Io { path: path.to_path_buf(), source }),
        ExportFormat::Png => export_png(&svg, path),
        ExportFormat::Pdf => export_pdf(&svg, path),
    }
}

fn output_tree(svg: &str, path: &Path) -> Result<usvg::Tree, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    usvg::Tree::from_str(svg, &options)
        .map_err(|source| ExportError::Svg { path: path.to_path_buf(), source })
}

fn export_png(svg: &str, path: &Path) -> Result<(), ExportError> {
    let tree = output_tree(svg, path)?;
    let size = tree.size();

    let width = size.width().ceil();
    let height = size.height().ceil();
    if width < 1.0 || height < 1.0 || width > u32::MAX as f32 || height > u32::MAX as f32 {
        return Err(ExportError::InvalidRasterSize {
            path: path.to_path_buf(),
            width: f64::from(size.width()),
            height: f64::from(size.height()),
        });
    }

    let mut pixmap =
        Pixmap::new(width as u32, height as u32).ok_or_else(|| ExportError::InvalidRasterSize {
            path: path.to_path_buf(),
            width: f64::from(size.width()),
            height: f64::from(size.height()),
        })?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| ExportError::PngEncode { path: path.to_path_buf(), reason: err.to_string() })?;
    fs::write(path, png).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}

fn export_pdf(svg: &str, path: &Path) -> Result<(), ExportError> {
    let tree = output_tree(svg, path)?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|err| ExportError::PdfConvert { path: path.to_path_buf(), reason: err.to_string() })?;
    fs::write(path, pdf).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}
