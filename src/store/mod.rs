// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Figure files on disk: loading source figures and exporting composites.

pub mod figure_file;

pub use figure_file::{
    export_figure, load_figure, ExportError, ExportFormat, FigureSource, FileSource, LoadError,
};
