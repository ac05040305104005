// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Panel structure parsing/rendering.
//!
//! The input format is a flat string of figure paths separated by commas, with
//! square brackets introducing nested rows.

pub mod structure;

pub use structure::{parse_structure, render_structure, StructureNode, StructureParseError};
