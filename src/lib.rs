// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea — labeled multi-panel SVG figure composition.
//!
//! A bracketed structure string is parsed into a nested tree of figure paths,
//! each leaf is loaded and labeled, and the tree is folded into one composite
//! figure that is exported as SVG, PNG, or PDF.

pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod store;
