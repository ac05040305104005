// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Panel layout: the recursive compositor folding a nested tree of figures
//! into one composite.

pub mod panel;

pub use panel::{compose, compose_panel, panel_tree, ComposeError, ComposeOptions, PanelNode};
