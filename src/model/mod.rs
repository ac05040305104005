// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core model types: the scene graph, the figure entity, and label letters.

pub mod figure;
pub mod letters;
pub mod scene;

pub use figure::{Figure, Label, DEFAULT_LABEL_FONTSIZE, DEFAULT_LABEL_PAD};
pub use letters::Letters;
pub use scene::{SceneContent, SceneNode, Transform};
