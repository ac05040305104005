// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// Infinite sequence of panel labels: `a..z`, then `aa..zz`, then `aaa`, ….
///
/// This is bijective base-26 over lowercase letters. Each `Letters` value is
/// an independent sequence starting at `a`; one instance is threaded through
/// a whole composition so labels follow depth-first leaf order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letters {
    // 1-based ordinal of the next label to hand out.
    next: u64,
}

impl Letters {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for Letters {
    fn default() -> Self {
        Self::new()
    }
}

fn label_for_ordinal(ordinal: u64) -> SmolStr {
    debug_assert!(ordinal >= 1);
    let mut digits = [0u8; 16];
    let mut len = 0;
    let mut n = ordinal;
    loop {
        let digit = ((n - 1) % 26) as u8;
        digits[len] = b'a' + digit;
        len += 1;
        n = (n - 1) / 26;
        if n == 0 {
            break;
        }
    }
    digits[..len].reverse();
    SmolStr::new(std::str::from_utf8(&digits[..len]).expect("ascii letters"))
}

impl Iterator for Letters {
    type Item = SmolStr;

    fn next(&mut self) -> Option<SmolStr> {
        let label = label_for_ordinal(self.next);
        self.next += 1;
        Some(label)
    }
}
