// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match-to-entity extraction.

use crate::entity::{NamedEntity, NamedEntityList, Span};
use crate::pattern::CompiledEntityGroup;

impl CompiledEntityGroup {
    /// Extract every non-overlapping term match from `text`, in order.
    pub fn extract(&self, text: &str) -> NamedEntityList {
        let mut entities = NamedEntityList::new();
        for caps in self.regex().captures_iter(text) {
            let (Some(whole), Some(term)) = (caps.get(0), self.matched_term(&caps)) else {
                continue;
            };
            entities.append(NamedEntity::new(
                &self.names()[term],
                self.name(),
                whole.as_str(),
                Span::new(whole.start(), whole.end()),
            ));
        }
        tracing::trace!(
            group = self.name(),
            bytes = text.len(),
            found = entities.len(),
            "extracted entities"
        );
        entities
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
