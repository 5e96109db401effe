// ABOUTME: Grocery list view model and plain-text export
// ABOUTME: Bulleted share text and the ShareTarget seam for delivering it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::constants::messages;
use crate::errors::AppResult;
use crate::models::Plan;

/// Destination for exported text (share sheet, file, stdout)
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Deliver `text`
    async fn share(&self, text: &str) -> AppResult<()>;
}

/// Grocery list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroceryListView {
    /// Items as display text
    pub items: Vec<String>,
}

impl GroceryListView {
    /// Build the view from the plan's grocery list
    #[must_use]
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            items: plan.grocery_list.clone(),
        }
    }

    /// No items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Export text: a title, a blank line, one bullet per item, trailing newline
    #[must_use]
    pub fn share_text(&self) -> String {
        if self.items.is_empty() {
            return messages::GROCERY_EXPORT_EMPTY.to_owned();
        }
        let bullets: Vec<String> = self.items.iter().map(|item| format!("• {item}")).collect();
        format!("{}\n\n{}\n", messages::GROCERY_EXPORT_TITLE, bullets.join("\n"))
    }

    /// Send the export text to `target`
    ///
    /// # Errors
    ///
    /// Returns whatever error the target reports
    pub async fn share(&self, target: &dyn ShareTarget) -> AppResult<()> {
        target.share(&self.share_text()).await?;
        info!(items = self.items.len(), "Grocery list shared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text() {
        let view = GroceryListView {
            items: vec!["Oats".into(), "2".into()],
        };
        assert_eq!(view.share_text(), "Grocery List\n\n• Oats\n• 2\n");
        assert_eq!(GroceryListView::default().share_text(), "Grocery List is empty.");
    }
}
