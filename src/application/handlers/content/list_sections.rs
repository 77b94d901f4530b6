//! ListSectionsHandler - Query handler for the section summary list.

use std::sync::Arc;

use crate::domain::prd::SectionSummary;
use crate::ports::ContentSource;

/// Handler returning section summaries in display order.
pub struct ListSectionsHandler {
    source: Arc<dyn ContentSource>,
}

impl ListSectionsHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Vec<SectionSummary> {
        self.source.section_summaries().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeedContentSource;
    use crate::domain::content::SectionId;

    #[tokio::test]
    async fn summaries_cover_every_section_in_order() {
        let handler = ListSectionsHandler::new(Arc::new(SeedContentSource::new()));
        let summaries = handler.handle().await;
        let ids: Vec<SectionId> = summaries.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }
}
