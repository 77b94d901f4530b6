//! GetNavigationHandler - Query handler for the navigation shell.

use std::sync::Arc;

use crate::domain::prd::NavigationItem;
use crate::ports::ContentSource;

/// Handler returning the navigation entries. Pure pass-through: the
/// pipeline neither generates nor validates routes.
pub struct GetNavigationHandler {
    source: Arc<dyn ContentSource>,
}

impl GetNavigationHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Vec<NavigationItem> {
        self.source.navigation().await
    }
}
