use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Provider, ProviderFactory, ProviderResolutionError};

/// Wiring-time class-to-instance map. Anything not registered here fails
/// resolution, which in turn fails the whole enumeration it occurs in.
#[derive(Default)]
pub struct StaticProviderFactory {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl StaticProviderFactory {
    pub fn with_provider(mut self, class: impl Into<String>, provider: Arc<dyn Provider>) -> Self {
        self.providers.insert(class.into(), provider);
        self
    }
}

#[async_trait::async_trait]
impl ProviderFactory for StaticProviderFactory {
    async fn resolve(&self, class: &str) -> Result<Arc<dyn Provider>, ProviderResolutionError> {
        self.providers
            .get(class)
            .cloned()
            .ok_or_else(|| ProviderResolutionError {
                class: class.to_string(),
            })
    }
}
