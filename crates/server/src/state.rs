use std::sync::Arc;

use service::registry::{InMemoryRegistry, RegistryStore};

#[derive(Clone)]
pub struct ServerState {
    pub registry: Arc<dyn RegistryStore>,
}

impl ServerState {
    pub fn new(registry: Arc<dyn RegistryStore>) -> Self {
        Self { registry }
    }

    /// Fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRegistry::new())
    }
}
