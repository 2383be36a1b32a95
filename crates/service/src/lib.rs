//! Service layer owning the in-memory registry of students and classes.
//! - `registry::RegistryStore` is the seam the HTTP layer talks to.
//! - `registry::InMemoryRegistry` keeps all state behind one lock.

pub mod errors;
pub mod registry;
#[cfg(test)]
pub mod test_support;
