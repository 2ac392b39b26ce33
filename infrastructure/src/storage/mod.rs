//! Document storage adapters

mod memory;

pub use memory::InMemoryDocumentRepository;
