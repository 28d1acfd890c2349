//! Reusable test suites for backend implementations


pub use storage::StorageBackendTestSuite;
