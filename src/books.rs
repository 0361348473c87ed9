pub mod domain;
pub mod factory;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
