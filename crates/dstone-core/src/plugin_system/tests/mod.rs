pub mod dependency_tests;
pub mod loader_tests;
