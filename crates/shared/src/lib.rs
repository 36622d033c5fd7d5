//! Domain vocabulary shared by the catalog, the view-model and the front end.

pub mod domain;
pub mod error;
pub mod navigation;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
