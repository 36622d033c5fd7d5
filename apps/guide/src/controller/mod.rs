//! Controller layer: user actions, reducer-like state transitions, and the browse loop.

pub mod events;
pub mod orchestration;
pub mod reducer;

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
