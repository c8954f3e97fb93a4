//! Property test modules

mod mapper_tests;
mod store_invariant_tests;
mod validation_tests;
