//! Integration test modules

mod file_store_scenarios;
mod validation_scenarios;
