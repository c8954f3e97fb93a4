//! Form store module
//!
//! This module provides the [`AccountFormStore`], which owns the committed
//! account list and the editable rows bound to the form, keeps them index
//! aligned, and commits edited rows through the persistence gateway.

mod form;

pub use form::{AccountFormStore, SaveOutcome};
