//! Chain assembly and call-time dispatch.
//!
//! This module provides the validated, ordered list of delegate links and
//! the selector that routes calls to the newest link active for the runtime
//! release.

mod links;
mod selector;

pub use links::DelegateChain;
pub use selector::DelegateSelector;
