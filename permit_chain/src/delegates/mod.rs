//! Release-scoped delegate links.
//!
//! One link per release boundary at which permission semantics changed.
//! Each link answers only for the categories that changed at its boundary
//! and defers to the next-older link for everything else; the base link is
//! total and terminates every call.

mod api26;
mod api29;
mod api30;
mod api31;
mod api33;
mod base;

pub use api26::DelegateV26;
pub use api29::DelegateV29;
pub use api30::DelegateV30;
pub use api31::DelegateV31;
pub use api33::DelegateV33;
pub use base::BaseDelegate;
