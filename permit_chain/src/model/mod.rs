//! Delegate model.
//!
//! This module defines the capability contract implemented by every link in
//! the chain.

mod delegate;

pub use delegate::ReleaseDelegate;
