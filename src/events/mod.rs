//! Lifecycle events and the bus that fans them out.
//!
//! Submodules:
//! - [`lifecycle`] – the event kinds published by the shell
//! - [`bus`] – subscribe, unsubscribe and synchronous publish
pub mod bus;
pub mod lifecycle;
