//! Host adapter utilities for the `column-packer` crate.
//!
//! The `column-packer` crate is UI-agnostic and only does the packing math plus its cache. This
//! crate provides a small, framework-neutral [`Controller`] that most hosts end up writing:
//!
//! - tracking item count, column count, padding, insets and viewport size
//! - invalidating the packer only when one of those inputs actually changes
//! - answering "what is visible at this scroll offset" and scroll-to-item queries
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;
mod types;


pub use controller::Controller;
pub use options::ControllerOptions;
pub use types::{Align, Insets, Viewport};
