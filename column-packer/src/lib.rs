//! A headless masonry ("Pinterest") grid layout engine.
//!
//! For host-level utilities (viewport tracking, automatic invalidation, scroll-to helpers),
//! see the `column-packer-adapter` crate.
//!
//! Given a column count and a sequence of items whose heights come from a caller-provided
//! measurement callback, [`ColumnPacker`] appends every item to the currently shortest column
//! and caches the resulting rectangles. The cache answers visible-rect queries and the total
//! content size until the host invalidates it.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the available content width
//! - a [`Measure`] implementation (photo + annotation height per item)
//! - an `invalidate()` call whenever any of those inputs change
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod measure;
mod packer;
mod state;
mod types;


pub use config::{ColumnStrategy, LayoutConfig};
pub use error::{Error, InvalidConfiguration};
pub use measure::{Measure, SplitMeasure};
pub use packer::ColumnPacker;
pub use state::LayoutSnapshot;
pub use types::{ItemGeometry, ItemHeights, Rect, Size};
