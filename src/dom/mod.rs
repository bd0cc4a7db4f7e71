//! Document Model
//!
//! In-memory stand-in for the browser document: an arena of elements
//! addressed by [`NodeId`], plus the document title and viewport. The
//! feature controllers observe and mutate pages exclusively through this
//! seam, so the whole runtime stays testable without a browser.

pub mod document;
pub mod element;

pub use document::{Document, Viewport};
pub use element::{Element, NodeId};
