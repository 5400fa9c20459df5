//! Scene schema registry.
//!
//! Owns the closed set of scene variants and turns slot-resolved candidates into strict
//! [`crate::RenderableItem`] values.

pub(crate) mod error;
pub(crate) mod fields;
pub(crate) mod theme;
pub(crate) mod validate;
