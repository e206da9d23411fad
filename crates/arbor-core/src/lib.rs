//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types for the Arbor family tree
//! layout engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Model**: The genealogy domain model ([`model`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod model;
