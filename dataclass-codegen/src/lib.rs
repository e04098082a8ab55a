//! Shared code emission utilities for the dataclass generator.
//!
//! This crate provides language-agnostic building blocks used by the
//! Go emitter in `dataclass-codegen-go`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code emission primitives (CodeBuilder, CodeFragment, etc.)
//! - [`NamingConvention`] - Reserved word handling for a target language

pub mod builder;
mod naming;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use naming::NamingConvention;
