//! Diagram rendering.
//!
//! A diagram is rendered by substituting `{{ key }}` (value with unit) and
//! `{{ key_raw }}` (bare value) placeholders with the selected row. For older
//! diagrams, a compatibility pass also sets the text of elements whose id is
//! `val_<key>`.

#![deny(unsafe_code)]

pub mod engine;
pub mod legacy;
pub mod placeholder;

pub use engine::{RenderOptions, TemplateEngine, render};
