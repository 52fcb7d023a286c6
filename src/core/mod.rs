//! Core module - Business logic
//!
//! Workspace creation, template copying and memory notes.

pub mod error;
pub mod memory;
pub mod slug;
pub mod template;
pub mod workspace;
