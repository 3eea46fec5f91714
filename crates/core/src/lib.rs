//! Lexsight Core
//!
//! Foundational error types and the tool abstraction for the Lexsight
//! workspace. This crate has zero dependencies on application-level code
//! (HTTP clients, LLM providers, PDF parsing).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `tool` - Tool abstraction (`Tool`, `ToolRegistry`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/async-trait/thiserror**
//! 2. **Trait-based abstractions** - capabilities are injected, enabling
//!    stub implementations in tests
//! 3. **Unidirectional dependency** - this crate depends on nothing else
//!    in the workspace

pub mod error;
pub mod tool;

pub use error::{CoreError, CoreResult};
pub use tool::{Tool, ToolRegistry};
