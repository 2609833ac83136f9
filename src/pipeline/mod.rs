//! Pipeline stages for document analysis.
//!
//! Each submodule implements exactly one step.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ llm
//! (upload)   (lopdf)    (completion API)
//! ```
//!
//! 1. [`input`]  : accept one uploaded file and check it is a PDF
//! 2. [`extract`]: concatenate page text; runs in `spawn_blocking`
//! 3. [`llm`]    : system + user message exchange; the only stage with
//!    network I/O

pub mod extract;
pub mod input;
pub mod llm;
