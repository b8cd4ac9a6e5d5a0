//! Core library for claudius
//!
//! This crate implements the **Functional Core** of the claudius application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`claudius_core`** (this crate): Pure transformation functions with zero I/O
//! - **`claudius`**: File loading, process execution and console output (the Imperative Shell)
//!
//! Everything that decides *what* gets sent to the assistant lives here: the
//! prompt layout, the image MIME table, data URI encoding, the container exec
//! arguments and how a process outcome becomes the response text and exit code.
//! The shell only reads bytes from disk, runs the process and prints.
//!
//! # Module Organization
//!
//! - [`consult`]: Prompt assembly and the assistant invocation contract
//!
//! # Example Usage
//!
//! ```rust
//! use claudius_core::consult::{build_prompt, ConsultRequest, FileContent};
//!
//! let request = ConsultRequest {
//!     instruction: "Why is this not working?".to_string(),
//!     files: vec![FileContent {
//!         path: "src/main.rs".to_string(),
//!         content: "fn main() {}".to_string(),
//!     }],
//!     files_requested: true,
//!     ..Default::default()
//! };
//!
//! let prompt = build_prompt(&request);
//! assert!(prompt.starts_with("## Instruction\nWhy is this not working?"));
//! assert!(prompt.contains("### File: src/main.rs"));
//! ```

pub mod consult;
