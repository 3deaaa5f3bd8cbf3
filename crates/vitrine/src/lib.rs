//! Vitrine: AI-assisted marketing website generation and deployment.
//!
//! The binary lives in `main.rs`; this library exposes the CLI types
//! so the command surface is testable.

pub mod cli;
