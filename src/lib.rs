//! Leptos 0.7 CSR pitch site for the Cognitive Requirement Fabric
//!
//! This crate renders the CRF hackathon pitch as a client-side rendered
//! single page compiled to WASM. All copy, chart figures, and walkthrough
//! text are hardcoded catalog data; the only runtime state is the scripted
//! live-demo walkthrough.
//!
//! ## Module Structure
//! - `app`: Main application component (header, footer, modal host)
//! - `router`: Route definitions and navigation
//! - `pages`: Top-level page components
//! - `models`: Static content catalogs (copy, charts, flow graph, steps)
//! - `demo`: Walkthrough state machine and its timer controller
//! - `components`: Page sections, the shared step view, canvas helpers
//! - `error`: Error types for the fallible canvas paths

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod demo;
pub mod error;
pub mod models;
pub mod pages;
pub mod router;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
