//! Storefront Cart
//!
//! Client-side shopping cart for a static storefront.
//!
//! This library provides:
//! - A cart persisted to browser storage, re-validated on every read
//! - Cart and checkout views with running totals
//! - Search-text and category filtering of the product listing
//! - A persisted light/dark theme toggle
//! - Web UI (Dioxus fullstack: SSR + WASM hydration)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Framework-free core (natively testable)
pub mod cart;
pub mod catalog;
pub mod notify;
pub mod storage;
pub mod theme;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
