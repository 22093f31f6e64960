//! # Orrery Architecture
//!
//! Orrery keeps a small catalog of celestial bodies (name, distance, mass,
//! orbital period), lets a user add, edit and remove them, saves the catalog
//! to disk after every change, and shows it in a toggle-sorted order.
//!
//! The library is presenter-agnostic. The bundled CLI is one client; it
//! never reaches past the API layer.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, runs the shell session │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store + records + sort toggles                      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, no I/O assumptions             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: records.rs, sort.rs, store/                          │
//! │  - RecordStore, SortEngine, DataStore (FileStore/InMemory)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexes
//!
//! Records have no stable id; they are addressed by position. Any sort or
//! removal invalidates positions captured earlier, so presenters re-render
//! after every call. See [`index`] for the one-based display form.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`records`]: The ordered collection and its invariants
//! - [`sort`]: Bucket sort with per-field direction toggles
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: Core data types (`CelestialBody`, `Field`, `Direction`)
//! - [`index`]: One-based display indexes
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod records;
pub mod sort;
pub mod store;
