//! core
//!
//! Core domain types and configuration for crudgen.
//!
//! # Modules
//!
//! - [`naming`] - Identifier validation and casing forms
//! - [`paths`] - Centralized path routing for the project tree
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at construction time
//! - Schemas are strict and reject unknown fields
//! - Nothing in this module writes to the project tree

pub mod config;
pub mod naming;
pub mod paths;
