//! crudgen - scaffold CRUD containers into React Native projects
//!
//! Given a name, crudgen renders a container, reducer, sagas, API module and
//! their tests, then inserts the lines that wire them into the existing
//! Redux index, Sagas index, fixture API, service API and (optionally) the
//! navigation root.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Gate → Plan → Preflight → Execute lifecycle, anchor patcher,
//!   template renderer
//! - [`core`] - Identifier casing, project paths, configuration
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. A blank name never touches disk
//! 2. An existing container is never overwritten
//! 3. Nothing is written unless every insertion point is present
//! 4. Every executed step is reported, including failures

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
