//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`layout`] - Well offsets of a plate
//! - [`decode`] - Layer id to well link
//! - [`view`] - Initial view state of an image
//! - [`probe`] - Fetch a tile from a synthetic pyramid

pub mod decode;
pub mod layout;
pub mod probe;
pub mod view;
