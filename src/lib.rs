//! HTTP client and CLI for the GoCMS admin API.
//!
//! The admin API manages the posts, pages, and images of a GoCMS instance.
//! This crate provides typed request builders for those endpoints together
//! with the command handlers behind the `gocms-client` binary.

pub mod http;

pub use http::cli::{Cli, Commands, handle_cli_command};
pub use http::common::*;
