//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the platform GraphQL API,
//! the machines API, the configuration file, and terminal prompts.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod graphql;
pub mod http;
pub mod machines;
pub mod prompt;
