//! Unit tests for the logship CLI
//!
//! These tests drive the application services through recording fakes and
//! run fast without network I/O. `remote_clients` exercises the HTTP clients
//! against a local mock server.

mod architecture;
mod provider_secrets;
