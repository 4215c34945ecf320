//! Core library for the `drover` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, request-body encoding, the one-shot HTTP client, and the
//! two operating loops (periodic workload issuance and log forwarding). The
//! primary user-facing interface is the `drover` command-line application;
//! library APIs may evolve as the CLI grows.
pub mod app;
pub mod args;
pub mod error;
pub mod http;
pub mod logger;
