//! Request-body encoding and the one-shot HTTP POST client.
pub mod client;
pub mod encode;


pub use client::RequestClient;
pub use encode::{Envelope, escape, form_body};
