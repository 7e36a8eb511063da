//! Backend Access
//!
//! Browser implementation of the trending API.

pub mod client;

pub use client::GlooClient;
