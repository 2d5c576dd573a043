//! Jupiter adapter
//!
//! Implementation of the token data client against the Jupiter REST API.

pub mod client;

pub use client::JupiterClient;
