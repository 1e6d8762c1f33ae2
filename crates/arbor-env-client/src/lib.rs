// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client for the Arbor Environments service.
//!
//! The service stores organization / project / environment trees of
//! configuration and secret values. This crate exposes the two calls the
//! flags provider needs: opening a session against a named environment and
//! reading a single property out of it.
//!
//! Remote scalars are decoded exactly once, at this boundary, into the
//! closed [`PropertyValue`] variant. Note the transport quirk: JSON numbers
//! are always decoded as `f64`, so integer-valued properties surface as
//! `PropertyValue::Number` and callers narrow by truncation.
//!
//! # Example
//!
//! ```no_run
//! use arbor_env_client::{ClientConfig, EnvClient};
//!
//! # async fn run() -> Result<(), arbor_env_client::EnvError> {
//! let client = EnvClient::new(ClientConfig::default())?;
//! let session = client
//! 	.open_environment("arbr_token", "acme", "payments", "prod")
//! 	.await?;
//! let property = client
//! 	.read_property("arbr_token", "acme", "payments", "prod", &session.id, "configs.DEBUG_MODE")
//! 	.await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http;
mod value;

pub use client::{ClientConfig, EnvClient, OpenEnvironment, DEFAULT_BASE_URL};
pub use error::{EnvError, Result};
pub use value::{Property, PropertyValue};
