// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client builder with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates an HTTP client builder with the standard Arbor User-Agent header.
///
/// The User-Agent format is: `arbor/{crate_version}`
/// Example: `arbor/0.1.0`
pub(crate) fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard Arbor User-Agent string.
pub(crate) fn user_agent() -> String {
	format!("arbor/{}", env!("CARGO_PKG_VERSION"))
}
