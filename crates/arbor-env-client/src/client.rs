// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Arbor Environments API client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::{EnvError, Result};
use crate::http;
use crate::value::{Property, PropertyResponse};

/// Production base URL of the Arbor Environments service.
pub const DEFAULT_BASE_URL: &str = "https://api.arbor.dev";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration with documented defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Base URL of the service. Defaults to [`DEFAULT_BASE_URL`]; override
	/// for self-hosted or test deployments.
	pub base_url: String,
	/// Per-request timeout. Defaults to 30 seconds. A timed-out request
	/// surfaces as [`EnvError::Network`].
	pub timeout: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Client for the Arbor Environments service.
///
/// Holds no session state; session ids obtained from [`open_environment`]
/// are passed back in on each read. Cloning is cheap and clones share the
/// underlying connection pool.
///
/// [`open_environment`]: EnvClient::open_environment
#[derive(Debug, Clone)]
pub struct EnvClient {
	http_client: Client,
	base_url: String,
}

/// An opened environment session.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenEnvironment {
	/// Session identifier to present on subsequent property reads.
	pub id: String,
}

impl EnvClient {
	/// Creates a new client from the given configuration.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let http_client = http::builder().timeout(config.timeout).build()?;

		Ok(Self {
			http_client,
			base_url: config.base_url.trim_end_matches('/').to_string(),
		})
	}

	/// Opens a session against the named environment.
	///
	/// This is the one call allowed to authenticate; a bad token or unknown
	/// environment fails here, not at read time. No retry is performed.
	#[instrument(skip(self, access_token), fields(org = %org, project = %project, env = %env))]
	pub async fn open_environment(
		&self,
		access_token: &str,
		org: &str,
		project: &str,
		env: &str,
	) -> Result<OpenEnvironment> {
		let url = format!(
			"{}/api/environments/{org}/{project}/{env}/open",
			self.base_url
		);
		debug!(url = %url, "Opening environment session");

		let response = self
			.http_client
			.post(&url)
			.header("Authorization", format!("token {access_token}"))
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "Network error opening environment");
				EnvError::Network(e)
			})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = %status, body = %body, "Failed to open environment");
			return Err(EnvError::from_api_response(status.as_u16(), body));
		}

		let opened: OpenEnvironment = response.json().await.map_err(|e| {
			error!(error = %e, "Failed to decode open-environment response");
			EnvError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(session_id = %opened.id, "Environment session opened");
		Ok(opened)
	}

	/// Reads a single property out of an opened environment.
	///
	/// `path` is a dotted path into the environment's value tree
	/// (e.g. `configs.DEBUG_MODE`). The service is authoritative over
	/// existence and shape; no local validation is performed.
	#[instrument(skip(self, access_token, session_id), fields(org = %org, project = %project, env = %env, path = %path))]
	pub async fn read_property(
		&self,
		access_token: &str,
		org: &str,
		project: &str,
		env: &str,
		session_id: &str,
		path: &str,
	) -> Result<Property> {
		let url = format!(
			"{}/api/environments/{org}/{project}/{env}/open/{session_id}/property",
			self.base_url
		);
		trace!(url = %url, "Reading environment property");

		let response = self
			.http_client
			.get(&url)
			.header("Authorization", format!("token {access_token}"))
			.query(&[("property", path)])
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "Network error reading property");
				EnvError::Network(e)
			})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			debug!(status = %status, body = %body, "Property read returned an error");
			return Err(EnvError::from_api_response(status.as_u16(), body));
		}

		let body: PropertyResponse = response.json().await.map_err(|e| {
			error!(error = %e, "Failed to decode property response");
			EnvError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		Ok(Property::from(body))
	}
}
