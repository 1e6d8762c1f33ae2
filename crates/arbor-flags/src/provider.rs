// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider construction and the typed evaluation surface.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use arbor_env_client::{ClientConfig, EnvClient, PropertyValue};
use arbor_flags_core::{
	ErrorCode, EvaluationContext, FeatureProvider, FlagType, ProviderMetadata, ProviderStatus,
	ResolutionDetails,
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::Result;
use crate::resolve::{type_mismatch_message, Resolution};

/// Name reported by [`FeatureProvider::metadata`].
pub const PROVIDER_NAME: &str = "ArborFlagsProvider";

/// Object evaluation is a deliberate capability gap, not an oversight.
const OBJECT_EVALUATION_UNIMPLEMENTED: &str = "ObjectEvaluation not implemented";

const STATUS_NOT_READY: u8 = 0;
const STATUS_READY: u8 = 1;
const STATUS_ERROR: u8 = 2;

/// Optional construction settings with documented defaults.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
	/// Overrides the production service endpoint; used for self-hosted or
	/// test deployments. Defaults to
	/// [`arbor_env_client::DEFAULT_BASE_URL`].
	pub endpoint: Option<String>,
	/// Overrides the per-request timeout (default 30 seconds).
	pub timeout: Option<Duration>,
}

/// Feature flags provider bound to one opened Arbor environment.
///
/// Everything except the lifecycle status is immutable after construction,
/// so a single provider can serve concurrent evaluations without locking.
/// Sessions are not closed on drop; explicit teardown is future work.
#[derive(Debug)]
pub struct ArborProvider {
	org: String,
	project: String,
	env: String,
	access_token: String,
	client: EnvClient,
	session_id: String,
	status: AtomicU8,
}

impl ArborProvider {
	/// Opens a session against the named environment and returns a ready
	/// provider.
	///
	/// Performs exactly one remote call, which also authenticates the
	/// token. A failure here is terminal: no provider is returned and no
	/// retry is attempted.
	pub async fn connect(
		org: impl Into<String>,
		project: impl Into<String>,
		env: impl Into<String>,
		access_token: impl Into<String>,
		options: ProviderOptions,
	) -> Result<Self> {
		let org = org.into();
		let project = project.into();
		let env = env.into();
		let access_token = access_token.into();

		let mut config = ClientConfig::default();
		if let Some(endpoint) = options.endpoint {
			config.base_url = endpoint;
		}
		if let Some(timeout) = options.timeout {
			config.timeout = timeout;
		}

		let client = EnvClient::new(config)?;
		let opened = client
			.open_environment(&access_token, &org, &project, &env)
			.await?;
		info!(org = %org, project = %project, env = %env, "Arbor flags provider ready");

		Ok(Self {
			org,
			project,
			env,
			access_token,
			client,
			session_id: opened.id,
			status: AtomicU8::new(STATUS_READY),
		})
	}

	/// Places the provider into the given lifecycle state.
	///
	/// Hosts use this to mark the provider degraded (for example after
	/// deciding its session is no longer usable); evaluations themselves
	/// never change the status.
	pub fn set_status(&self, status: ProviderStatus) {
		debug!(status = ?status, "Provider status changed");
		self.status.store(status_to_u8(status), Ordering::SeqCst);
	}

	pub(crate) fn client(&self) -> &EnvClient {
		&self.client
	}

	pub(crate) fn access_token(&self) -> &str {
		&self.access_token
	}

	pub(crate) fn org(&self) -> &str {
		&self.org
	}

	pub(crate) fn project(&self) -> &str {
		&self.project
	}

	pub(crate) fn env(&self) -> &str {
		&self.env
	}

	pub(crate) fn session_id(&self) -> &str {
		&self.session_id
	}
}

fn status_to_u8(status: ProviderStatus) -> u8 {
	match status {
		ProviderStatus::NotReady => STATUS_NOT_READY,
		ProviderStatus::Ready => STATUS_READY,
		ProviderStatus::Error => STATUS_ERROR,
	}
}

fn status_from_u8(raw: u8) -> ProviderStatus {
	match raw {
		STATUS_READY => ProviderStatus::Ready,
		STATUS_ERROR => ProviderStatus::Error,
		_ => ProviderStatus::NotReady,
	}
}

#[async_trait]
impl FeatureProvider for ArborProvider {
	fn metadata(&self) -> ProviderMetadata {
		ProviderMetadata {
			name: PROVIDER_NAME,
		}
	}

	fn status(&self) -> ProviderStatus {
		status_from_u8(self.status.load(Ordering::SeqCst))
	}

	async fn resolve_bool_value(
		&self,
		flag_key: &str,
		default_value: bool,
		_context: &EvaluationContext,
	) -> ResolutionDetails<bool> {
		match self.resolve_value(flag_key).await {
			Resolution::Value(PropertyValue::Bool(value), metadata) => {
				ResolutionDetails::static_value(value, metadata)
			}
			Resolution::Value(other, _) => ResolutionDetails::error(
				default_value,
				ErrorCode::TypeMismatch,
				type_mismatch_message(flag_key, &other, FlagType::Bool),
			),
			Resolution::Failure(code, message) => {
				ResolutionDetails::error(default_value, code, message)
			}
		}
	}

	async fn resolve_string_value(
		&self,
		flag_key: &str,
		default_value: &str,
		_context: &EvaluationContext,
	) -> ResolutionDetails<String> {
		match self.resolve_value(flag_key).await {
			Resolution::Value(PropertyValue::String(value), metadata) => {
				ResolutionDetails::static_value(value, metadata)
			}
			Resolution::Value(other, _) => ResolutionDetails::error(
				default_value.to_string(),
				ErrorCode::TypeMismatch,
				type_mismatch_message(flag_key, &other, FlagType::String),
			),
			Resolution::Failure(code, message) => {
				ResolutionDetails::error(default_value.to_string(), code, message)
			}
		}
	}

	async fn resolve_int_value(
		&self,
		flag_key: &str,
		default_value: i64,
		_context: &EvaluationContext,
	) -> ResolutionDetails<i64> {
		match self.resolve_value(flag_key).await {
			// The transport decodes every number as f64; integer flags
			// narrow by truncation rather than rejecting a fractional part.
			Resolution::Value(PropertyValue::Number(value), metadata) => {
				ResolutionDetails::static_value(value as i64, metadata)
			}
			Resolution::Value(other, _) => ResolutionDetails::error(
				default_value,
				ErrorCode::TypeMismatch,
				type_mismatch_message(flag_key, &other, FlagType::Int),
			),
			Resolution::Failure(code, message) => {
				ResolutionDetails::error(default_value, code, message)
			}
		}
	}

	async fn resolve_float_value(
		&self,
		flag_key: &str,
		default_value: f64,
		_context: &EvaluationContext,
	) -> ResolutionDetails<f64> {
		match self.resolve_value(flag_key).await {
			Resolution::Value(PropertyValue::Number(value), metadata) => {
				ResolutionDetails::static_value(value, metadata)
			}
			Resolution::Value(other, _) => ResolutionDetails::error(
				default_value,
				ErrorCode::TypeMismatch,
				type_mismatch_message(flag_key, &other, FlagType::Float),
			),
			Resolution::Failure(code, message) => {
				ResolutionDetails::error(default_value, code, message)
			}
		}
	}

	async fn resolve_object_value(
		&self,
		_flag_key: &str,
		default_value: serde_json::Value,
		_context: &EvaluationContext,
	) -> ResolutionDetails<serde_json::Value> {
		ResolutionDetails::error(
			default_value,
			ErrorCode::General,
			OBJECT_EVALUATION_UNIMPLEMENTED,
		)
	}
}
