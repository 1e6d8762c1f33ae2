// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The provider trait consumed by host applications.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::context::EvaluationContext;
use crate::resolution::ResolutionDetails;

/// Static identity of a provider implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
	pub name: &'static str,
}

/// Lifecycle state of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderStatus {
	/// Construction has not completed.
	NotReady,
	/// The provider holds a live session and can serve evaluations.
	Ready,
	/// The provider has been placed into a degraded state.
	Error,
}

/// Marker trait for evaluation lifecycle hooks.
///
/// The Arbor provider registers no hooks; the method exists on the trait so
/// hosts can interrogate any provider uniformly.
pub trait Hook: Send + Sync {}

/// A source of typed flag values.
///
/// Implementations must be shareable across tasks: evaluation methods take
/// `&self` and may be called concurrently.
#[async_trait]
pub trait FeatureProvider: Send + Sync {
	/// Returns the provider's static identity.
	fn metadata(&self) -> ProviderMetadata;

	/// Returns the provider's current lifecycle state.
	fn status(&self) -> ProviderStatus {
		ProviderStatus::Ready
	}

	/// Returns the hooks registered by this provider.
	fn hooks(&self) -> Vec<Arc<dyn Hook>> {
		Vec::new()
	}

	async fn resolve_bool_value(
		&self,
		flag_key: &str,
		default_value: bool,
		context: &EvaluationContext,
	) -> ResolutionDetails<bool>;

	async fn resolve_string_value(
		&self,
		flag_key: &str,
		default_value: &str,
		context: &EvaluationContext,
	) -> ResolutionDetails<String>;

	async fn resolve_int_value(
		&self,
		flag_key: &str,
		default_value: i64,
		context: &EvaluationContext,
	) -> ResolutionDetails<i64>;

	async fn resolve_float_value(
		&self,
		flag_key: &str,
		default_value: f64,
		context: &EvaluationContext,
	) -> ResolutionDetails<f64>;

	async fn resolve_object_value(
		&self,
		flag_key: &str,
		default_value: serde_json::Value,
		context: &EvaluationContext,
	) -> ResolutionDetails<serde_json::Value>;
}
