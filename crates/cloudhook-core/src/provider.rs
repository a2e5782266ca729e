// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The operation hook trait implemented by concrete resource providers.

use async_trait::async_trait;

use crate::event::{CreateEvent, DeleteEvent, UpdateEvent};
use crate::response::Outcome;

/// Error type hooks may fail with.
///
/// Hooks can fail with any error. The handler logs it and reports a generic
/// failure to the callback; the error text itself never leaves the process.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Provisioning logic for one resource type.
///
/// Implement the hooks for the lifecycle operations the resource supports.
/// Every hook defaults to a no-op success, delete included, so a provider
/// only overrides what it needs.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use cloudhook_core::{CreateEvent, HookError, Outcome, ResourceProvider};
///
/// struct WidgetProvider;
///
/// #[async_trait]
/// impl ResourceProvider for WidgetProvider {
///     type Properties = serde_json::Value;
///
///     async fn create(&self, event: CreateEvent) -> Result<Outcome, HookError> {
///         let arn = provision_widget(event.resource_properties).await?;
///         Ok(Outcome::success().with_data(serde_json::json!({ "Arn": arn })))
///     }
/// }
/// ```
#[async_trait]
pub trait ResourceProvider: Send + Sync {
	/// Property schema for this resource type.
	type Properties: Send + 'static;

	/// Provision a new resource.
	async fn create(&self, event: CreateEvent<Self::Properties>) -> Result<Outcome, HookError> {
		let _ = event;
		Ok(Outcome::success())
	}

	/// Reconfigure an existing resource.
	async fn update(&self, event: UpdateEvent<Self::Properties>) -> Result<Outcome, HookError> {
		let _ = event;
		Ok(Outcome::success())
	}

	/// Tear down an existing resource.
	async fn delete(&self, event: DeleteEvent<Self::Properties>) -> Result<Outcome, HookError> {
		let _ = event;
		Ok(Outcome::success())
	}
}
