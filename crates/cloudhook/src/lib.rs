// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Custom-resource provisioning handler SDK.
//!
//! An orchestrator sends a lifecycle event (resource create, update, or
//! delete) carrying a callback URL, and the handler delivers exactly one
//! outcome notification back to that URL via an idempotent HTTP PUT.
//! Implement [`ResourceProvider`] with the provisioning logic for your
//! resource type, then hand events to a handler built with [`http_handler`].
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//! use cloudhook::{http_handler, CreateEvent, HookError, Outcome, ResourceProvider};
//!
//! struct WidgetProvider;
//!
//! #[async_trait]
//! impl ResourceProvider for WidgetProvider {
//!     type Properties = serde_json::Value;
//!
//!     async fn create(&self, event: CreateEvent) -> Result<Outcome, HookError> {
//!         let arn = provision_widget(event.resource_properties).await?;
//!         Ok(Outcome::success().with_data(serde_json::json!({ "Arn": arn })))
//!     }
//! }
//!
//! let handler = http_handler("widget-handler", WidgetProvider);
//! let event = serde_json::from_slice(&raw_event)?;
//! handler.handle(event).await?;
//! ```
//!
//! Hook failures never escape `handle`; they are logged and reported to the
//! callback as `FAILED`. Only a delivery fault propagates, since the
//! callback URL is the one channel for reporting anything else.

mod responder;

pub use cloudhook_core::{
	CallbackResponse, CreateEvent, DeleteEvent, DeliveryError, HookError, Outcome, OutcomeStatus,
	ResourceEvent, ResourceHandler, ResourceProvider, Responder, SharedResponder,
	UnrecognizedEvent, UpdateEvent,
};
pub use responder::HttpResponder;

/// Builds a handler that delivers outcomes through an [`HttpResponder`].
pub fn http_handler<H: ResourceProvider>(
	physical_resource_id: impl Into<String>,
	provider: H,
) -> ResourceHandler<H> {
	ResourceHandler::new(physical_resource_id, provider, HttpResponder::new())
}
