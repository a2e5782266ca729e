// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The dispatch and response pipeline.
//!
//! [`ResourceHandler::handle`] turns one lifecycle event into exactly one
//! delivered callback response. Hook failures are captured at the dispatch
//! boundary and reported through the normal response path; only a delivery
//! fault propagates to the invoker.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::error::DeliveryError;
use crate::event::ResourceEvent;
use crate::provider::ResourceProvider;
use crate::responder::{Responder, SharedResponder};
use crate::response::{CallbackResponse, Outcome};

/// Reason reported when the event's kind tag is outside the recognized set.
const UNRECOGNIZED_KIND_REASON: &str = "Could not understand Request Type";

/// Reason reported when a hook fails. The hook's own error text is logged
/// but never delivered.
const HOOK_FAULT_REASON: &str = "Unknown Error";

/// Drives one lifecycle event through dispatch, outcome assembly, and
/// delivery.
///
/// The handler owns the physical resource identifier it stamps onto every
/// outcome, holds the provider supplying the operation hooks, and delivers
/// through an injectable [`Responder`]. It keeps no per-invocation state, so
/// concurrent invocations of one handler are independent.
pub struct ResourceHandler<H> {
	physical_resource_id: String,
	provider: H,
	responder: SharedResponder,
}

impl<H: ResourceProvider> ResourceHandler<H> {
	/// Creates a handler with the given identity, provider, and responder.
	pub fn new(
		physical_resource_id: impl Into<String>,
		provider: H,
		responder: impl Responder + 'static,
	) -> Self {
		Self {
			physical_resource_id: physical_resource_id.into(),
			provider,
			responder: Arc::new(responder),
		}
	}

	/// The identity stamped onto every outcome this handler delivers.
	pub fn physical_resource_id(&self) -> &str {
		&self.physical_resource_id
	}

	/// Handles one lifecycle event.
	///
	/// Dispatches to the matching hook, stamps the partial outcome into a
	/// complete response, and delivers it to the event's callback URL. Hook
	/// failures and unrecognized kinds surface as `FAILED` responses through
	/// the normal delivery path; this method itself only fails on a delivery
	/// fault, since the callback is the one remaining channel for reporting
	/// anything else.
	///
	/// An event with an empty callback URL still runs its hook, but the
	/// delivery step is skipped and logged.
	#[tracing::instrument(
		skip_all,
		fields(request_id = %event.request_id(), request_type = %event.kind())
	)]
	pub async fn handle(&self, event: ResourceEvent<H::Properties>) -> Result<(), DeliveryError> {
		let response_url = event.response_url().to_owned();
		let stack_id = event.stack_id().to_owned();
		let request_id = event.request_id().to_owned();
		let logical_resource_id = event.logical_resource_id().to_owned();

		let outcome = self.dispatch(event).await;

		let response = CallbackResponse {
			status: outcome.status,
			reason: outcome.reason,
			no_echo: outcome.no_echo,
			data: outcome.data,
			physical_resource_id: self.physical_resource_id.clone(),
			stack_id,
			request_id,
			logical_resource_id,
		};

		if response_url.is_empty() {
			warn!("event carries no callback URL, skipping delivery");
			return Ok(());
		}

		self.responder.deliver(&response_url, &response).await?;
		debug!(status = ?response.status, "outcome delivered");
		Ok(())
	}

	/// Routes the event to the matching hook and captures any failure.
	async fn dispatch(&self, event: ResourceEvent<H::Properties>) -> Outcome {
		let result = match event {
			ResourceEvent::Create(e) => self.provider.create(e).await,
			ResourceEvent::Update(e) => self.provider.update(e).await,
			ResourceEvent::Delete(e) => self.provider.delete(e).await,
			ResourceEvent::Unrecognized(e) => {
				warn!(request_type = %e.request_type, "unrecognized request type");
				return Outcome::failed(UNRECOGNIZED_KIND_REASON);
			}
		};

		match result {
			Ok(outcome) => outcome,
			Err(err) => {
				error!(error = %err, "provisioning hook failed");
				Outcome::failed(HOOK_FAULT_REASON)
			}
		}
	}
}
