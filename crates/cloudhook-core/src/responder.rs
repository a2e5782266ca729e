// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The delivery seam between the handler and the callback transport.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::response::CallbackResponse;

/// Delivers one completed callback response to one callback URL.
///
/// A responder is a pure transport adapter: it performs no interpretation of
/// the response contents and holds no state of its own, so one instance can
/// be shared across invocations without synchronization. It makes a single
/// delivery attempt; retry policy, if any, belongs to the caller.
///
/// Tests substitute a capturing implementation here instead of performing
/// network I/O.
#[async_trait]
pub trait Responder: Send + Sync {
	/// Deliver `response` to `response_url`.
	///
	/// Resolves once the peer has accepted the write. Fails with
	/// [`DeliveryError::Transport`] when the connection cannot be
	/// established, is reset, or the address does not resolve.
	async fn deliver(
		&self,
		response_url: &str,
		response: &CallbackResponse,
	) -> Result<(), DeliveryError>;
}

/// Shared reference to a responder implementation.
pub type SharedResponder = Arc<dyn Responder>;

#[async_trait]
impl<R: Responder + ?Sized> Responder for Arc<R> {
	async fn deliver(
		&self,
		response_url: &str,
		response: &CallbackResponse,
	) -> Result<(), DeliveryError> {
		(**self).deliver(response_url, response).await
	}
}
