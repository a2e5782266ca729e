// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the cloudhook custom-resource toolkit.
//!
//! This crate provides the lifecycle event model, the outcome/response
//! model, the operation hook trait, the delivery seam, and the dispatch
//! pipeline. It is transport-free; the `cloudhook` crate supplies the HTTP
//! responder that performs the actual callback delivery.
//!
//! # Overview
//!
//! An orchestrator sends a lifecycle event (resource create, update, or
//! delete) carrying a callback URL. [`ResourceHandler::handle`] routes the
//! event to the matching [`ResourceProvider`] hook, captures any hook
//! failure, stamps the partial [`Outcome`] into a complete
//! [`CallbackResponse`], and delivers it through a [`Responder`]. Exactly one
//! response reaches the callback per invocation, success or failure alike.
//!
//! # Example
//!
//! ```
//! use cloudhook_core::{Outcome, OutcomeStatus};
//!
//! let outcome = Outcome::success().with_data(serde_json::json!({"Arn": "widget-42"}));
//! assert_eq!(outcome.status, OutcomeStatus::Success);
//! assert!(outcome.data.is_some());
//! ```

pub mod error;
pub mod event;
pub mod handler;
pub mod provider;
pub mod responder;
pub mod response;

pub use error::{DeliveryError, Result};
pub use event::{CreateEvent, DeleteEvent, ResourceEvent, UnrecognizedEvent, UpdateEvent};
pub use handler::ResourceHandler;
pub use provider::{HookError, ResourceProvider};
pub use responder::{Responder, SharedResponder};
pub use response::{CallbackResponse, Outcome, OutcomeStatus};
