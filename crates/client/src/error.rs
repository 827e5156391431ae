// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::service::ServiceError;
use crate::wire::WireError;
use skyroster::SafetyViolation;
use skyroster_domain::DomainError;

/// Errors surfaced by the roster reconciler.
///
/// Canonical state is never cleared on failure: the snapshot present
/// before a failed operation remains readable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// No flight is currently open.
    NoOpenFlight,
    /// The bearer credential was rejected; the operator must
    /// re-authenticate.
    SessionExpired,
    /// A safety rule rejected the operation locally. No state change
    /// was made and no remote call was attempted.
    Safety(SafetyViolation),
    /// The service rejected the operation with structured reasons,
    /// preserved verbatim.
    Rejected {
        /// The server-provided reasons, in server order.
        details: Vec<String>,
    },
    /// A generic remote failure. The previous snapshot is retained.
    Remote(String),
    /// The response payload could not be normalized.
    InvalidPayload(String),
    /// A local domain rule rejected the operation.
    Domain(DomainError),
    /// A newer open-flight intent was issued while this operation was
    /// in flight; its response was discarded, not applied.
    Superseded,
}

impl ReconcileError {
    /// Joins rejection details into one display string.
    #[must_use]
    pub fn details_joined(&self) -> Option<String> {
        match self {
            Self::Rejected { details } => Some(details.join("\n")),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpenFlight => write!(f, "No flight is currently open"),
            Self::SessionExpired => write!(f, "Session expired. Please login again."),
            Self::Safety(violation) => write!(f, "Safety violation: {violation}"),
            Self::Rejected { details } => {
                write!(f, "Update failed: {}", details.join("; "))
            }
            Self::Remote(msg) => write!(f, "Could not reach the roster service: {msg}"),
            Self::InvalidPayload(msg) => write!(f, "Malformed service response: {msg}"),
            Self::Domain(err) => write!(f, "{err}"),
            Self::Superseded => {
                write!(f, "Response discarded: a newer request was issued")
            }
        }
    }
}

impl std::error::Error for ReconcileError {}

impl From<ServiceError> for ReconcileError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => Self::Remote(String::from("roster not found")),
            ServiceError::Unauthorized => Self::SessionExpired,
            ServiceError::Rejected { details } => Self::Rejected { details },
            ServiceError::Transport(msg) => Self::Remote(msg),
        }
    }
}

impl From<SafetyViolation> for ReconcileError {
    fn from(violation: SafetyViolation) -> Self {
        Self::Safety(violation)
    }
}

impl From<WireError> for ReconcileError {
    fn from(err: WireError) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

impl From<DomainError> for ReconcileError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
