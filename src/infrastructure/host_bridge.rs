//! JSON call surface for host runtimes.
//!
//! Embedding hosts speak a dynamically-typed calling convention: an operation
//! name plus a positional argument list whose arity and types are only known
//! at run time.  The bridge exposes that convention as a JSON request/response
//! pair and performs the validation a statically-typed Rust caller gets from
//! the compiler:
//!
//! ```json
//! {"op":"lockCursor","args":[0, 0, 1080, 600]}   →  {"status":"ok"}
//! {"op":"lockCursor","args":[0, 0]}              →  {"status":"error","kind":"invalid_argument",...}
//! {"op":"unlockCursor"}                          →  {"status":"ok"}
//! ```
//!
//! # Argument coercion
//!
//! `lockCursor` requires exactly four numeric arguments.  Each is coerced to
//! `i32` with the host runtime's ToInt32 rules (truncate toward zero, wrap
//! modulo 2^32, non-finite → 0) — fractional inputs are coerced, not rejected.
//! Arity and type violations fail fast with `invalid_argument` and leave the
//! confinement state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::application::confinement::{ConfinementController, ConfinementError};
use crate::domain::region::ConfinementRegion;

// ── Request / response types ──────────────────────────────────────────────────

/// All operations a host can invoke on the bridge.
///
/// # Serde representation
///
/// The `"op"` field selects the variant; remaining fields are flattened into
/// the same object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum HostRequest {
    /// Confine the cursor to `args = [x, y, width, height]`.
    ///
    /// `args` is kept as raw JSON values so the bridge — not serde — can
    /// report arity and type violations in the host's terms.
    LockCursor {
        #[serde(default)]
        args: Vec<serde_json::Value>,
    },

    /// Release any active confinement.
    UnlockCursor,
}

/// Error classification reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostErrorKind {
    /// Wrong arity, a non-numeric argument, degenerate geometry, or an
    /// unparseable request.
    InvalidArgument,
    /// The platform rejected the confinement call.
    Platform,
}

/// Outcome of a host call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HostResponse {
    /// The operation succeeded.  Lock and unlock produce no other value.
    Ok,
    /// The operation failed; `kind` tells the host whether its own call was
    /// malformed or the platform refused it.
    Error {
        kind: HostErrorKind,
        message: String,
    },
}

/// Errors raised while validating and executing a host call.
#[derive(Debug, Error)]
pub enum HostCallError {
    /// `lockCursor` takes exactly four arguments.
    #[error("expected {expected} arguments, got {got}")]
    WrongArity { expected: usize, got: usize },

    /// An argument was not a JSON number.
    #[error("argument {index} is not a number")]
    NotANumber { index: usize },

    /// The request body was not valid JSON or not a known operation.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The controller rejected or failed the operation.
    #[error(transparent)]
    Confinement(#[from] ConfinementError),
}

impl HostCallError {
    fn kind(&self) -> HostErrorKind {
        match self {
            HostCallError::WrongArity { .. }
            | HostCallError::NotANumber { .. }
            | HostCallError::MalformedRequest(_)
            | HostCallError::Confinement(ConfinementError::InvalidArgument(_)) => {
                HostErrorKind::InvalidArgument
            }
            HostCallError::Confinement(ConfinementError::Platform(_)) => HostErrorKind::Platform,
        }
    }
}

// ── Coercion ──────────────────────────────────────────────────────────────────

/// Coerces a host number to `i32` using ECMA-style ToInt32 semantics:
/// truncate toward zero, wrap modulo 2^32, and map NaN/±∞ to 0.
fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    // After trunc the value is integral, and rem_euclid keeps it in
    // [0, 2^32), where every integer is exactly representable as f64.
    let wrapped = value.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32 as i32
}

// ── Bridge ────────────────────────────────────────────────────────────────────

/// Translates host calls into controller operations.
pub struct HostBridge {
    controller: ConfinementController,
}

impl HostBridge {
    /// Creates a bridge in front of the given controller.
    pub fn new(controller: ConfinementController) -> Self {
        Self { controller }
    }

    /// Parses and executes a raw JSON request, always producing a response.
    ///
    /// Malformed JSON and unknown operations become `invalid_argument` error
    /// responses rather than surfacing serde errors to the host.
    pub fn handle_raw(&self, raw: &str) -> HostResponse {
        match serde_json::from_str::<HostRequest>(raw) {
            Ok(request) => self.handle(&request),
            Err(e) => error_response(&HostCallError::MalformedRequest(e.to_string())),
        }
    }

    /// Executes a parsed host request.
    pub fn handle(&self, request: &HostRequest) -> HostResponse {
        let result = match request {
            HostRequest::LockCursor { args } => self.lock_cursor(args),
            HostRequest::UnlockCursor => {
                self.controller.unlock();
                Ok(())
            }
        };

        match result {
            Ok(()) => HostResponse::Ok,
            Err(e) => error_response(&e),
        }
    }

    /// Validates the argument list and locks the cursor.
    ///
    /// Validation order matches the host contract: arity first, then a type
    /// check over every argument, then coercion and the geometry check.  No
    /// state changes on any failure.
    fn lock_cursor(&self, args: &[serde_json::Value]) -> Result<(), HostCallError> {
        if args.len() != 4 {
            return Err(HostCallError::WrongArity {
                expected: 4,
                got: args.len(),
            });
        }

        let mut coerced = [0i32; 4];
        for (index, value) in args.iter().enumerate() {
            let number = value
                .as_f64()
                .ok_or(HostCallError::NotANumber { index })?;
            coerced[index] = to_int32(number);
        }

        let [x, y, width, height] = coerced;
        debug!(x, y, width, height, "host lockCursor request");
        let region = ConfinementRegion::new(x, y, width, height)
            .map_err(ConfinementError::from)?;
        self.controller.lock(region)?;
        Ok(())
    }
}

fn error_response(error: &HostCallError) -> HostResponse {
    HostResponse::Error {
        kind: error.kind(),
        message: error.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
