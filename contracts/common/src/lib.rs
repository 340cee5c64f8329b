//! Shared building blocks for the provenance ledger contracts.
//!
//! This crate provides:
//! - [`LedgerError`], the error taxonomy returned by every contract.
//! - Capability traits ([`Ownable`], [`Freezable`], [`Pausable`]) that each
//!   contract composes as needed.
//! - Narrow cross-contract client interfaces and the registry-based
//!   [`locator`] used to resolve sibling subsystems at call time.
//! - Storage TTL and input validation helpers.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod events;
pub mod freezable;
pub mod interfaces;
pub mod locator;
pub mod ownable;
pub mod pausable;
pub mod policy;
pub mod storage;
pub mod validation;

pub use freezable::Freezable;
pub use interfaces::*;
pub use ownable::Ownable;
pub use pausable::Pausable;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes shared by every ledger contract.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authorisation                  |
/// | 20 – 29 | Identity state                 |
/// | 30 – 39 | Resource not found             |
/// | 40 – 49 | Validation / input             |
/// | 50 – 59 | Uniqueness                     |
/// | 60 – 69 | Policy evaluation              |
/// | 70 – 79 | Contract state                 |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum LedgerError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,

    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller lacks the role or ownership the operation requires.
    Unauthorized = 10,

    // ── Identity (20–29) ─────────────────────────────────────
    /// The principal (or signing key) is already registered.
    AlreadyRegistered = 20,

    /// The principal never registered.
    NotRegistered = 21,

    // ── Not-found (30–39) ────────────────────────────────────
    /// No record exists for the given data hash.
    RecordNotFound = 30,

    /// The registry holds no address for a required subsystem.
    SubsystemNotFound = 31,

    // ── Validation (40–49) ───────────────────────────────────
    /// Zero hash, empty uri or otherwise malformed input.
    InvalidArgument = 40,

    /// The signing key is unbound or its owner is not an accredited provider.
    InvalidSignature = 41,

    /// A score provider returned zero, or the score sum overflowed.
    InvalidScore = 42,

    // ── Uniqueness (50–59) ───────────────────────────────────
    /// A record with this data hash already exists.
    DuplicateRecord = 50,

    /// This attester already attested to the record.
    DuplicateSignature = 51,

    /// This score provider was already applied to the record.
    AlreadyScored = 52,

    // ── Policy (60–69) ───────────────────────────────────────
    /// At least one policy collaborator rejected the request.
    PolicyRejected = 60,

    // ── Contract state (70–79) ───────────────────────────────
    /// The contract is paused.
    Paused = 70,

    /// The contract was frozen and accepts no further writes.
    Frozen = 71,
}

/// Broad classification of [`LedgerError`] values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lifecycle,
    Authorization,
    Identity,
    NotFound,
    Validation,
    Conflict,
    Policy,
    State,
}

impl LedgerError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::NotInitialized | LedgerError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            LedgerError::Unauthorized => ErrorCategory::Authorization,
            LedgerError::AlreadyRegistered | LedgerError::NotRegistered => {
                ErrorCategory::Identity
            }
            LedgerError::RecordNotFound | LedgerError::SubsystemNotFound => {
                ErrorCategory::NotFound
            }
            LedgerError::InvalidArgument
            | LedgerError::InvalidSignature
            | LedgerError::InvalidScore => ErrorCategory::Validation,
            LedgerError::DuplicateRecord
            | LedgerError::DuplicateSignature
            | LedgerError::AlreadyScored => ErrorCategory::Conflict,
            LedgerError::PolicyRejected => ErrorCategory::Policy,
            LedgerError::Paused | LedgerError::Frozen => ErrorCategory::State,
        }
    }

    /// Returns a human-readable description of the error.
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::NotInitialized => "Contract has not been initialized",
            LedgerError::AlreadyInitialized => "Contract is already initialized",
            LedgerError::Unauthorized => "Caller is not authorized for this operation",
            LedgerError::AlreadyRegistered => "Principal is already registered",
            LedgerError::NotRegistered => "Principal is not registered",
            LedgerError::RecordNotFound => "Record not found",
            LedgerError::SubsystemNotFound => "Subsystem is not registered in the registry",
            LedgerError::InvalidArgument => "Invalid input parameters provided",
            LedgerError::InvalidSignature => "Signature does not belong to an accredited provider",
            LedgerError::InvalidScore => "Score must be greater than zero",
            LedgerError::DuplicateRecord => "Record with this data hash already exists",
            LedgerError::DuplicateSignature => "Attester already signed this record",
            LedgerError::AlreadyScored => "Score provider already applied to this record",
            LedgerError::PolicyRejected => "Request rejected by a policy",
            LedgerError::Paused => "Contract operations are currently paused",
            LedgerError::Frozen => "Contract is frozen",
        }
    }
}
