//! Commit outcomes
//!
//! Ledger actions never fail loudly. A rejected commit leaves state untouched,
//! and the reason is reported here so callers and tests can tell why.

use std::fmt;

/// Why a commit was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The member draft was empty after trimming
    EmptyMember,
    /// The trimmed member name is already registered
    DuplicateMember,
    /// The expense draft has no payer
    MissingPayer,
    /// The expense description was empty after trimming
    EmptyDescription,
    /// The expense amount was zero
    ZeroAmount,
    /// An expense with the same trimmed description already exists
    DuplicateDescription,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EmptyMember => "member name is empty",
            Self::DuplicateMember => "member already exists",
            Self::MissingPayer => "payer is missing",
            Self::EmptyDescription => "description is empty",
            Self::ZeroAmount => "amount must not be zero",
            Self::DuplicateDescription => "an expense with this description already exists",
        };
        f.write_str(text)
    }
}

/// Result of a ledger action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(RejectReason),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if the action was declined
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}
