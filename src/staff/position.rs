//! # Employee positions.
//!
//! [`Position`] is the closed set of employee kinds. Year-end evaluation and the
//! role-specific operations dispatch on it:
//!
//! - [`Position::Standard`] vacation and age checks at year end.
//! - [`Position::Sales`] carries the latest sales figure; skips the vacation check.
//! - [`Position::Board`] never evaluated at year end; may resign.

use std::fmt;

/// Position held by an employee, with position-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Regular employee.
    Standard,
    /// Sales staff.
    Sales {
        /// Latest sales figure.
        achieved_target: i64,
    },
    /// Board member.
    Board,
}

impl Position {
    /// Data-less discriminant, for logs and errors.
    pub fn kind(&self) -> PositionKind {
        match self {
            Position::Standard => PositionKind::Standard,
            Position::Sales { .. } => PositionKind::Sales,
            Position::Board => PositionKind::Board,
        }
    }
}

impl Default for Position {
    /// Returns [`Position::Standard`].
    fn default() -> Self {
        Position::Standard
    }
}

/// Position discriminant without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionKind {
    /// Regular employee.
    Standard,
    /// Sales staff.
    Sales,
    /// Board member.
    Board,
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PositionKind::Standard => "standard",
            PositionKind::Sales => "sales",
            PositionKind::Board => "board",
        })
    }
}
