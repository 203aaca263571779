#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Board identifiers and capability levels for the MicroPython editor

use std::fmt;

/// Board identifiers whose firmware ships only the base MicroPython API.
pub const BASE_BOARD_IDS: &[&str] = &["9900", "9901"];

/// Board identifiers whose firmware ships the full MicroPython API,
/// including the extra modules newer board revisions add.
pub const FULL_BOARD_IDS: &[&str] = &["9903", "9904"];

/// The API capability level of a target board.
///
/// Every supported board provides the base MicroPython API. Newer board
/// revisions additionally provide extra modules (microphone, touch logo,
/// speaker pin), which is the `Full` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The common MicroPython API available on every supported board.
    Base,
    /// The base API plus the extra modules of newer board revisions.
    Full,
}

impl Capability {
    /// Returns the capability level implied by a board identifier.
    ///
    /// This lookup is lenient: identifiers that are not recognized fall
    /// back to [`Capability::Base`]. Use it when a wrong guess is harmless,
    /// such as picking an autocomplete word list.
    #[must_use]
    pub fn for_board_id(board_id: &str) -> Self {
        if FULL_BOARD_IDS.contains(&board_id) {
            Self::Full
        } else {
            Self::Base
        }
    }

    /// Returns the capability level of a recognized board identifier.
    ///
    /// Unlike [`Capability::for_board_id`], unknown identifiers are not
    /// coerced to a capability level.
    ///
    /// # Errors
    ///
    /// Returns [`UnrecognizedBoard`] if the identifier is neither a base
    /// nor a full capability board.
    pub fn try_for_board_id(board_id: &str) -> Result<Self, UnrecognizedBoard> {
        if FULL_BOARD_IDS.contains(&board_id) {
            Ok(Self::Full)
        } else if BASE_BOARD_IDS.contains(&board_id) {
            Ok(Self::Base)
        } else {
            Err(UnrecognizedBoard::new(board_id))
        }
    }
}

/// Error returned when a board identifier is not recognized.
///
/// Passing an unknown identifier to a strict lookup is a caller programming
/// error, so this is reported rather than silently treated as either
/// capability level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedBoard {
    board_id: String,
}

impl UnrecognizedBoard {
    /// Creates a new error for the given board identifier.
    #[must_use]
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }

    /// Returns the identifier that was not recognized.
    #[must_use]
    pub fn board_id(&self) -> &str {
        &self.board_id
    }
}

impl fmt::Display for UnrecognizedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not recognise the board ID {}", self.board_id)
    }
}

impl std::error::Error for UnrecognizedBoard {}
