// crates/countrycodes-core/src/model/assignment.rs
use crate::error::CodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 3166-1 assignment status of an alpha-2 code element.
///
/// The enum is closed: a status that fails to parse never becomes a value of
/// this type, it becomes [`CodeError::InvalidAssignment`] instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Assignment {
    /// Assigned to a country, territory, or area of geographical interest.
    #[default]
    OfficiallyAssigned = 0,
    /// Free for assignment at the disposal of users.
    UserAssigned = 1,
    /// Reserved on request for restricted use.
    ExceptionallyReserved = 2,
    /// Deleted from ISO 3166-1 but reserved transitionally.
    TransitionallyReserved = 3,
    /// Used in coding systems associated with ISO 3166-1.
    IndeterminatelyReserved = 4,
    /// Not used, in deference to international property organization names.
    NotUsed = 5,
}

impl Assignment {
    pub const ALL: [Assignment; 6] = [
        Assignment::OfficiallyAssigned,
        Assignment::UserAssigned,
        Assignment::ExceptionallyReserved,
        Assignment::TransitionallyReserved,
        Assignment::IndeterminatelyReserved,
        Assignment::NotUsed,
    ];

    /// The literal used in the source dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Assignment::OfficiallyAssigned => "OfficiallyAssigned",
            Assignment::UserAssigned => "UserAssigned",
            Assignment::ExceptionallyReserved => "ExceptionallyReserved",
            Assignment::TransitionallyReserved => "TransitionallyReserved",
            Assignment::IndeterminatelyReserved => "IndeterminatelyReserved",
            Assignment::NotUsed => "NotUsed",
        }
    }

    /// Whether a record may carry this status. `NotUsed` parses, but no
    /// valid record has it.
    pub fn is_valid(self) -> bool {
        self < Assignment::NotUsed
    }

    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Assignment::ExceptionallyReserved
                | Assignment::TransitionallyReserved
                | Assignment::IndeterminatelyReserved
        )
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Assignment {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Assignment::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| CodeError::InvalidAssignment(s.to_owned()))
    }
}

impl TryFrom<u8> for Assignment {
    type Error = CodeError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Assignment::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| CodeError::InvalidAssignment(ordinal.to_string()))
    }
}
