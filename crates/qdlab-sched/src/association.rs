//! Association policies.

use std::fmt;

use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

/// Policy determining which access point serves each station.
///
/// The set is closed and iterated exhaustively in declaration order. The
/// driver treats the value opaquely apart from its label, which becomes a
/// folder-name component.
#[derive(Eq, PartialEq, Copy, Clone, Debug, IntoEnumIterator, Serialize, Deserialize)]
pub enum AssociationMode {
    /// Each station is served by the AP with the best link to it.
    #[serde(rename = "BEST_AP")]
    BestAp,
    /// All stations are served by the same AP.
    #[serde(rename = "SAME_AP")]
    SameAp,
}

impl AssociationMode {
    pub fn label(&self) -> &'static str {
        match self {
            AssociationMode::BestAp => "BEST_AP",
            AssociationMode::SameAp => "SAME_AP",
        }
    }
}

impl fmt::Display for AssociationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
