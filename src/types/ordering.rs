use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Ordering mode negotiated for a channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordering {
    #[serde(rename = "ORDERED")]
    Ordered,

    #[serde(rename = "UNORDERED")]
    Unordered,
}

impl Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordering::Ordered => write!(f, "ORDERED"),
            Ordering::Unordered => write!(f, "UNORDERED"),
        }
    }
}
