//! City identifiers.

use serde::{Deserialize, Serialize};

/// One of the ten cities on the map, labelled `A` to `J`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum City {
    /// City A.
    #[default]
    A,
    /// City B.
    B,
    /// City C.
    C,
    /// City D.
    D,
    /// City E.
    E,
    /// City F.
    F,
    /// City G.
    G,
    /// City H.
    H,
    /// City I.
    I,
    /// City J.
    J,
}
