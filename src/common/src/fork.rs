use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Protocol upgrades tracked by the fork context, in activation order.
///
/// The discriminant doubles as the fork's position in every per-fork table, so
/// variants must stay in activation order.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Fork {
    Homestead,
    Eip150,
    Eip155,
    Eip158,
    Byzantium,
    Constantinople,
    Petersburg,
    Ewasm,
}

impl Fork {
    /// Position of the fork in activation order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
