pub mod character;
pub mod team;
pub mod tier;

pub use character::{Character, Element, WeaponKind};
pub use team::*;
pub use tier::{TierEntry, TierLevel};
