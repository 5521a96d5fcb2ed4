use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// ALU operations of class 0x5. Declaration order is the operation sub-code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Alu {
    OG,
    ELLER,
    XELLER,
    VSKIFT,
    HSKIFT,
    PLUSS,
    MINUS,
}
