use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SizeError;

/// Number of bytes in one kilobyte. Every unit is a power of this base.
pub const KILOBYTE: f64 = 1024.0;

const MULTIPLIERS: [f64; 6] = [
    1.0,
    KILOBYTE,
    KILOBYTE * KILOBYTE,
    KILOBYTE * KILOBYTE * KILOBYTE,
    KILOBYTE * KILOBYTE * KILOBYTE * KILOBYTE,
    KILOBYTE * KILOBYTE * KILOBYTE * KILOBYTE * KILOBYTE,
];

const SUFFIXES: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Byte-multiple units, ordered by increasing magnitude.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Unit {
    #[default]
    #[serde(rename = "B")]
    Bytes,
    #[serde(rename = "KB")]
    Kilobytes,
    #[serde(rename = "MB")]
    Megabytes,
    #[serde(rename = "GB")]
    Gigabytes,
    #[serde(rename = "TB")]
    Terabytes,
    #[serde(rename = "PB")]
    Petabytes,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Bytes,
        Unit::Kilobytes,
        Unit::Megabytes,
        Unit::Gigabytes,
        Unit::Terabytes,
        Unit::Petabytes,
    ];

    /// Position of the unit in [`Unit::ALL`], i.e. the power of 1024 it represents.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of bytes in one of this unit.
    pub const fn multiplier(self) -> f64 {
        MULTIPLIERS[self.index()]
    }

    /// Display suffix, e.g. `KB`.
    pub const fn suffix(self) -> &'static str {
        SUFFIXES[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Bytes => "bytes",
            Unit::Kilobytes => "kilobytes",
            Unit::Megabytes => "megabytes",
            Unit::Gigabytes => "gigabytes",
            Unit::Terabytes => "terabytes",
            Unit::Petabytes => "petabytes",
        }
    }

    /// Looks a unit up by suffix (`kb`), IEC suffix (`KiB`) or name (`kilobyte[s]`).
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "b" | "byte" | "bytes" => Some(Unit::Bytes),
            "kb" | "kib" | "kilobyte" | "kilobytes" => Some(Unit::Kilobytes),
            "mb" | "mib" | "megabyte" | "megabytes" => Some(Unit::Megabytes),
            "gb" | "gib" | "gigabyte" | "gigabytes" => Some(Unit::Gigabytes),
            "tb" | "tib" | "terabyte" | "terabytes" => Some(Unit::Terabytes),
            "pb" | "pib" | "petabyte" | "petabytes" => Some(Unit::Petabytes),
            _ => None,
        }
    }
}

impl FromStr for Unit {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_name(s).ok_or_else(|| SizeError::unsupported_unit(s))
    }
}

impl TryFrom<usize> for Unit {
    type Error = SizeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Unit::ALL
            .get(index)
            .copied()
            .ok_or_else(|| SizeError::unsupported_unit(format!("index {index}")))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl From<Unit> for byte_unit::Unit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Bytes => byte_unit::Unit::B,
            Unit::Kilobytes => byte_unit::Unit::KiB,
            Unit::Megabytes => byte_unit::Unit::MiB,
            Unit::Gigabytes => byte_unit::Unit::GiB,
            Unit::Terabytes => byte_unit::Unit::TiB,
            Unit::Petabytes => byte_unit::Unit::PiB,
        }
    }
}

impl TryFrom<byte_unit::Unit> for Unit {
    type Error = SizeError;

    /// Only whole-byte binary units map onto [`Unit`]; bit, decimal and exa+ units do not.
    fn try_from(unit: byte_unit::Unit) -> Result<Self, Self::Error> {
        match unit {
            byte_unit::Unit::B => Ok(Unit::Bytes),
            byte_unit::Unit::KiB => Ok(Unit::Kilobytes),
            byte_unit::Unit::MiB => Ok(Unit::Megabytes),
            byte_unit::Unit::GiB => Ok(Unit::Gigabytes),
            byte_unit::Unit::TiB => Ok(Unit::Terabytes),
            byte_unit::Unit::PiB => Ok(Unit::Petabytes),
            other => Err(SizeError::unsupported_unit(format!("{other:?}"))),
        }
    }
}
