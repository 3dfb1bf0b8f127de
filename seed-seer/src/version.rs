use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Game versions the predictors know how to reproduce.
///
/// The ordering matters: several mechanics branch on inequalities like
/// `< V1_4` or `>= V1_6`, so variants are declared oldest first.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum GameVersion {
    V1_3,
    V1_4,
    V1_5,
    V1_5_3,
    #[default]
    V1_6,
}

impl GameVersion {
    /// All supported versions, oldest first.
    pub const ALL: [GameVersion; 5] = [
        GameVersion::V1_3,
        GameVersion::V1_4,
        GameVersion::V1_5,
        GameVersion::V1_5_3,
        GameVersion::V1_6,
    ];

    /// Dotted form used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVersion::V1_3 => "1.3",
            GameVersion::V1_4 => "1.4",
            GameVersion::V1_5 => "1.5",
            GameVersion::V1_5_3 => "1.5.3",
            GameVersion::V1_6 => "1.6",
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVersion {
    type Err = Error;

    /// Parses dotted integers; missing components are treated as 0, so
    /// `"1.5"` and `"1.5.0"` name the same version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u32; 3];
        for (i, part) in s.split('.').enumerate() {
            if i >= 3 {
                return Err(anyhow!("too many version components in {s:?}"));
            }
            parts[i] = part
                .parse()
                .map_err(|_| anyhow!("bad version component {part:?} in {s:?}"))?;
        }
        match parts {
            [1, 3, 0] => Ok(GameVersion::V1_3),
            [1, 4, 0] => Ok(GameVersion::V1_4),
            [1, 5, 0] => Ok(GameVersion::V1_5),
            [1, 5, 3] => Ok(GameVersion::V1_5_3),
            [1, 6, 0] => Ok(GameVersion::V1_6),
            _ => Err(anyhow!("unsupported game version {s:?}")),
        }
    }
}

impl Serialize for GameVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
