use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed palette a trace color is drawn from.
///
/// Serialized as the lowercase color name. Renderers resolve each entry to
/// concrete RGB values for their active theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceColor {
    Red,
    Orange,
    Yellow,
    Olive,
    Green,
    Teal,
    #[default]
    Blue,
    Violet,
    Purple,
    Pink,
    Brown,
    Grey,
    Black,
}

impl TraceColor {
    pub const ALL: [TraceColor; 13] = [
        TraceColor::Red,
        TraceColor::Orange,
        TraceColor::Yellow,
        TraceColor::Olive,
        TraceColor::Green,
        TraceColor::Teal,
        TraceColor::Blue,
        TraceColor::Violet,
        TraceColor::Purple,
        TraceColor::Pink,
        TraceColor::Brown,
        TraceColor::Grey,
        TraceColor::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Olive => "olive",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Grey => "grey",
            Self::Black => "black",
        }
    }

    /// Next palette entry, wrapping around after the last one.
    pub fn cycle_next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TraceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trace color '{0}'")]
pub struct UnknownColor(pub String);

impl FromStr for TraceColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        // "gray" is accepted as an alias for the palette's "grey".
        let wanted = if wanted == "gray" { "grey".to_owned() } else { wanted };
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownColor(s.to_owned()))
    }
}
