use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The closed set of spending categories, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Food,
    Transport,
    Entertainment,
    Bills,
    Shopping,
}

impl Category {
    pub(crate) const COUNT: usize = 5;

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Bills,
            Self::Shopping,
        ]
    }

    /// Storage key, e.g. `"food"`.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Bills => "bills",
            Self::Shopping => "shopping",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
        }
    }

    pub(crate) fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Entertainment => "🎬",
            Self::Bills => "🏠",
            Self::Shopping => "🛍️",
        }
    }

    /// Position in the fixed chart order.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Transport => 1,
            Self::Entertainment => 2,
            Self::Bills => 3,
            Self::Shopping => 4,
        }
    }

    /// Case-insensitive lookup by key or label.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "entertainment" => Some(Self::Entertainment),
            "bills" => Some(Self::Bills),
            "shopping" => Some(Self::Shopping),
            _ => None,
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownCategory(s.trim().to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
