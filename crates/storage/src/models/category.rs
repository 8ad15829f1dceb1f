use std::fmt;

use serde::{Serialize, Serializer};

/// True classification of a quiz comment.
///
/// `Positive` is the only non-bullying label; every other variant names a
/// bullying subtype. Labels the quiz does not know about are kept verbatim
/// in `Other` so feedback can still mention them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    GeneralNegative,
    Gender,
    Age,
    Nationality,
    Socioeconomic,
    Educational,
    Physical,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 8] = [
        Category::Positive,
        Category::GeneralNegative,
        Category::Gender,
        Category::Age,
        Category::Nationality,
        Category::Socioeconomic,
        Category::Educational,
        Category::Physical,
    ];

    /// Parses a stored label. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "positive" => Self::Positive,
            "general negative" => Self::GeneralNegative,
            "gender" => Self::Gender,
            "age" => Self::Age,
            "nationality" => Self::Nationality,
            "socioeconomic" => Self::Socioeconomic,
            "educational" => Self::Educational,
            "physical" => Self::Physical,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::GeneralNegative => "general negative",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Nationality => "nationality",
            Self::Socioeconomic => "socioeconomic",
            Self::Educational => "educational",
            Self::Physical => "physical",
            Self::Other(label) => label,
        }
    }

    pub fn is_bullying(&self) -> bool {
        !matches!(self, Self::Positive)
    }

    /// Label shown in the mistakes list, which collapses every subtype.
    pub fn display_label(&self) -> &'static str {
        if self.is_bullying() {
            "bullying"
        } else {
            "positive"
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
