//! Waardetype voor opgeloste grootheden: één getal, of twee
//! alternatieven in het dubbelzinnige SSA-geval.

use serde::Serialize;

/// Een opgeloste zijde, hoek of oppervlakte.
///
/// Serialiseert ongetagd: een `Single` wordt een kaal getal, een
/// `Pair` een array van twee getallen. Dat is de vorm die de
/// webfrontend verwacht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolvedValue {
    /// Een eenduidig bepaalde waarde.
    Single(f64),
    /// Twee alternatieven; index 0 en index 1 horen over alle velden
    /// heen bij dezelfde fysieke driehoek.
    Pair(f64, f64),
}

impl SolvedValue {
    /// De waarde van de eerste (of enige) oplossing.
    #[must_use]
    pub fn first(self) -> f64 {
        match self {
            Self::Single(value) | Self::Pair(value, _) => value,
        }
    }

    /// De waarde van de tweede oplossing; voor een `Single` is dat
    /// dezelfde waarde als de eerste.
    #[must_use]
    pub fn second(self) -> f64 {
        match self {
            Self::Single(value) | Self::Pair(_, value) => value,
        }
    }

    #[must_use]
    pub fn is_pair(self) -> bool {
        matches!(self, Self::Pair(..))
    }
}

impl From<f64> for SolvedValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}
