//! Relation Steps and Subject Gender
//!
//! The closed vocabulary a kinship chain is built from. A chain is a walk
//! from the subject through the family graph, one atomic edge at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One atomic edge in the family graph.
///
/// Declaration order is significant: it is the order in which next-step
/// candidates are reported and the order used by `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationStep {
    Father,
    Mother,
    Husband,
    Wife,
    OlderBrother,
    YoungerBrother,
    OlderSister,
    YoungerSister,
    Son,
    Daughter,
}

/// An ordered walk from the subject. Created fresh per query.
pub type Chain = Vec<RelationStep>;

impl RelationStep {
    pub const COUNT: usize = 10;

    pub const ALL: [RelationStep; Self::COUNT] = [
        RelationStep::Father,
        RelationStep::Mother,
        RelationStep::Husband,
        RelationStep::Wife,
        RelationStep::OlderBrother,
        RelationStep::YoungerBrother,
        RelationStep::OlderSister,
        RelationStep::YoungerSister,
        RelationStep::Son,
        RelationStep::Daughter,
    ];

    /// Dense index in `0..COUNT`, used by the trie and continuation rows.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The snake_case name used in the data files.
    pub fn name(self) -> &'static str {
        match self {
            RelationStep::Father => "father",
            RelationStep::Mother => "mother",
            RelationStep::Husband => "husband",
            RelationStep::Wife => "wife",
            RelationStep::OlderBrother => "older_brother",
            RelationStep::YoungerBrother => "younger_brother",
            RelationStep::OlderSister => "older_sister",
            RelationStep::YoungerSister => "younger_sister",
            RelationStep::Son => "son",
            RelationStep::Daughter => "daughter",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RelationStep::Father => "Father",
            RelationStep::Mother => "Mother",
            RelationStep::Husband => "Husband",
            RelationStep::Wife => "Wife",
            RelationStep::OlderBrother => "Older Brother",
            RelationStep::YoungerBrother => "Younger Brother",
            RelationStep::OlderSister => "Older Sister",
            RelationStep::YoungerSister => "Younger Sister",
            RelationStep::Son => "Son",
            RelationStep::Daughter => "Daughter",
        }
    }

    /// Possessive form for rendering a chain as a phrase ("Father's Older Brother").
    pub fn possessive(self) -> &'static str {
        match self {
            RelationStep::Father => "Father's",
            RelationStep::Mother => "Mother's",
            RelationStep::Husband => "Husband's",
            RelationStep::Wife => "Wife's",
            RelationStep::OlderBrother => "Older Brother's",
            RelationStep::YoungerBrother => "Younger Brother's",
            RelationStep::OlderSister => "Older Sister's",
            RelationStep::YoungerSister => "Younger Sister's",
            RelationStep::Son => "Son's",
            RelationStep::Daughter => "Daughter's",
        }
    }
}

impl fmt::Display for RelationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relation step '{0}'")]
pub struct ParseStepError(pub String);

impl FromStr for RelationStep {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RelationStep::ALL
            .iter()
            .copied()
            .find(|step| step.name() == wanted)
            .ok_or_else(|| ParseStepError(s.to_string()))
    }
}

/// Subject gender. Only used to pick between gendered table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn other(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender '{0}' (expected male or female)")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// Dot-joined form of a chain, for logs and diagnostics only.
pub fn format_chain(chain: &[RelationStep]) -> String {
    chain.iter().map(|s| s.name()).collect::<Vec<_>>().join(".")
}

/// Renders a chain as an English phrase, e.g. "Father's Older Brother".
pub fn describe_chain(chain: &[RelationStep]) -> String {
    match chain.split_last() {
        None => String::new(),
        Some((last, init)) => {
            let mut parts: Vec<&str> = init.iter().map(|s| s.possessive()).collect();
            parts.push(last.display_name());
            parts.join(" ")
        }
    }
}
