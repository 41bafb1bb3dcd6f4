use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ModelError;

/// Priority of a cycle.
///
/// `High`, `Medium` and `Low` are ranked in that order when entities are
/// handed out. `Neutral` carries no rank; whether it takes part in allocation
/// is decided by the distributor's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
    Neutral,
}

impl Priority {
    /// Ranked priorities, highest first.
    pub const RANKED: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Position in the allocation order, `None` for unranked priorities.
    pub fn rank(self) -> Option<u8> {
        match self {
            Priority::High => Some(0),
            Priority::Medium => Some(1),
            Priority::Low => Some(2),
            Priority::Neutral => None,
        }
    }

    /// Sort key placing unranked priorities after every ranked one.
    pub fn sort_key(self) -> u8 {
        self.rank().unwrap_or(u8::MAX)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            "NEUTRAL" => Ok(Priority::Neutral),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}

/// Events a single entity of a cycle produces on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct CycleDay {
    /// 1-based ordinal of the day, informational only
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub meetings: u64,
    #[serde(default)]
    pub emails: u64,
    #[serde(default)]
    pub calls: u64,
    #[serde(default)]
    pub follows: u64,
}

impl CycleDay {
    pub fn new(day: u32, meetings: u64, emails: u64, calls: u64, follows: u64) -> Self {
        Self {
            day,
            meetings,
            emails,
            calls,
            follows,
        }
    }

    /// Sum of the four event kinds.
    pub fn total(&self) -> u64 {
        self.meetings
            .saturating_add(self.emails)
            .saturating_add(self.calls)
            .saturating_add(self.follows)
    }
}

/// A prioritized bucket of work that absorbs entities.
///
/// `structure[0]` describes today, `structure[1]` tomorrow and so on. A
/// structure shorter than the projection horizon only contributes to its
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub name: String,
    /// Maximum number of entities this cycle can take
    pub available_entities: u32,
    pub priority: Priority,
    #[serde(default)]
    pub structure: Vec<CycleDay>,
}

impl Cycle {
    /// Creates a cycle with an empty structure.
    pub fn new(name: impl Into<String>, available_entities: u32, priority: Priority) -> Self {
        Self {
            name: name.into(),
            available_entities,
            priority,
            structure: Vec::new(),
        }
    }

    /// Creates a cycle with the given per-day structure.
    pub fn with_structure(
        name: impl Into<String>,
        available_entities: u32,
        priority: Priority,
        structure: Vec<CycleDay>,
    ) -> Self {
        Self {
            name: name.into(),
            available_entities,
            priority,
            structure,
        }
    }

    /// Number of days this cycle contributes to.
    pub fn horizon(&self) -> usize {
        self.structure.len()
    }

    /// Events a single entity produces today, 0 for an empty structure.
    pub fn today_events(&self) -> u64 {
        self.structure.first().map(CycleDay::total).unwrap_or(0)
    }
}
