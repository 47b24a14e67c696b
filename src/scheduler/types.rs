/*!
 * Scheduler Types
 * Domain types for the scheduling strategies
 */

use crate::core::errors::{ArgResult, InvalidArgument};
use crate::core::types::{Pid, Time};
use crate::process::ProcessState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served (submission order)
    Fcfs,
    /// Non-preemptive Shortest-Job-First
    Sjf,
    /// Non-preemptive priority scheduling, lowest value first
    Priority,
    /// Time-sliced round robin with a fixed quantum
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in presentation order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Canonical selector name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "roundrobin",
        }
    }

    /// Human-readable label used in reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Whether the algorithm needs a priority per process
    pub const fn requires_priorities(&self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Whether the algorithm needs a time quantum
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" => Ok(Self::Priority),
            "roundrobin" | "round_robin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(InvalidArgument::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round robin time slice length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Time);

impl TimeQuantum {
    /// Create a quantum; must be finite and strictly positive
    pub fn new(value: Time) -> ArgResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(InvalidArgument::InvalidQuantum(value));
        }
        Ok(Self(value))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Time::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// One contiguous stretch of CPU time given to a process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeSlice {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
    /// Ready if the process was requeued, Terminated if it finished
    pub state: ProcessState,
    /// Back-to-back dispatches folded into this stretch
    pub dispatches: u64,
}
