use serde::{Deserialize, Serialize};

/// A single status counter as observed on a job at some instant.
///
/// Schedulers omit counters they have not set yet, and an absent counter is
/// a distinct observation from an explicit zero. Both read as "not in that
/// condition"; only a strictly positive count puts the job in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Observation {
    /// The counter was not present in the observed status.
    #[default]
    Unknown,
    /// The counter was present with the given value.
    Count(u32),
}

impl Observation {
    /// `true` if the counter was absent from the observation.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Observation::Unknown)
    }

    /// `true` iff the counter was observed with a value greater than zero.
    pub fn is_positive(&self) -> bool {
        matches!(self, Observation::Count(n) if *n > 0)
    }
}

impl From<Option<u32>> for Observation {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => Observation::Count(n),
            None => Observation::Unknown,
        }
    }
}

impl From<Observation> for Option<u32> {
    fn from(obs: Observation) -> Self {
        match obs {
            Observation::Unknown => None,
            Observation::Count(n) => Some(n),
        }
    }
}
