//! Named design parameters and the tables that hold their values.
//!
//! The VM only ever reads parameters through [`ParameterSource`]; callers
//! may pass a [`ParameterSet`] or any plain map keyed by [`ParameterId`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseParameterIdError;

/// Identifies a design parameter.
///
/// Each variant has a stable kebab-case name, which is what programs use
/// in `get-parameter [ name ]` and what parameter files use as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterId {
    Width,
    Height,
    Pitch,
    PadWidth,
    PadHeight,
    PadDiameter,
    HoleDiameter,
    HoleLength,
    CornerRadius,
    CourtyardExpansion,
    SolderMaskExpansion,
    PasteMaskContraction,
    HoleSolderMaskExpansion,
    ViaDiameter,
    ViaSolderMaskExpansion,
    AnnularRing,
}

/// All parameter identifiers, in definition order.
pub const ALL_PARAMETER_IDS: [ParameterId; 16] = [
    ParameterId::Width,
    ParameterId::Height,
    ParameterId::Pitch,
    ParameterId::PadWidth,
    ParameterId::PadHeight,
    ParameterId::PadDiameter,
    ParameterId::HoleDiameter,
    ParameterId::HoleLength,
    ParameterId::CornerRadius,
    ParameterId::CourtyardExpansion,
    ParameterId::SolderMaskExpansion,
    ParameterId::PasteMaskContraction,
    ParameterId::HoleSolderMaskExpansion,
    ParameterId::ViaDiameter,
    ParameterId::ViaSolderMaskExpansion,
    ParameterId::AnnularRing,
];

impl ParameterId {
    /// The name used in program source and parameter files.
    pub fn name(self) -> &'static str {
        match self {
            ParameterId::Width => "width",
            ParameterId::Height => "height",
            ParameterId::Pitch => "pitch",
            ParameterId::PadWidth => "pad-width",
            ParameterId::PadHeight => "pad-height",
            ParameterId::PadDiameter => "pad-diameter",
            ParameterId::HoleDiameter => "hole-diameter",
            ParameterId::HoleLength => "hole-length",
            ParameterId::CornerRadius => "corner-radius",
            ParameterId::CourtyardExpansion => "courtyard-expansion",
            ParameterId::SolderMaskExpansion => "solder-mask-expansion",
            ParameterId::PasteMaskContraction => "paste-mask-contraction",
            ParameterId::HoleSolderMaskExpansion => "hole-solder-mask-expansion",
            ParameterId::ViaDiameter => "via-diameter",
            ParameterId::ViaSolderMaskExpansion => "via-solder-mask-expansion",
            ParameterId::AnnularRing => "annular-ring",
        }
    }

    /// Resolve a parameter name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_PARAMETER_IDS.iter().find(|id| id.name() == name).copied()
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParameterId {
    type Err = ParseParameterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseParameterIdError {
            name: s.to_string(),
        })
    }
}

/// Read-only parameter lookup used during execution.
pub trait ParameterSource {
    /// Value of `id`, or `None` if the table does not contain it.
    fn value(&self, id: ParameterId) -> Option<i64>;
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn value(&self, id: ParameterId) -> Option<i64> {
        (**self).value(id)
    }
}

impl ParameterSource for BTreeMap<ParameterId, i64> {
    fn value(&self, id: ParameterId) -> Option<i64> {
        self.get(&id).copied()
    }
}

impl<S: std::hash::BuildHasher> ParameterSource for HashMap<ParameterId, i64, S> {
    fn value(&self, id: ParameterId) -> Option<i64> {
        self.get(&id).copied()
    }
}

/// A table of parameter values.
///
/// Serializes as a JSON object keyed by parameter name:
/// `{ "width": 42, "pad-height": 1500000 }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<ParameterId, i64>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `id` to `value`, returning the previous value if any.
    pub fn insert(&mut self, id: ParameterId, value: i64) -> Option<i64> {
        self.values.insert(id, value)
    }

    /// Value of `id`, if present.
    pub fn get(&self, id: ParameterId) -> Option<i64> {
        self.values.get(&id).copied()
    }

    /// Returns true if `id` has a value.
    pub fn contains(&self, id: ParameterId) -> bool {
        self.values.contains_key(&id)
    }

    /// Remove `id`, returning its value if it was present.
    pub fn remove(&mut self, id: ParameterId) -> Option<i64> {
        self.values.remove(&id)
    }

    /// Number of parameters with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameter has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(id, value)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, i64)> + '_ {
        self.values.iter().map(|(id, v)| (*id, *v))
    }
}

impl ParameterSource for ParameterSet {
    fn value(&self, id: ParameterId) -> Option<i64> {
        self.get(id)
    }
}

impl FromIterator<(ParameterId, i64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (ParameterId, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(ParameterId, i64)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (ParameterId, i64)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
