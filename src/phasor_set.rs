//! Ordered, labeled phasor collections handed to the renderer.

use crate::math::{CScalar, Scalar};

/// Ordered sequence of `(label, phasor)` pairs. Insertion order is the legend
/// and draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledPhasorSet {
    entries: Vec<(String, CScalar)>,
}

impl LabeledPhasorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, label: impl Into<String>, phasor: CScalar) {
        self.entries.push((label.into(), phasor));
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, phasor: CScalar) -> Self {
        self.push(label, phasor);
        self
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CScalar)> {
        self.entries.iter().map(|(label, z)| (label.as_str(), *z))
    }

    /// Looks up the first phasor carrying `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<CScalar> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, z)| *z)
    }

    /// Largest magnitude in the set, `None` when empty.
    #[must_use]
    pub fn max_magnitude(&self) -> Option<Scalar> {
        self.entries
            .iter()
            .map(|(_, z)| z.norm())
            .reduce(Scalar::max)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, CScalar)> for LabeledPhasorSet {
    fn from_iter<T: IntoIterator<Item = (S, CScalar)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, z)| (label.into(), z))
                .collect(),
        }
    }
}

impl IntoIterator for LabeledPhasorSet {
    type Item = (String, CScalar);
    type IntoIter = std::vec::IntoIter<(String, CScalar)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
