//! Formatted readouts of a solved circuit.

use std::fmt;

use crate::format::{format_polar, format_rectangular};
use crate::phasor_set::LabeledPhasorSet;

/// One formatted quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Display label.
    pub label: String,
    /// `"magnitude ∠ angle°"` text.
    pub polar: String,
    /// `"real + imag j"` text.
    pub rectangular: String,
}

/// Titled group of readouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// Group heading.
    pub title: String,
    /// Readouts in display order.
    pub readouts: Vec<Readout>,
}

impl ReportSection {
    /// Formats every entry of `set` under `title`.
    #[must_use]
    pub fn from_set(title: impl Into<String>, set: &LabeledPhasorSet) -> Self {
        Self {
            title: title.into(),
            readouts: set
                .iter()
                .map(|(label, z)| Readout {
                    label: label.to_owned(),
                    polar: format_polar(z),
                    rectangular: format_rectangular(z),
                })
                .collect(),
        }
    }
}

/// All readouts of a solved circuit, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitReport {
    sections: Vec<ReportSection>,
}

impl CircuitReport {
    pub(crate) fn new(sections: Vec<ReportSection>) -> Self {
        Self { sections }
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Finds a readout by label across all sections.
    #[must_use]
    pub fn readout(&self, label: &str) -> Option<&Readout> {
        self.sections
            .iter()
            .flat_map(|s| s.readouts.iter())
            .find(|r| r.label == label)
    }
}

impl fmt::Display for CircuitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .sections
            .iter()
            .flat_map(|s| s.readouts.iter())
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            for r in &section.readouts {
                writeln!(f, "  {:<width$}  {:>22}  {}", r.label, r.polar, r.rectangular)?;
            }
        }
        Ok(())
    }
}
