//! Altitude band classification for cloud types.
//!
//! Clouds are grouped into three bands by the typical height of their base.
//! The band set is closed: there is no "unknown" or sentinel variant, and
//! the band count is the named constant [`BAND_COUNT`].

/// Number of real altitude bands.
pub const BAND_COUNT: usize = 3;

/// Altitude band for classifying cloud types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudAltitude {
    Low,
    Mid,
    High,
}

impl CloudAltitude {
    /// All bands in section order (low to high).
    pub const ALL: [CloudAltitude; BAND_COUNT] =
        [CloudAltitude::Low, CloudAltitude::Mid, CloudAltitude::High];

    /// Map a section index to its band. Out-of-range indices have no
    /// classifier and yield `None`.
    pub fn from_index(index: usize) -> Option<CloudAltitude> {
        Self::ALL.get(index).copied()
    }

    /// Full display name for a section header.
    pub fn long_name(&self) -> &'static str {
        match self {
            CloudAltitude::Low => "Low-Level Clouds",
            CloudAltitude::Mid => "Mid-level Clouds",
            CloudAltitude::High => "High-Level Clouds",
        }
    }

    /// Typical base altitude, preformatted for display.
    pub fn feet(&self) -> &'static str {
        match self {
            CloudAltitude::Low => "6,500 feet",
            CloudAltitude::Mid => "23,000 feet",
            CloudAltitude::High => "40,000 feet",
        }
    }

    /// Short label used in the detail view's altitude line.
    pub fn label(&self) -> &'static str {
        match self {
            CloudAltitude::Low => "Low",
            CloudAltitude::Mid => "Mid",
            CloudAltitude::High => "High",
        }
    }
}
