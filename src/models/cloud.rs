//! Cloud records and the fixture catalog.
//!
//! The catalog is the application's only data source: a fixed, ordered list
//! of the ten classical cloud types, built once at startup and read-only
//! for the life of the process.

use super::altitude::CloudAltitude;

/// A single cloud type record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub name: &'static str,
    pub abbreviation: &'static str,
    /// Bands this cloud occupies, in stored order. Non-empty.
    pub altitude_range: Vec<CloudAltitude>,
    pub precipitation: bool,
    pub description: &'static str,
}

impl Cloud {
    fn new(
        name: &'static str,
        abbreviation: &'static str,
        altitude_range: Vec<CloudAltitude>,
        precipitation: bool,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            abbreviation,
            altitude_range,
            precipitation,
            description,
        }
    }
}

/// The fixed cloud catalog.
pub struct Catalog {
    clouds: Vec<Cloud>,
}

impl Catalog {
    /// Build the ten-record fixture catalog. Catalog order is the order
    /// rows appear within each list section.
    pub fn sample_data() -> Self {
        use CloudAltitude::{High, Low, Mid};

        let clouds = vec![
            Cloud::new(
                "Cumulonimbus",
                "Cb",
                vec![Low, Mid, High],
                true,
                "Vertical sack of fluffy cotton balls with a dark bottom.",
            ),
            Cloud::new(
                "Cumulus",
                "Cu",
                vec![Low],
                false,
                "Basket of fluffy cotton balls.",
            ),
            Cloud::new(
                "Stratocumulus",
                "Sc",
                vec![Low],
                false,
                "Mountain range of fluffy cotton balls.",
            ),
            Cloud::new(
                "Stratus",
                "St",
                vec![Low],
                false,
                "Tattered smears of thin cotton gauze.",
            ),
            Cloud::new(
                "Nimbostratus",
                "Ns",
                vec![Low, Mid],
                true,
                "Dark and stormy wall of thunder.",
            ),
            Cloud::new(
                "Altocumulus",
                "Ac",
                vec![Mid],
                false,
                "Dumplings of white fluffy cotton.",
            ),
            Cloud::new(
                "Altostratus",
                "As",
                vec![Mid],
                false,
                "Long smear of thick cotton gauze.",
            ),
            Cloud::new(
                "Cirrocumulus",
                "Cc",
                vec![High],
                false,
                "Little dots of white fluffy cotton.",
            ),
            Cloud::new(
                "Cirrostratus",
                "Cs",
                vec![High],
                false,
                "Long ribbons of thin cotton gauze.",
            ),
            Cloud::new(
                "Cirrus",
                "Ci",
                vec![High],
                false,
                "Ripped shreds of thin cotton gauze.",
            ),
        ];

        Self { clouds }
    }

    /// All records in catalog order.
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}
