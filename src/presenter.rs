//! List and detail presenters over the cloud catalog.
//!
//! Pure views of the fixture data, independent of any terminal rendering:
//! the list presenter groups the catalog into one section per altitude band
//! and the detail presenter turns a single record into display strings.

use thiserror::Error;

use crate::models::{BAND_COUNT, Cloud, CloudAltitude};

/// Errors from list row lookups.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("no row {row} in section {section}")]
    OutOfBounds { section: usize, row: usize },
}

/// Header text for a list section: the band's long name and its
/// typical base altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub long_name: &'static str,
    pub feet: &'static str,
}

/// Records belonging to one altitude band, in catalog order. A cloud that
/// spans several bands appears in the result for each of them.
pub fn section_members<'a>(clouds: &'a [Cloud], band: CloudAltitude) -> Vec<&'a Cloud> {
    clouds
        .iter()
        .filter(|c| c.altitude_range.contains(&band))
        .collect()
}

/// Sectioned view of the catalog, one section per altitude band.
pub struct ListPresenter<'a> {
    clouds: &'a [Cloud],
}

impl<'a> ListPresenter<'a> {
    pub fn new(clouds: &'a [Cloud]) -> Self {
        Self { clouds }
    }

    /// Number of real sections (one per band).
    pub fn section_count(&self) -> usize {
        BAND_COUNT
    }

    /// Header for a section, or `None` when the index has no band.
    pub fn section_header(&self, section: usize) -> Option<SectionHeader> {
        let band = CloudAltitude::from_index(section)?;
        Some(SectionHeader {
            long_name: band.long_name(),
            feet: band.feet(),
        })
    }

    /// Number of rows in a section. A section index with no band has
    /// zero rows rather than being an error.
    pub fn row_count(&self, section: usize) -> usize {
        match CloudAltitude::from_index(section) {
            Some(band) => section_members(self.clouds, band).len(),
            None => 0,
        }
    }

    /// The `row`-th record of a section, in catalog order. Returns the
    /// catalog's own record, not a copy, so the detail view renders
    /// exactly what the list selected.
    pub fn row_at(&self, section: usize, row: usize) -> Result<&'a Cloud, RowError> {
        let members = match CloudAltitude::from_index(section) {
            Some(band) => section_members(self.clouds, band),
            None => Vec::new(),
        };
        members
            .get(row)
            .copied()
            .ok_or(RowError::OutOfBounds { section, row })
    }
}

/// Display strings for the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudDetail {
    pub name: String,
    pub abbreviation: String,
    pub altitude_text: String,
    pub precipitation_text: String,
    pub description: String,
}

impl CloudDetail {
    pub fn from_cloud(cloud: &Cloud) -> Self {
        // Each label carries a trailing space, joined in stored band order.
        let altitude_text: String = cloud
            .altitude_range
            .iter()
            .map(|band| format!("{} ", band.label()))
            .collect();

        let precipitation_text = if cloud.precipitation { "True" } else { "False" };

        Self {
            name: cloud.name.to_string(),
            abbreviation: cloud.abbreviation.to_string(),
            altitude_text,
            precipitation_text: precipitation_text.to_string(),
            description: cloud.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    #[test]
    fn test_section_headers() {
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());

        assert_eq!(
            presenter.section_header(0),
            Some(SectionHeader {
                long_name: "Low-Level Clouds",
                feet: "6,500 feet",
            })
        );
        assert_eq!(
            presenter.section_header(1),
            Some(SectionHeader {
                long_name: "Mid-level Clouds",
                feet: "23,000 feet",
            })
        );
        assert_eq!(
            presenter.section_header(2),
            Some(SectionHeader {
                long_name: "High-Level Clouds",
                feet: "40,000 feet",
            })
        );
    }

    #[test]
    fn test_section_header_out_of_range() {
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());
        assert_eq!(presenter.section_header(3), None);
    }

    #[test]
    fn test_row_counts_sum_to_thirteen() {
        // 10 records; Cumulonimbus appears in all 3 sections and
        // Nimbostratus in 2, so the sectioned view shows 13 rows.
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());

        assert_eq!(presenter.section_count(), 3);
        assert_eq!(presenter.row_count(0), 5);
        assert_eq!(presenter.row_count(1), 4);
        assert_eq!(presenter.row_count(2), 4);
        let total: usize = (0..presenter.section_count())
            .map(|s| presenter.row_count(s))
            .sum();
        assert_eq!(total, 13);
    }

    #[test]
    fn test_row_count_out_of_range_is_zero() {
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());
        assert_eq!(presenter.row_count(3), 0);
        assert_eq!(presenter.row_count(usize::MAX), 0);
    }

    #[test]
    fn test_row_at_is_idempotent() {
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());

        for section in 0..presenter.section_count() {
            for row in 0..presenter.row_count(section) {
                let first = presenter.row_at(section, row).unwrap();
                let second = presenter.row_at(section, row).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_row_membership_invariant() {
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());

        for section in 0..presenter.section_count() {
            let band = CloudAltitude::from_index(section).unwrap();
            for row in 0..presenter.row_count(section) {
                let cloud = presenter.row_at(section, row).unwrap();
                assert!(
                    cloud.altitude_range.contains(&band),
                    "{} listed in section {} without band {:?}",
                    cloud.name,
                    section,
                    band
                );
            }
        }
    }

    #[test]
    fn test_row_at_out_of_bounds() {
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());

        let count = presenter.row_count(0);
        assert_eq!(
            presenter.row_at(0, count),
            Err(RowError::OutOfBounds { section: 0, row: count })
        );
        // A section with no band has no rows at all.
        assert_eq!(
            presenter.row_at(3, 0),
            Err(RowError::OutOfBounds { section: 3, row: 0 })
        );
    }

    #[test]
    fn test_section_order_follows_catalog_order() {
        let catalog = Catalog::sample_data();
        let members = section_members(catalog.clouds(), CloudAltitude::Low);
        let names: Vec<&str> = members.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Cumulonimbus", "Cumulus", "Stratocumulus", "Stratus", "Nimbostratus"]
        );
    }

    #[test]
    fn test_detail_for_cumulonimbus_in_every_section() {
        // The same record selected from any of its three sections must
        // render the same detail strings.
        let catalog = Catalog::sample_data();
        let presenter = ListPresenter::new(catalog.clouds());

        for section in 0..presenter.section_count() {
            let row = (0..presenter.row_count(section))
                .find(|&r| presenter.row_at(section, r).unwrap().name == "Cumulonimbus")
                .unwrap();
            let cloud = presenter.row_at(section, row).unwrap();
            let detail = CloudDetail::from_cloud(cloud);

            assert_eq!(detail.name, "Cumulonimbus");
            assert_eq!(detail.abbreviation, "Cb");
            assert_eq!(detail.altitude_text, "Low Mid High ");
            assert_eq!(detail.precipitation_text, "True");
        }
    }

    #[test]
    fn test_detail_single_band() {
        let catalog = Catalog::sample_data();
        let cirrus = catalog
            .clouds()
            .iter()
            .find(|c| c.name == "Cirrus")
            .unwrap();
        let detail = CloudDetail::from_cloud(cirrus);

        assert_eq!(detail.altitude_text, "High ");
        assert_eq!(detail.precipitation_text, "False");
        assert_eq!(detail.description, "Ripped shreds of thin cotton gauze.");
    }
}
