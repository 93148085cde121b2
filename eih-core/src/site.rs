//! Caller-owned lists of proposed sites.

use serde::{Deserialize, Serialize};

use crate::Location;

/// A candidate site for a new shelter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedSite {
    /// Site position.
    #[serde(flatten)]
    pub location: Location,
    /// Street address, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ProposedSite {
    /// Site at `location` without an address.
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self {
            location,
            address: None,
        }
    }

    /// Attach a street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl From<Location> for ProposedSite {
    fn from(location: Location) -> Self {
        Self::new(location)
    }
}

/// Ordered list of proposed sites.
///
/// Sites are labelled `"Site 1"`, `"Site 2"`, ... in insertion order.
///
/// # Examples
/// ```
/// use eih_core::{Location, ProposedSites};
///
/// let mut sites = ProposedSites::new();
/// sites.add(Location::new(37.3382, -121.8863));
/// sites.add(Location::new(37.3297, -121.9018));
/// let labels: Vec<String> = sites.labelled().map(|(label, _)| label).collect();
/// assert_eq!(labels, ["Site 1", "Site 2"]);
/// sites.clear();
/// assert!(sites.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposedSites {
    sites: Vec<ProposedSite>,
}

impl ProposedSites {
    /// Empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { sites: Vec::new() }
    }

    /// Append a site.
    pub fn add(&mut self, site: impl Into<ProposedSite>) {
        self.sites.push(site.into());
    }

    /// Remove every site.
    pub fn clear(&mut self) {
        self.sites.clear();
    }

    /// Number of sites.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sites.len()
    }

    /// Report whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate over sites in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProposedSite> {
        self.sites.iter()
    }

    /// Iterate over `("Site N", site)` pairs, numbering from one.
    pub fn labelled(&self) -> impl Iterator<Item = (String, &ProposedSite)> {
        self.sites
            .iter()
            .enumerate()
            .map(|(index, site)| (format!("Site {}", index.saturating_add(1)), site))
    }

    /// Site locations in insertion order.
    #[must_use]
    pub fn locations(&self) -> Vec<Location> {
        self.sites.iter().map(|site| site.location).collect()
    }
}

impl FromIterator<ProposedSite> for ProposedSites {
    fn from_iter<I: IntoIterator<Item = ProposedSite>>(iter: I) -> Self {
        Self {
            sites: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProposedSites {
    type Item = &'a ProposedSite;
    type IntoIter = std::slice::Iter<'a, ProposedSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn keeps_insertion_order() {
        let mut sites = ProposedSites::new();
        sites.add(Location::new(1.0, 2.0));
        sites.add(ProposedSite::new(Location::new(3.0, 4.0)).with_address("1 Main St"));
        assert_eq!(sites.len(), 2);
        assert_eq!(
            sites.locations(),
            vec![Location::new(1.0, 2.0), Location::new(3.0, 4.0)]
        );
        let (label, site) = sites.labelled().nth(1).expect("second site");
        assert_eq!(label, "Site 2");
        assert_eq!(site.address.as_deref(), Some("1 Main St"));
    }

    #[rstest]
    fn deserialises_from_a_flat_json_array() {
        let json = r#"[
            {"latitude": 37.33, "longitude": -121.88, "address": "200 E Santa Clara St"},
            {"latitude": 37.32, "longitude": -121.90}
        ]"#;
        let sites: ProposedSites = serde_json::from_str(json).expect("valid site json");
        assert_eq!(sites.len(), 2);
        assert!(sites.iter().nth(1).is_some_and(|site| site.address.is_none()));
    }
}
