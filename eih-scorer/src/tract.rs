//! Strategies that pick the demographic record used for a location.
//!
//! The community impact aggregator does not care how a record is chosen.
//! [`RandomSample`] draws uniformly from the whole dataset and ignores the
//! location, [`NearestTract`] joins the location to the nearest tract
//! centroid, and [`FixedTract`] always returns the same row.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use eih_core::{DemographicDataset, DemographicRecord, Location};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::CommunityImpactError;

/// Select the demographic record that describes `location`.
///
/// Implementations must be thread-safe so a scorer can be shared across
/// threads scoring disjoint candidates, and `Clone` so that cloning a
/// scorer also clones its lookup state.
pub trait TractLookup: Send + Sync + fmt::Debug + CloneLookup {
    /// Return the record to aggregate for `location`.
    ///
    /// # Errors
    /// Returns [`CommunityImpactError`] when no record can be selected.
    fn select<'a>(
        &self,
        location: Location,
        dataset: &'a DemographicDataset,
    ) -> Result<&'a DemographicRecord, CommunityImpactError>;
}

/// Clone a lookup behind a trait object.
///
/// Implemented for every `TractLookup + Clone`; there is no need to
/// implement it by hand.
pub trait CloneLookup {
    /// Return an owned copy of this lookup.
    fn clone_lookup(&self) -> Box<dyn TractLookup>;
}

impl<T> CloneLookup for T
where
    T: TractLookup + Clone + 'static,
{
    fn clone_lookup(&self) -> Box<dyn TractLookup> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn TractLookup> {
    fn clone(&self) -> Self {
        (**self).clone_lookup()
    }
}

/// Uniform random draw over all records, one draw per call.
///
/// Repeated calls with the same inputs may pick different records. Use
/// [`RandomSample::seeded`] for a reproducible sequence.
///
/// # Examples
/// ```
/// use eih_core::{DemographicDataset, DemographicRecord, Location};
/// use eih_scorer::{RandomSample, TractLookup};
///
/// let dataset = DemographicDataset::new(vec![DemographicRecord::new(1.0, 2.0, 3.0)]);
/// let lookup = RandomSample::seeded(7);
/// let record = lookup.select(Location::new(0.0, 0.0), &dataset)?;
/// assert_eq!(record.poverty_rate, Some(2.0));
/// # Ok::<(), eih_scorer::CommunityImpactError>(())
/// ```
#[derive(Debug)]
pub struct RandomSample {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomSample {
    /// Sampler with a deterministic sequence derived from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Sampler seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    const fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Clone for RandomSample {
    /// Copy the generator state; the copy continues the sequence
    /// independently of the original.
    fn clone(&self) -> Self {
        let rng = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Self::with_rng(rng)
    }
}

impl Default for RandomSample {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TractLookup for RandomSample {
    fn select<'a>(
        &self,
        _location: Location,
        dataset: &'a DemographicDataset,
    ) -> Result<&'a DemographicRecord, CommunityImpactError> {
        let len = dataset.len();
        if len == 0 {
            return Err(CommunityImpactError::EmptyDataset);
        }
        let index = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| CommunityImpactError::SamplerUnavailable)?;
            rng.gen_range(0..len)
        };
        dataset
            .get(index)
            .ok_or(CommunityImpactError::TractOutOfRange { index, len })
    }
}

/// Spatial join to the record whose centroid is nearest the location.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestTract;

impl TractLookup for NearestTract {
    fn select<'a>(
        &self,
        location: Location,
        dataset: &'a DemographicDataset,
    ) -> Result<&'a DemographicRecord, CommunityImpactError> {
        if dataset.is_empty() {
            return Err(CommunityImpactError::EmptyDataset);
        }
        dataset
            .nearest(location)
            .ok_or(CommunityImpactError::NoTractForLocation)
    }
}

/// Always select the record at a fixed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedTract {
    /// Zero-based record index.
    pub index: usize,
}

impl FixedTract {
    /// Select the record at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl TractLookup for FixedTract {
    fn select<'a>(
        &self,
        _location: Location,
        dataset: &'a DemographicDataset,
    ) -> Result<&'a DemographicRecord, CommunityImpactError> {
        let len = dataset.len();
        if len == 0 {
            return Err(CommunityImpactError::EmptyDataset);
        }
        dataset
            .get(self.index)
            .ok_or(CommunityImpactError::TractOutOfRange {
                index: self.index,
                len,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eih_core::test_support::{DOWNTOWN, sample_dataset};
    use rstest::rstest;

    #[rstest]
    fn seeded_samplers_repeat_their_sequence() {
        let dataset = sample_dataset();
        let first = RandomSample::seeded(42);
        let second = RandomSample::seeded(42);
        for _ in 0..16 {
            let a = first.select(DOWNTOWN, &dataset).expect("sample");
            let b = second.select(DOWNTOWN, &dataset).expect("sample");
            assert_eq!(a.tract_id, b.tract_id);
        }
    }

    #[rstest]
    fn random_sample_visits_more_than_one_record() {
        let dataset = sample_dataset();
        let lookup = RandomSample::seeded(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let record = lookup.select(DOWNTOWN, &dataset).expect("sample");
            seen.insert(record.tract_id.clone());
        }
        assert!(seen.len() > 1, "sampler never moved off one tract");
    }

    #[rstest]
    fn cloned_samplers_continue_independently() {
        let dataset = sample_dataset();
        let original = RandomSample::seeded(5);
        original.select(DOWNTOWN, &dataset).expect("sample");
        let copy = original.clone();
        let reference = RandomSample::seeded(5);
        reference.select(DOWNTOWN, &dataset).expect("sample");
        for _ in 0..16 {
            copy.select(DOWNTOWN, &dataset).expect("sample");
        }
        for _ in 0..16 {
            let a = original.select(DOWNTOWN, &dataset).expect("sample");
            let b = reference.select(DOWNTOWN, &dataset).expect("sample");
            assert_eq!(a.tract_id, b.tract_id);
        }
    }

    #[rstest]
    fn every_lookup_rejects_an_empty_dataset() {
        let empty = DemographicDataset::default();
        let lookups: [&dyn TractLookup; 3] =
            [&RandomSample::seeded(0), &NearestTract, &FixedTract::new(0)];
        for lookup in lookups {
            assert_eq!(
                lookup.select(DOWNTOWN, &empty).expect_err("empty dataset"),
                CommunityImpactError::EmptyDataset
            );
        }
    }

    #[rstest]
    fn nearest_tract_requires_centroids() {
        let dataset = DemographicDataset::new(vec![DemographicRecord::new(1.0, 1.0, 1.0)]);
        assert_eq!(
            NearestTract
                .select(DOWNTOWN, &dataset)
                .expect_err("no centroid"),
            CommunityImpactError::NoTractForLocation
        );
    }

    #[rstest]
    fn fixed_tract_reports_out_of_range_indices() {
        let dataset = sample_dataset();
        assert_eq!(
            FixedTract::new(9)
                .select(DOWNTOWN, &dataset)
                .expect_err("index past the end"),
            CommunityImpactError::TractOutOfRange { index: 9, len: 3 }
        );
    }
}
