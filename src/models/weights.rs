//! Normalized relative-weight series.
//!
//! A `WeightVector` maps an ordered key domain (weekdays, or hours of day)
//! to non-negative weights summing to 1.0. It is the crate's representation
//! of "relative sales volume": how busy each day or hour is compared to the
//! rest of the week.
//!
//! # Degradation policy
//! Invalid raw input (zero total, negative or non-finite entries) degrades
//! to a uniform distribution instead of failing. Missing or broken sales
//! history must never block schedule generation.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// Day-of-week weight series.
pub type DayWeights = WeightVector<Weekday>;

/// Hour-of-day weight series.
pub type HourWeights = WeightVector<u8>;

/// A normalized weight series over a fixed, ordered key domain.
///
/// Immutable once constructed; `scale` returns a new, re-normalized vector.
///
/// # Example
/// ```
/// use shift_roster::models::{WeightVector, Weekday};
///
/// let w = WeightVector::normalize(Weekday::ALL.iter().map(|&d| (d, 10.0)));
/// assert!((w.get(Weekday::Monday) - 1.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector<K> {
    keys: Vec<K>,
    weights: Vec<f64>,
}

impl<K: Copy + PartialEq> WeightVector<K> {
    /// Builds a normalized vector from raw (key, weight) pairs.
    ///
    /// Each weight is divided by the sum of all weights. If the sum is zero
    /// or not finite, or any entry is negative or not finite, the result is
    /// a uniform vector over the same key domain.
    pub fn normalize(raw: impl IntoIterator<Item = (K, f64)>) -> Self {
        let (keys, mut weights): (Vec<K>, Vec<f64>) = raw.into_iter().unzip();
        let total: f64 = weights.iter().sum();
        let degenerate =
            !total.is_finite() || total <= 0.0 || weights.iter().any(|w| !w.is_finite() || *w < 0.0);
        if degenerate {
            return Self::uniform(keys);
        }
        for w in &mut weights {
            *w /= total;
        }
        Self { keys, weights }
    }

    /// Builds a uniform vector (`1/|domain|` per key).
    pub fn uniform(keys: impl IntoIterator<Item = K>) -> Self {
        let keys: Vec<K> = keys.into_iter().collect();
        let n = keys.len().max(1);
        let weights = vec![1.0 / n as f64; keys.len()];
        Self { keys, weights }
    }

    /// Returns a new vector with one entry multiplied by `factor`,
    /// re-normalized over the whole domain.
    ///
    /// Used to boost weekend weighting before demand computation. An
    /// unknown key returns an unchanged copy.
    pub fn scale(&self, key: K, factor: f64) -> Self {
        let pairs = self
            .keys
            .iter()
            .zip(&self.weights)
            .map(|(&k, &w)| if k == key { (k, w * factor) } else { (k, w) });
        Self::normalize(pairs.collect::<Vec<_>>())
    }

    /// Weight for a key (0.0 for keys outside the domain).
    pub fn get(&self, key: K) -> f64 {
        self.keys
            .iter()
            .position(|&k| k == key)
            .map(|i| self.weights[i])
            .unwrap_or(0.0)
    }

    /// First key attaining the minimum weight.
    ///
    /// First occurrence wins on ties, so the "quietest hour" pick is
    /// deterministic even for uniform series.
    pub fn min_key(&self) -> Option<K> {
        let mut best: Option<(K, f64)> = None;
        for (&k, &w) in self.keys.iter().zip(&self.weights) {
            match best {
                Some((_, bw)) if w >= bw => {}
                _ => best = Some((k, w)),
            }
        }
        best.map(|(k, _)| k)
    }

    /// Iterates (key, weight) pairs in domain order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.keys.iter().zip(&self.weights).map(|(&k, &w)| (k, w))
    }

    /// Sum of all weights (1.0 for any non-empty vector).
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Number of keys in the domain.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
