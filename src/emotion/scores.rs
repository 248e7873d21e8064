//! Dense per-category score vector.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::category::EmotionCategory;

/// Non-negative score per [`EmotionCategory`].
///
/// After [`ScoreVector::normalize`] the entries sum to 1.0 unless every
/// entry was zero, in which case the vector is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreVector {
    values: [f64; EmotionCategory::COUNT],
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreVector {
    /// All-zero vector.
    pub fn new() -> Self {
        Self {
            values: [0.0; EmotionCategory::COUNT],
        }
    }

    /// Build from explicit `(category, score)` pairs; unnamed categories are 0.
    pub fn from_pairs(pairs: &[(EmotionCategory, f64)]) -> Self {
        let mut v = Self::new();
        for &(c, s) in pairs {
            v.set(c, s);
        }
        v
    }

    /// 1.0 on `category`, 0 elsewhere.
    pub fn one_hot(category: EmotionCategory) -> Self {
        Self::from_pairs(&[(category, 1.0)])
    }

    pub fn get(&self, category: EmotionCategory) -> f64 {
        self.values[category.index()]
    }

    pub fn set(&mut self, category: EmotionCategory, score: f64) {
        self.values[category.index()] = score;
    }

    pub fn add(&mut self, category: EmotionCategory, delta: f64) {
        self.values[category.index()] += delta;
    }

    pub fn scale(&mut self, category: EmotionCategory, factor: f64) {
        self.values[category.index()] *= factor;
    }

    /// Add `other * weight` entrywise.
    pub fn add_weighted(&mut self, other: &ScoreVector, weight: f64) {
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            *a += b * weight;
        }
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Largest score among non-neutral categories.
    pub fn max_non_neutral(&self) -> f64 {
        self.iter()
            .filter(|(c, _)| !c.is_neutral())
            .map(|(_, s)| s)
            .fold(0.0, f64::max)
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&s| s == 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|s| s.is_finite())
    }

    /// Scale so the entries sum to 1.0. Returns `false` (and leaves the
    /// vector unchanged) when the sum is zero.
    pub fn normalize(&mut self) -> bool {
        let total = self.sum();
        if total <= 0.0 {
            return false;
        }
        for s in &mut self.values {
            *s /= total;
        }
        true
    }

    /// Normalized copy.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// `(category, score)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f64)> + '_ {
        EmotionCategory::ALL
            .iter()
            .map(move |&c| (c, self.values[c.index()]))
    }

    /// Entries sorted by descending score. The sort is stable, so ties keep
    /// declaration order.
    pub fn ranked(&self) -> Vec<(EmotionCategory, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// Category with the highest score (earliest on ties).
    pub fn top(&self) -> (EmotionCategory, f64) {
        let mut best = (EmotionCategory::ALL[0], self.values[0]);
        for (c, s) in self.iter().skip(1) {
            if s > best.1 {
                best = (c, s);
            }
        }
        best
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(EmotionCategory::COUNT))?;
        for (c, s) in self.iter() {
            map.serialize_entry(c.as_str(), &s)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use EmotionCategory::*;

    #[test]
    fn normalize_sums_to_one() {
        let mut v = ScoreVector::from_pairs(&[(Joy, 3.0), (Fear, 1.0)]);
        assert!(v.normalize());
        assert!((v.sum() - 1.0).abs() < 1e-12);
        assert!((v.get(Joy) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn normalize_leaves_zero_vector_alone() {
        let mut v = ScoreVector::new();
        assert!(!v.normalize());
        assert!(v.is_zero());
    }

    #[test]
    fn ranked_ties_keep_declaration_order() {
        let v = ScoreVector::from_pairs(&[(Sadness, 0.5), (Joy, 0.5), (Achievement, 0.1)]);
        let ranked = v.ranked();
        assert_eq!(ranked[0].0, Joy);
        assert_eq!(ranked[1].0, Sadness);
        assert_eq!(ranked[2].0, Achievement);
    }

    #[test]
    fn top_prefers_earliest_on_tie() {
        let v = ScoreVector::from_pairs(&[(Fear, 0.4), (Anger, 0.4)]);
        assert_eq!(v.top().0, Anger);
    }

    #[test]
    fn max_non_neutral_ignores_neutral() {
        let v = ScoreVector::from_pairs(&[(Neutral, 0.9), (Joy, 0.05)]);
        assert!((v.max_non_neutral() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_label_map() {
        let v = ScoreVector::one_hot(Relief);
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["relief"], 1.0);
        assert_eq!(json["neutral"], 0.0);
    }
}
