//! Feature-vector diff and ranking.
//!
//! A feature vector is a sparse map from feature name to weight. This module
//! compares two vectors feature-by-feature and ranks a single vector by
//! absolute weight, producing rows ready for tab-separated display.

use std::collections::BTreeMap;

/// Sparse mapping from feature name to weight.
///
/// An ordered map so that union iteration and tie-breaking are deterministic.
pub type FeatureVector = BTreeMap<String, f64>;

/// Deltas with absolute value at or below this are considered noise and are
/// dropped from diff output.
pub const DIFF_THRESHOLD: f64 = 0.01;

/// One row of diff output: a feature whose weight changed between two models.
///
/// `in_a` / `in_b` are `None` when the feature is absent from that side; the
/// delta treats an absent side as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDelta {
    pub feature: String,
    pub delta: f64,
    pub in_a: Option<f64>,
    pub in_b: Option<f64>,
}

/// Compare two feature vectors.
///
/// Walks the union of feature names, keeps every feature with
/// `|a - b| > DIFF_THRESHOLD` (absent sides count as zero), and sorts by
/// descending absolute delta, ties by feature name.
pub fn diff(a: &FeatureVector, b: &FeatureVector) -> Vec<FeatureDelta> {
    let mut rows: Vec<FeatureDelta> = a
        .keys()
        .chain(b.keys().filter(|f| !a.contains_key(*f)))
        .filter_map(|feature| {
            let in_a = a.get(feature).copied();
            let in_b = b.get(feature).copied();
            let delta = in_a.unwrap_or(0.0) - in_b.unwrap_or(0.0);
            (delta.abs() > DIFF_THRESHOLD).then(|| FeatureDelta {
                feature: feature.clone(),
                delta,
                in_a,
                in_b,
            })
        })
        .collect();

    rows.sort_by(|x, y| {
        y.delta
            .abs()
            .total_cmp(&x.delta.abs())
            .then_with(|| x.feature.cmp(&y.feature))
    });
    rows
}

/// Rank every feature of a vector by descending absolute weight.
///
/// No threshold: the output contains exactly the features of the input.
pub fn rank(v: &FeatureVector) -> Vec<(String, f64)> {
    let mut rows: Vec<(String, f64)> = v.iter().map(|(f, w)| (f.clone(), *w)).collect();
    rows.sort_by(|x, y| y.1.abs().total_cmp(&x.1.abs()).then_with(|| x.0.cmp(&y.0)));
    rows
}

/// Round a value to 12 significant digits for display.
///
/// Computed deltas pick up floating-point residue (`1.0 - 0.98` is
/// `0.020000000000000018`); rounding before formatting shows the short form
/// (`0.02`) while leaving values parsed verbatim from artifacts untouched
/// by their callers.
pub fn round_sig(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let factor = 10f64.powi(11 - magnitude);
    if !factor.is_finite() || factor == 0.0 {
        return x;
    }
    (x * factor).round() / factor
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn vec_of(entries: &[(&str, f64)]) -> FeatureVector {
        entries.iter().map(|(f, w)| (f.to_string(), *w)).collect()
    }

    #[test]
    fn diff_respects_threshold_and_order() {
        // a has {x: 1.0, y: 0.005}, b has {x: 0.98, z: 2.0}:
        // z changes by 2.0, x by 0.02, y stays under the threshold.
        let a = vec_of(&[("x", 1.0), ("y", 0.005)]);
        let b = vec_of(&[("x", 0.98), ("z", 2.0)]);

        let rows = diff(&a, &b);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].feature, "z");
        assert_abs_diff_eq!(rows[0].delta, -2.0);
        assert_eq!(rows[0].in_a, None);
        assert_eq!(rows[0].in_b, Some(2.0));
        assert_eq!(rows[1].feature, "x");
        assert_abs_diff_eq!(rows[1].delta, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn diff_output_is_sorted_by_descending_abs_delta() {
        let a = vec_of(&[("p", 0.5), ("q", -3.0), ("r", 1.5)]);
        let b = FeatureVector::new();

        let rows = diff(&a, &b);
        let abs: Vec<f64> = rows.iter().map(|r| r.delta.abs()).collect();
        assert!(abs.windows(2).all(|w| w[0] >= w[1]));
        for row in &rows {
            assert!(row.delta.abs() > DIFF_THRESHOLD);
        }
    }

    #[test]
    fn diff_ties_break_by_feature_name() {
        let a = vec_of(&[("b", 1.0), ("a", 1.0)]);
        let b = FeatureVector::new();

        let rows = diff(&a, &b);
        assert_eq!(rows[0].feature, "a");
        assert_eq!(rows[1].feature, "b");
    }

    #[test]
    fn identical_vectors_diff_to_nothing() {
        let a = vec_of(&[("x", 1.0), ("y", -2.0)]);
        assert!(diff(&a, &a).is_empty());
    }

    #[test]
    fn round_sig_trims_floating_point_residue() {
        assert_eq!(format!("{:?}", round_sig(1.0 - 0.98)), "0.02");
        assert_eq!(round_sig(-2.0), -2.0);
        assert_eq!(round_sig(0.0), 0.0);
        assert_eq!(round_sig(0.005), 0.005);
        assert_eq!(round_sig(123.456), 123.456);
    }

    #[test]
    fn diff_deltas_display_in_short_form() {
        let a = vec_of(&[("x", 1.0)]);
        let b = vec_of(&[("x", 0.98), ("z", 2.0)]);

        let rows = diff(&a, &b);
        assert_eq!(format!("({:?})", round_sig(rows[0].delta)), "(-2.0)");
        assert_eq!(format!("({:?})", round_sig(rows[1].delta)), "(0.02)");
    }

    #[test]
    fn rank_keeps_every_feature() {
        let v = vec_of(&[("small", 0.001), ("neg", -5.0), ("mid", 2.0)]);

        let rows = rank(&v);
        assert_eq!(rows.len(), v.len());
        assert_eq!(rows[0].0, "neg");
        assert_eq!(rows[1].0, "mid");
        assert_eq!(rows[2].0, "small");
        let abs: Vec<f64> = rows.iter().map(|(_, w)| w.abs()).collect();
        assert!(abs.windows(2).all(|w| w[0] >= w[1]));
    }
}
