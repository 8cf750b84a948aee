#![allow(unused)]

use minarrow::FloatArray;

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert!(
                ai.is_infinite() && ai.is_sign_positive() == ei.is_sign_positive(),
                "idx {i}: expected {ei}, got {ai}"
            );
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

/// Lane values of an output that must carry no null mask.
pub fn dense(arr: &FloatArray<f64>) -> Vec<f64> {
    assert!(arr.null_mask.is_none(), "unexpected null mask");
    arr.data.iter().copied().collect()
}

/// Validity of every lane; all `true` when no mask is attached.
pub fn validity(arr: &FloatArray<f64>) -> Vec<bool> {
    match arr.null_mask.as_ref() {
        Some(m) => (0..arr.data.len()).map(|i| m.get(i)).collect(),
        None => vec![true; arr.data.len()],
    }
}

/// `n` evenly spaced points from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

/// Midpoints of `n` equal cells over `[lo, hi]`, with the cell width.
pub fn midpoints(lo: f64, hi: f64, n: usize) -> (Vec<f64>, f64) {
    let h = (hi - lo) / n as f64;
    ((0..n).map(|i| lo + h * (i as f64 + 0.5)).collect(), h)
}
