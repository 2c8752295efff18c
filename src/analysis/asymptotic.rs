use crate::data::model::SpannerKind;
use crate::error::ReportError;

/// `k` used for the edge bound of the three-spanner, which has no `k` of
/// its own. Chosen empirically: `2·n^1.5` tracks the measured sizes.
pub const THREE_SPANNER_EFFECTIVE_K: u32 = 2;

/// Proven stretch of three-spanner class constructions.
pub const STRETCH_BOUND: f64 = 3.0;

/// `k` to plug into [`theoretical_edge_bound`] for a given algorithm.
pub fn effective_k(kind: SpannerKind) -> u32 {
    match kind {
        SpannerKind::ThreeSpanner => THREE_SPANNER_EFFECTIVE_K,
        SpannerKind::TwoKMinusOne(k) => k,
    }
}

/// `ys[i] = k · xs[i]^(1 + 1/k)`.
pub fn theoretical_edge_bound(xs: &[f64], k: u32) -> Result<Vec<f64>, ReportError> {
    if k == 0 {
        return Err(ReportError::InvalidParameter(
            "edge bound needs k >= 1".to_string(),
        ));
    }
    let k = f64::from(k);
    let exponent = 1.0 + 1.0 / k;
    Ok(xs.iter().map(|&x| k * x.powf(exponent)).collect())
}

/// Constant [`STRETCH_BOUND`] for every `x`.
pub fn theoretical_stretch_bound(xs: &[f64]) -> Vec<f64> {
    vec![STRETCH_BOUND; xs.len()]
}

/// Legend text for the edge bound, e.g. `2·n^1.5`.
pub fn edge_bound_label(k: u32, var: &str) -> String {
    let exponent = 1.0 + 1.0 / f64::from(k.max(1));
    let exponent = format!("{exponent:.3}");
    let exponent = exponent.trim_end_matches('0').trim_end_matches('.');
    format!("{k}·{var}^{exponent}")
}

pub fn stretch_bound_label() -> String {
    format!("stretch = {STRETCH_BOUND}")
}
