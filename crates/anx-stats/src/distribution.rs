//! Histogram binning and Gaussian kernel density estimation for the
//! heart-rate/breathing-rate distribution chart.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Inclusive-start bounds of bin `idx`.
    pub fn bin_range(&self, idx: usize) -> (f64, f64) {
        let low = self.start + self.bin_width * idx as f64;
        (low, low + self.bin_width)
    }

    pub fn end(&self) -> f64 {
        self.start + self.bin_width * self.counts.len() as f64
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Equal-width histogram over the finite values. `None` when there is nothing
/// to bin. A constant sample gets a single unit-width bin instead of a
/// zero-width one.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return None;
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (bins, bin_width) = if max > min {
        (bins, (max - min) / bins as f64)
    } else {
        (1, 1.0)
    };
    let mut counts = vec![0usize; bins];
    for value in &finite {
        let idx = (((value - min) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Some(Histogram {
        start: min,
        bin_width,
        counts,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct DensityCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Gaussian kernel density estimate sampled at `points` positions across the
/// data range padded by three bandwidths. Bandwidth is Silverman's rule, with
/// a unit fallback when the sample variance is zero.
pub fn gaussian_kde(values: &[f64], points: usize) -> Option<DensityCurve> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || points < 2 {
        return None;
    }
    let n = finite.len() as f64;
    let mean = finite.iter().sum::<f64>() / n;
    let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let mut bandwidth = 1.06 * std * n.powf(-0.2);
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        bandwidth = 1.0;
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min) - 3.0 * bandwidth;
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bandwidth;
    let step = (max - min) / (points - 1) as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    let mut xs = Vec::with_capacity(points);
    let mut ys = Vec::with_capacity(points);
    for i in 0..points {
        let x = min + step * i as f64;
        let density = finite
            .iter()
            .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
            .sum::<f64>()
            * norm;
        xs.push(x);
        ys.push(density);
    }
    Some(DensityCurve { xs, ys })
}
