//! Multi-level MODWT: the pyramidal a-trous cascade.
//!
//! Level j filters the previous level's approximation with stride 2^(j-1),
//! so every detail band and the final approximation keep the input length.
//! The inverse walks the cascade in reverse.

extern crate alloc;
use alloc::vec::Vec;

use crate::boundary::BoundaryMode;
use crate::transform::{self, ModwtError};
use crate::wavelet::Wavelet;

/// Largest admissible decomposition depth for a signal of length `n` under a
/// filter of `filter_len` taps: the deepest J with (L-1)(2^J - 1) < n.
pub fn max_level(n: usize, filter_len: usize) -> usize {
    if n == 0 || filter_len < 2 {
        return 0;
    }
    let reach = filter_len - 1;
    let mut j = 0;
    while j < transform::MAX_KERNEL_LEVEL {
        let span = ((1u128 << (j + 1)) - 1) * reach as u128;
        if span >= n as u128 {
            break;
        }
        j += 1;
    }
    j
}

/// Ordered multi-level decomposition: detail bands 1..=J plus the level-J
/// approximation, all of the input's length.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLevelResult {
    details: Vec<Vec<f64>>,
    approx: Vec<f64>,
}

impl MultiLevelResult {
    /// Reassemble a decomposition from its parts, validating the shape.
    pub fn from_parts(details: Vec<Vec<f64>>, approx: Vec<f64>) -> Result<Self, ModwtError> {
        if details.is_empty() || approx.is_empty() {
            return Err(ModwtError::EmptyInput);
        }
        let n = approx.len();
        for band in &details {
            if band.len() != n {
                return Err(ModwtError::MismatchedLengths {
                    expected: n,
                    got: band.len(),
                });
            }
        }
        Ok(MultiLevelResult { details, approx })
    }

    /// Number of detail levels J.
    pub fn levels(&self) -> usize {
        self.details.len()
    }

    /// Signal length preserved by every band.
    pub fn len(&self) -> usize {
        self.approx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approx.is_empty()
    }

    /// Detail band for `level` in 1..=J.
    pub fn detail(&self, level: usize) -> Option<&[f64]> {
        if level == 0 {
            return None;
        }
        self.details.get(level - 1).map(|v| v.as_slice())
    }

    /// Mutable detail band, for in-place shrinkage. Do not change its length.
    pub fn detail_mut(&mut self, level: usize) -> Option<&mut [f64]> {
        if level == 0 {
            return None;
        }
        self.details.get_mut(level - 1).map(|v| v.as_mut_slice())
    }

    /// Final approximation band.
    pub fn approx(&self) -> &[f64] {
        &self.approx
    }

    pub fn approx_mut(&mut self) -> &mut [f64] {
        &mut self.approx
    }

    /// Sum of squares per band, detail 1..=J first, approximation last.
    pub fn energy_per_level(&self) -> Vec<f64> {
        let mut energies: Vec<f64> = self
            .details
            .iter()
            .map(|band| band.iter().map(|x| x * x).sum())
            .collect();
        energies.push(self.approx.iter().map(|x| x * x).sum());
        energies
    }

    /// Consume the container, yielding `(details, approx)`.
    pub fn into_parts(self) -> (Vec<Vec<f64>>, Vec<f64>) {
        (self.details, self.approx)
    }
}

/// Decompose `signal` into `levels` detail bands plus an approximation.
///
/// Fails with [`ModwtError::InvalidLevel`] when `levels` is zero or exceeds
/// [`max_level`] for this signal and wavelet.
pub fn forward(
    signal: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
    levels: usize,
) -> Result<MultiLevelResult, ModwtError> {
    transform::validate_signal(signal)?;
    let admissible = max_level(signal.len(), wavelet.filter_len());
    if levels == 0 || levels > admissible {
        return Err(ModwtError::InvalidLevel {
            requested: levels,
            max: admissible,
        });
    }
    let mut details = Vec::with_capacity(levels);
    let mut current = signal.to_vec();
    for level in 1..=levels {
        let coeffs = transform::forward_at_level(&current, wavelet, mode, level)?;
        details.push(coeffs.detail);
        current = coeffs.approx;
    }
    Ok(MultiLevelResult {
        details,
        approx: current,
    })
}

/// Reconstruct the signal from a multi-level decomposition.
///
/// Walks levels J..=1, combining the running approximation with each detail
/// band at its own dilation. Periodic mode recovers the input exactly.
pub fn inverse(
    decomposition: &MultiLevelResult,
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<Vec<f64>, ModwtError> {
    let levels = decomposition.levels();
    if levels == 0 {
        return Err(ModwtError::InvalidLevel {
            requested: 0,
            max: transform::MAX_KERNEL_LEVEL,
        });
    }
    let mut current = decomposition.approx.clone();
    for level in (1..=levels).rev() {
        current = transform::inverse_at_level(
            &current,
            &decomposition.details[level - 1],
            wavelet,
            mode,
            level,
        )?;
    }
    Ok(current)
}
