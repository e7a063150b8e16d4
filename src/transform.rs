//! Single-level MODWT kernel: forward, inverse, and the batch paths.
//!
//! The maximal overlap transform never downsamples, so both coefficient
//! bands have the length of the input at every level. Filters are rescaled
//! by 1/sqrt(2) once per level and applied with the a-trous stride
//! 2^(level-1); out-of-range taps are resolved through a [`BoundaryMode`].

extern crate alloc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::boundary::BoundaryMode;
use crate::wavelet::{TransformKind, Wavelet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this length the parallel feature keeps the scalar path; the fork
/// overhead dominates for short signals.
#[cfg(feature = "parallel")]
pub(crate) const PARALLEL_MODWT_THRESHOLD: usize = 4096;

#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 1024;

/// Deepest level the kernel accepts; the a-trous stride 2^(level-1) must
/// stay representable.
pub const MAX_KERNEL_LEVEL: usize = 58;

/// Errors for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ModwtError {
    /// Input slice was empty.
    EmptyInput,
    /// Sample at `index` was NaN or infinite.
    NonFiniteSample { index: usize },
    /// Signal shorter than the operation can work with.
    SignalTooShort { len: usize, min: usize },
    /// No wavelet is registered under this name.
    UnknownWavelet(String),
    /// A filter failed the L2-normalization check; `norm` is the observed
    /// squared norm.
    FilterNotNormalized { wavelet: &'static str, norm: f64 },
    /// Filter bank violates its quadrature or duality relation.
    QuadratureMismatch { wavelet: &'static str, residual: f64 },
    /// Wavelet cannot drive the requested transform.
    UnsupportedTransform {
        wavelet: &'static str,
        transform: TransformKind,
    },
    /// Decomposition depth outside the admissible range for this signal and
    /// filter combination.
    InvalidLevel { requested: usize, max: usize },
    /// Paired coefficient arrays disagree in length.
    MismatchedLengths { expected: usize, got: usize },
    /// Streaming block shorter than the wavelet filter.
    InvalidBlockSize { block: usize, filter: usize },
    /// Streaming overlap beyond half the block size.
    InvalidOverlap { overlap: usize, max: usize },
    /// A configuration parameter was malformed.
    InvalidConfig { param: &'static str },
    /// Output queue is at its high-water mark; retry after draining.
    BackPressure { queued: usize },
    /// Operation on a closed stream.
    Closed,
    /// Stream was cancelled; queued results were discarded.
    Cancelled,
    /// Flush deadline expired before the queue had room.
    Timeout,
}

impl core::fmt::Display for ModwtError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ModwtError::EmptyInput => write!(f, "input signal is empty"),
            ModwtError::NonFiniteSample { index } => {
                write!(f, "sample at index {} is not finite", index)
            }
            ModwtError::SignalTooShort { len, min } => {
                write!(f, "signal length {} below minimum {}", len, min)
            }
            ModwtError::UnknownWavelet(name) => write!(f, "unknown wavelet: {}", name),
            ModwtError::FilterNotNormalized { wavelet, norm } => {
                write!(f, "wavelet {}: squared filter norm {} is not 1", wavelet, norm)
            }
            ModwtError::QuadratureMismatch { wavelet, residual } => {
                write!(f, "wavelet {}: filter bank residual {}", wavelet, residual)
            }
            ModwtError::UnsupportedTransform { wavelet, transform } => {
                write!(f, "wavelet {} does not support the {:?} transform", wavelet, transform)
            }
            ModwtError::InvalidLevel { requested, max } => {
                write!(f, "level {} outside admissible range 1..={}", requested, max)
            }
            ModwtError::MismatchedLengths { expected, got } => {
                write!(f, "expected length {}, got {}", expected, got)
            }
            ModwtError::InvalidBlockSize { block, filter } => {
                write!(f, "block size {} below filter length {}", block, filter)
            }
            ModwtError::InvalidOverlap { overlap, max } => {
                write!(f, "overlap {} exceeds maximum {}", overlap, max)
            }
            ModwtError::InvalidConfig { param } => write!(f, "invalid configuration: {}", param),
            ModwtError::BackPressure { queued } => {
                write!(f, "output queue saturated with {} results", queued)
            }
            ModwtError::Closed => write!(f, "stream is closed"),
            ModwtError::Cancelled => write!(f, "stream was cancelled"),
            ModwtError::Timeout => write!(f, "flush deadline expired"),
        }
    }
}

/// One level of MODWT output; both bands have the input's length.
#[derive(Debug, Clone, PartialEq)]
pub struct ModwtResult {
    pub approx: Vec<f64>,
    pub detail: Vec<f64>,
}

impl ModwtResult {
    pub fn len(&self) -> usize {
        self.approx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approx.is_empty()
    }

    /// Sum of squares over both bands.
    pub fn energy(&self) -> f64 {
        self.approx.iter().chain(self.detail.iter()).map(|x| x * x).sum()
    }
}

/// Reject empty or non-finite input before touching any state.
pub(crate) fn validate_signal(signal: &[f64]) -> Result<(), ModwtError> {
    if signal.is_empty() {
        return Err(ModwtError::EmptyInput);
    }
    for (index, &x) in signal.iter().enumerate() {
        if !x.is_finite() {
            return Err(ModwtError::NonFiniteSample { index });
        }
    }
    Ok(())
}

pub(crate) fn validate_level(level: usize) -> Result<(), ModwtError> {
    if level == 0 || level > MAX_KERNEL_LEVEL {
        return Err(ModwtError::InvalidLevel {
            requested: level,
            max: MAX_KERNEL_LEVEL,
        });
    }
    Ok(())
}

/// Rescale filter taps by 1/sqrt(2) for one transform level.
fn rescale(filter: &[f64]) -> Vec<f64> {
    filter.iter().map(|x| x / core::f64::consts::SQRT_2).collect()
}

fn analysis_point(
    signal: &[f64],
    h: &[f64],
    g: &[f64],
    mode: BoundaryMode,
    stride: usize,
    t: usize,
) -> (f64, f64) {
    let n = signal.len();
    let mut a = 0.0;
    let mut d = 0.0;
    for (k, (&hk, &gk)) in h.iter().zip(g.iter()).enumerate() {
        if let Some(src) = mode.resolve(t as isize - (k * stride) as isize, n) {
            let x = signal[src];
            a += hk * x;
            d += gk * x;
        }
    }
    (a, d)
}

fn synthesis_point(
    approx: &[f64],
    detail: &[f64],
    h: &[f64],
    g: &[f64],
    mode: BoundaryMode,
    stride: usize,
    t: usize,
) -> f64 {
    let n = approx.len();
    let mut v = 0.0;
    for (k, (&hk, &gk)) in h.iter().zip(g.iter()).enumerate() {
        if let Some(src) = mode.resolve(t as isize + (k * stride) as isize, n) {
            v += hk * approx[src] + gk * detail[src];
        }
    }
    v
}

fn forward_kernel(
    signal: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
    level: usize,
) -> ModwtResult {
    let n = signal.len();
    let stride = 1usize << (level - 1);
    let h = rescale(wavelet.h_dec());
    let g = rescale(wavelet.g_dec());
    let mut approx = vec![0.0; n];
    let mut detail = vec![0.0; n];

    #[cfg(feature = "parallel")]
    if n >= PARALLEL_MODWT_THRESHOLD {
        approx
            .par_chunks_mut(PARALLEL_CHUNK)
            .zip(detail.par_chunks_mut(PARALLEL_CHUNK))
            .enumerate()
            .for_each(|(chunk, (ac, dc))| {
                let base = chunk * PARALLEL_CHUNK;
                for (i, (a, d)) in ac.iter_mut().zip(dc.iter_mut()).enumerate() {
                    let (av, dv) = analysis_point(signal, &h, &g, mode, stride, base + i);
                    *a = av;
                    *d = dv;
                }
            });
        return ModwtResult { approx, detail };
    }

    for t in 0..n {
        let (a, d) = analysis_point(signal, &h, &g, mode, stride, t);
        approx[t] = a;
        detail[t] = d;
    }
    ModwtResult { approx, detail }
}

fn inverse_kernel(
    approx: &[f64],
    detail: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
    level: usize,
) -> Vec<f64> {
    let n = approx.len();
    let stride = 1usize << (level - 1);
    let h = rescale(wavelet.h_rec());
    let g = rescale(wavelet.g_rec());
    let mut out = vec![0.0; n];

    #[cfg(feature = "parallel")]
    if n >= PARALLEL_MODWT_THRESHOLD {
        out.par_chunks_mut(PARALLEL_CHUNK).enumerate().for_each(|(chunk, oc)| {
            let base = chunk * PARALLEL_CHUNK;
            for (i, o) in oc.iter_mut().enumerate() {
                *o = synthesis_point(approx, detail, &h, &g, mode, stride, base + i);
            }
        });
        return out;
    }

    for (t, o) in out.iter_mut().enumerate() {
        *o = synthesis_point(approx, detail, &h, &g, mode, stride, t);
    }
    out
}

/// Single-level forward MODWT at the base scale.
///
/// # Example
/// ```
/// use modwt::{get_wavelet, BoundaryMode};
///
/// let wavelet = get_wavelet("haar").unwrap();
/// let coeffs = modwt::forward(&[1.0, 2.0, 3.0, 4.0], &wavelet, BoundaryMode::Periodic).unwrap();
/// assert_eq!(coeffs.approx.len(), 4);
/// assert_eq!(coeffs.detail.len(), 4);
/// ```
pub fn forward(
    signal: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<ModwtResult, ModwtError> {
    forward_at_level(signal, wavelet, mode, 1)
}

/// Single-level forward MODWT with the a-trous stride 2^(level-1).
pub fn forward_at_level(
    signal: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
    level: usize,
) -> Result<ModwtResult, ModwtError> {
    validate_signal(signal)?;
    validate_level(level)?;
    Ok(forward_kernel(signal, wavelet, mode, level))
}

/// Invert one level of coefficients back into samples.
///
/// The boundary mode must match the forward call. Periodic mode reconstructs
/// exactly; the other modes are exact away from the edges and degrade within
/// one dilated filter length of either end.
pub fn inverse(
    coeffs: &ModwtResult,
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<Vec<f64>, ModwtError> {
    inverse_at_level(&coeffs.approx, &coeffs.detail, wavelet, mode, 1)
}

/// Invert one level at the a-trous stride 2^(level-1).
pub fn inverse_at_level(
    approx: &[f64],
    detail: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
    level: usize,
) -> Result<Vec<f64>, ModwtError> {
    if approx.len() != detail.len() {
        return Err(ModwtError::MismatchedLengths {
            expected: approx.len(),
            got: detail.len(),
        });
    }
    validate_signal(approx)?;
    validate_signal(detail)?;
    validate_level(level)?;
    Ok(inverse_kernel(approx, detail, wavelet, mode, level))
}

/// Forward transform of one block with explicit left history.
///
/// Taps reaching before the block start are resolved into the tail of
/// `history` (the samples that immediately precede the block). Only when the
/// history is too short does the boundary mode take over inside the block,
/// which makes a stream of such blocks agree with the undivided transform
/// everywhere the history covers. With an empty history this is exactly
/// [`forward`].
pub fn forward_with_history(
    block: &[f64],
    history: &[f64],
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<ModwtResult, ModwtError> {
    validate_signal(block)?;
    if history.is_empty() {
        return Ok(forward_kernel(block, wavelet, mode, 1));
    }
    validate_signal(history)?;
    let n = block.len();
    let h = rescale(wavelet.h_dec());
    let g = rescale(wavelet.g_dec());
    let mut approx = vec![0.0; n];
    let mut detail = vec![0.0; n];
    for t in 0..n {
        let mut a = 0.0;
        let mut d = 0.0;
        for (k, (&hk, &gk)) in h.iter().zip(g.iter()).enumerate() {
            let i = t as isize - k as isize;
            let x = if i >= 0 {
                block[i as usize]
            } else if history.len() as isize + i >= 0 {
                history[(history.len() as isize + i) as usize]
            } else if let Some(src) = mode.resolve(i, n) {
                block[src]
            } else {
                continue;
            };
            a += hk * x;
            d += gk * x;
        }
        approx[t] = a;
        detail[t] = d;
    }
    Ok(ModwtResult { approx, detail })
}

/// Forward-transform many same-length signals sequentially.
pub fn forward_batch(
    signals: &[Vec<f64>],
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<Vec<ModwtResult>, ModwtError> {
    if signals.is_empty() {
        return Err(ModwtError::EmptyInput);
    }
    let expected = signals[0].len();
    let mut out = Vec::with_capacity(signals.len());
    for signal in signals {
        if signal.len() != expected {
            return Err(ModwtError::MismatchedLengths {
                expected,
                got: signal.len(),
            });
        }
        out.push(forward(signal, wavelet, mode)?);
    }
    Ok(out)
}

/// Invert many coefficient pairs sequentially.
pub fn inverse_batch(
    results: &[ModwtResult],
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<Vec<Vec<f64>>, ModwtError> {
    if results.is_empty() {
        return Err(ModwtError::EmptyInput);
    }
    let mut out = Vec::with_capacity(results.len());
    for coeffs in results {
        out.push(inverse(coeffs, wavelet, mode)?);
    }
    Ok(out)
}

/// Batch forward across a rayon pool. Per-signal arithmetic is identical to
/// [`forward_batch`], so periodic outputs are bitwise equal to it.
#[cfg(feature = "parallel")]
pub fn forward_batch_parallel(
    signals: &[Vec<f64>],
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<Vec<ModwtResult>, ModwtError> {
    if signals.is_empty() {
        return Err(ModwtError::EmptyInput);
    }
    let expected = signals[0].len();
    for signal in signals {
        if signal.len() != expected {
            return Err(ModwtError::MismatchedLengths {
                expected,
                got: signal.len(),
            });
        }
    }
    signals
        .par_iter()
        .map(|signal| forward(signal, wavelet, mode))
        .collect()
}

/// Batch inverse across a rayon pool.
#[cfg(feature = "parallel")]
pub fn inverse_batch_parallel(
    results: &[ModwtResult],
    wavelet: &Wavelet,
    mode: BoundaryMode,
) -> Result<Vec<Vec<f64>>, ModwtError> {
    if results.is_empty() {
        return Err(ModwtError::EmptyInput);
    }
    results
        .par_iter()
        .map(|coeffs| inverse(coeffs, wavelet, mode))
        .collect()
}
