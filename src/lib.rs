//! Maximal Overlap Discrete Wavelet Transform (MODWT) for 1-D signals.
//!
//! The MODWT is the shift-invariant, non-decimated cousin of the DWT: every
//! decomposition level keeps the input's length, arbitrary lengths are
//! supported, and circular shifts of the input commute with the transform.
//! On top of the kernel this crate provides the multi-level pyramid
//! (equivalent to the stationary wavelet transform), wavelet denoising with
//! the usual threshold rules, batch transforms, and a block-streaming front
//! end with back-pressure.
//!
//! ```
//! use modwt::{get_wavelet, BoundaryMode};
//!
//! let wavelet = get_wavelet("db4").unwrap();
//! let signal: Vec<f64> = (0..64).map(|i| (i as f64 / 8.0).sin()).collect();
//! let coeffs = modwt::forward(&signal, &wavelet, BoundaryMode::Periodic).unwrap();
//! let recon = modwt::inverse(&coeffs, &wavelet, BoundaryMode::Periodic).unwrap();
//! for (s, r) in signal.iter().zip(recon.iter()) {
//!     assert!((s - r).abs() < 1e-12);
//! }
//! ```
//!
//! The crate is `no_std + alloc`; the default `std` feature adds wall-clock
//! streaming statistics. `parallel` fans large transforms and batches out
//! over rayon without changing any numerical result for periodic boundaries.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod boundary;
pub mod denoise;
pub mod multilevel;
pub mod streaming;
pub mod transform;
pub mod wavelet;

mod num;
mod taps;

pub use boundary::BoundaryMode;
pub use denoise::{
    bayes_threshold, denoise, denoise_single, denoise_with, hard_shrink, minimax_threshold,
    noise_sigma, soft_shrink, sure_threshold, universal_threshold, DenoiseConfig, NoiseEstimator,
    ThresholdMethod, ThresholdScaling, ThresholdType,
};
pub use multilevel::{max_level, MultiLevelResult};
pub use streaming::{
    BlockResult, BlockSubscriber, FlushPadding, StreamStats, StreamingModwt, DEFAULT_HIGH_WATER,
};
pub use transform::{
    forward, forward_at_level, forward_batch, forward_with_history, inverse, inverse_at_level,
    inverse_batch, ModwtError, ModwtResult,
};
#[cfg(feature = "parallel")]
pub use transform::{forward_batch_parallel, inverse_batch_parallel};
pub use wavelet::{
    get_wavelet, list_wavelets, supported_transforms, wavelets_for, Catalog, TransformKind,
    Wavelet, WaveletKind,
};
