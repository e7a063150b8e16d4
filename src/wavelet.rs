//! Wavelet catalog: filter descriptors and keyed lookup.
//!
//! Every cataloged wavelet carries its decomposition and reconstruction
//! low- and high-pass filters. Orthogonal families (Haar, Daubechies,
//! Symlets, Coiflets) store one scaling filter and derive the rest through
//! the quadrature mirror relation; the spline biorthogonal family stores a
//! dec/rec pair. Descriptors are validated when they are built, so a
//! [`Wavelet`] in hand is always usable.

extern crate alloc;
use alloc::string::ToString;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::transform::ModwtError;
use crate::num;
use crate::taps;

/// Structural family of a wavelet's filter bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveletKind {
    /// Reconstruction filters equal decomposition filters.
    Orthogonal,
    /// Separate decomposition and reconstruction filter pairs.
    Biorthogonal,
}

/// Transform surfaces a wavelet can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    SingleLevel,
    MultiLevel,
    Denoise,
    Streaming,
}

const ORTHOGONAL_TRANSFORMS: &[TransformKind] = &[
    TransformKind::SingleLevel,
    TransformKind::MultiLevel,
    TransformKind::Denoise,
    TransformKind::Streaming,
];

// Denoising is absent: its threshold rules calibrate the noise scale
// against an orthonormal bank, and a biorthogonal analysis side colors
// white noise by the dual filters' non-unit norms.
const BIORTHOGONAL_TRANSFORMS: &[TransformKind] = &[
    TransformKind::SingleLevel,
    TransformKind::MultiLevel,
    TransformKind::Streaming,
];

impl WaveletKind {
    /// Transforms every filter bank of this kind can drive.
    pub fn transforms(self) -> &'static [TransformKind] {
        match self {
            WaveletKind::Orthogonal => ORTHOGONAL_TRANSFORMS,
            WaveletKind::Biorthogonal => BIORTHOGONAL_TRANSFORMS,
        }
    }
}

/// L2-normalization tolerance for orthogonal scaling filters.
const NORM_TOL: f64 = 2e-10;
/// Tolerance on the quadrature mirror relation.
const QMF_TOL: f64 = 1e-10;
/// Tolerance on the even-shift orthogonality of a filter with itself.
const SHIFT_ORTHO_TOL: f64 = 1e-9;
/// Tolerance on the dec/rec duality of a biorthogonal pair.
const BIORTH_TOL: f64 = 1e-8;

/// Immutable wavelet descriptor.
///
/// Filter taps are shared literal constants; a descriptor owns only the
/// derived high-pass arrays. Clone is cheap relative to any transform.
#[derive(Debug, Clone)]
pub struct Wavelet {
    name: &'static str,
    kind: WaveletKind,
    h_dec: Vec<f64>,
    g_dec: Vec<f64>,
    h_rec: Vec<f64>,
    g_rec: Vec<f64>,
    vanishing_moments: u8,
}

impl Wavelet {
    /// Build an orthogonal wavelet from its scaling filter.
    ///
    /// The high-pass filter is derived through g[k] = (-1)^k h[L-1-k] and
    /// reconstruction filters equal the decomposition pair. Fails with
    /// [`ModwtError::FilterNotNormalized`] or
    /// [`ModwtError::QuadratureMismatch`] when the taps are not an
    /// orthonormal filter bank.
    pub fn orthogonal_from_taps(
        name: &'static str,
        scaling: &[f64],
        vanishing_moments: u8,
    ) -> Result<Self, ModwtError> {
        let h_dec = scaling.to_vec();
        let g_dec = quadrature_mirror(&h_dec);
        let w = Wavelet {
            name,
            kind: WaveletKind::Orthogonal,
            h_rec: h_dec.clone(),
            g_rec: g_dec.clone(),
            h_dec,
            g_dec,
            vanishing_moments,
        };
        w.validate_orthogonal()?;
        Ok(w)
    }

    /// Build a biorthogonal wavelet from a dec/rec low-pass pair.
    ///
    /// Both tables must have the same even length (zero-padded if needed).
    /// High-pass filters are derived from the opposite side's low-pass, so
    /// the analysis and synthesis banks form a dual pair.
    pub fn biorthogonal_from_taps(
        name: &'static str,
        dec_lowpass: &[f64],
        rec_lowpass: &[f64],
        vanishing_moments: u8,
    ) -> Result<Self, ModwtError> {
        if dec_lowpass.len() != rec_lowpass.len() {
            return Err(ModwtError::MismatchedLengths {
                expected: dec_lowpass.len(),
                got: rec_lowpass.len(),
            });
        }
        let h_dec = dec_lowpass.to_vec();
        let h_rec = rec_lowpass.to_vec();
        let g_dec = quadrature_mirror(&h_rec);
        let g_rec = quadrature_mirror(&h_dec);
        let w = Wavelet {
            name,
            kind: WaveletKind::Biorthogonal,
            h_dec,
            g_dec,
            h_rec,
            g_rec,
            vanishing_moments,
        };
        w.validate_biorthogonal()?;
        Ok(w)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> WaveletKind {
        self.kind
    }

    /// Number of taps in each filter.
    pub fn filter_len(&self) -> usize {
        self.h_dec.len()
    }

    /// Vanishing moments of the analysis wavelet.
    pub fn vanishing_moments(&self) -> u8 {
        self.vanishing_moments
    }

    /// Decomposition low-pass filter.
    pub fn h_dec(&self) -> &[f64] {
        &self.h_dec
    }

    /// Decomposition high-pass filter.
    pub fn g_dec(&self) -> &[f64] {
        &self.g_dec
    }

    /// Reconstruction low-pass filter.
    pub fn h_rec(&self) -> &[f64] {
        &self.h_rec
    }

    /// Reconstruction high-pass filter.
    pub fn g_rec(&self) -> &[f64] {
        &self.g_rec
    }

    /// Whether this wavelet can drive the given transform.
    pub fn supports(&self, transform: TransformKind) -> bool {
        self.kind.transforms().contains(&transform)
    }

    fn validate_orthogonal(&self) -> Result<(), ModwtError> {
        for filter in [&self.h_dec, &self.g_dec] {
            let norm: f64 = filter.iter().map(|x| x * x).sum();
            if num::abs(norm - 1.0) > NORM_TOL {
                return Err(ModwtError::FilterNotNormalized {
                    wavelet: self.name,
                    norm,
                });
            }
        }
        let l = self.h_dec.len();
        let mut residual = 0.0f64;
        for k in 0..l {
            let expected = if k % 2 == 0 { 1.0 } else { -1.0 } * self.h_dec[l - 1 - k];
            residual = residual.max(num::abs(self.g_dec[k] - expected));
        }
        if residual > QMF_TOL {
            return Err(ModwtError::QuadratureMismatch {
                wavelet: self.name,
                residual,
            });
        }
        // even-shift self-orthogonality is what perfect reconstruction
        // actually rests on, so it is checked alongside the norm
        for m in 1..l / 2 {
            let dot: f64 = (0..l - 2 * m).map(|k| self.h_dec[k] * self.h_dec[k + 2 * m]).sum();
            if num::abs(dot) > SHIFT_ORTHO_TOL {
                return Err(ModwtError::QuadratureMismatch {
                    wavelet: self.name,
                    residual: dot,
                });
            }
        }
        Ok(())
    }

    fn validate_biorthogonal(&self) -> Result<(), ModwtError> {
        let l = self.h_dec.len();
        let half = (l / 2) as isize;
        for m in (1 - half)..half {
            let mut dot = 0.0;
            for k in 0..l {
                let j = k as isize + 2 * m;
                if j >= 0 && (j as usize) < l {
                    dot += self.h_dec[k] * self.h_rec[j as usize];
                }
            }
            let expected = if m == 0 { 1.0 } else { 0.0 };
            if num::abs(dot - expected) > BIORTH_TOL {
                return Err(ModwtError::QuadratureMismatch {
                    wavelet: self.name,
                    residual: dot - expected,
                });
            }
        }
        Ok(())
    }
}

/// g[k] = (-1)^k h[L-1-k].
fn quadrature_mirror(h: &[f64]) -> Vec<f64> {
    let l = h.len();
    (0..l)
        .map(|k| if k % 2 == 0 { h[l - 1 - k] } else { -h[l - 1 - k] })
        .collect()
}

struct Entry {
    name: &'static str,
    kind: WaveletKind,
    dec: &'static [f64],
    rec: &'static [f64],
    moments: u8,
}

impl Entry {
    const fn orthogonal(name: &'static str, taps: &'static [f64], moments: u8) -> Self {
        Entry {
            name,
            kind: WaveletKind::Orthogonal,
            dec: taps,
            rec: taps,
            moments,
        }
    }

    const fn biorthogonal(
        name: &'static str,
        dec: &'static [f64],
        rec: &'static [f64],
        moments: u8,
    ) -> Self {
        Entry {
            name,
            kind: WaveletKind::Biorthogonal,
            dec,
            rec,
            moments,
        }
    }

    fn build(&self) -> Result<Wavelet, ModwtError> {
        match self.kind {
            WaveletKind::Orthogonal => {
                Wavelet::orthogonal_from_taps(self.name, self.dec, self.moments)
            }
            WaveletKind::Biorthogonal => {
                Wavelet::biorthogonal_from_taps(self.name, self.dec, self.rec, self.moments)
            }
        }
    }
}

static ENTRIES: &[Entry] = &[
    Entry::orthogonal("haar", &taps::HAAR, 1),
    Entry::orthogonal("db2", &taps::DB2, 2),
    Entry::orthogonal("db3", &taps::DB3, 3),
    Entry::orthogonal("db4", &taps::DB4, 4),
    Entry::orthogonal("db5", &taps::DB5, 5),
    Entry::orthogonal("db6", &taps::DB6, 6),
    Entry::orthogonal("db7", &taps::DB7, 7),
    Entry::orthogonal("db8", &taps::DB8, 8),
    Entry::orthogonal("db9", &taps::DB9, 9),
    Entry::orthogonal("db10", &taps::DB10, 10),
    Entry::orthogonal("db11", &taps::DB11, 11),
    Entry::orthogonal("db12", &taps::DB12, 12),
    Entry::orthogonal("db13", &taps::DB13, 13),
    Entry::orthogonal("db14", &taps::DB14, 14),
    Entry::orthogonal("db15", &taps::DB15, 15),
    Entry::orthogonal("db16", &taps::DB16, 16),
    Entry::orthogonal("db17", &taps::DB17, 17),
    Entry::orthogonal("db18", &taps::DB18, 18),
    Entry::orthogonal("db19", &taps::DB19, 19),
    Entry::orthogonal("db20", &taps::DB20, 20),
    Entry::orthogonal("sym2", &taps::SYM2, 2),
    Entry::orthogonal("sym3", &taps::SYM3, 3),
    Entry::orthogonal("sym4", &taps::SYM4, 4),
    Entry::orthogonal("sym5", &taps::SYM5, 5),
    Entry::orthogonal("sym6", &taps::SYM6, 6),
    Entry::orthogonal("sym7", &taps::SYM7, 7),
    Entry::orthogonal("sym8", &taps::SYM8, 8),
    Entry::orthogonal("sym9", &taps::SYM9, 9),
    Entry::orthogonal("sym10", &taps::SYM10, 10),
    Entry::orthogonal("sym11", &taps::SYM11, 11),
    Entry::orthogonal("sym12", &taps::SYM12, 12),
    Entry::orthogonal("sym13", &taps::SYM13, 13),
    Entry::orthogonal("sym14", &taps::SYM14, 14),
    Entry::orthogonal("sym15", &taps::SYM15, 15),
    Entry::orthogonal("sym16", &taps::SYM16, 16),
    Entry::orthogonal("sym17", &taps::SYM17, 17),
    Entry::orthogonal("sym18", &taps::SYM18, 18),
    Entry::orthogonal("sym19", &taps::SYM19, 19),
    Entry::orthogonal("sym20", &taps::SYM20, 20),
    Entry::orthogonal("coif1", &taps::COIF1, 2),
    Entry::orthogonal("coif2", &taps::COIF2, 4),
    Entry::orthogonal("coif3", &taps::COIF3, 6),
    Entry::orthogonal("coif4", &taps::COIF4, 8),
    Entry::orthogonal("coif5", &taps::COIF5, 10),
    Entry::biorthogonal("bior1.1", &taps::BIOR1_1_DEC, &taps::BIOR1_1_REC, 1),
    Entry::biorthogonal("bior1.3", &taps::BIOR1_3_DEC, &taps::BIOR1_3_REC, 3),
    Entry::biorthogonal("bior1.5", &taps::BIOR1_5_DEC, &taps::BIOR1_5_REC, 5),
    Entry::biorthogonal("bior2.2", &taps::BIOR2_2_DEC, &taps::BIOR2_2_REC, 2),
    Entry::biorthogonal("bior2.4", &taps::BIOR2_4_DEC, &taps::BIOR2_4_REC, 4),
    Entry::biorthogonal("bior2.6", &taps::BIOR2_6_DEC, &taps::BIOR2_6_REC, 6),
    Entry::biorthogonal("bior2.8", &taps::BIOR2_8_DEC, &taps::BIOR2_8_REC, 8),
    Entry::biorthogonal("bior3.1", &taps::BIOR3_1_DEC, &taps::BIOR3_1_REC, 1),
    Entry::biorthogonal("bior3.3", &taps::BIOR3_3_DEC, &taps::BIOR3_3_REC, 3),
    Entry::biorthogonal("bior3.5", &taps::BIOR3_5_DEC, &taps::BIOR3_5_REC, 5),
    Entry::biorthogonal("bior3.7", &taps::BIOR3_7_DEC, &taps::BIOR3_7_REC, 7),
    Entry::biorthogonal("bior3.9", &taps::BIOR3_9_DEC, &taps::BIOR3_9_REC, 9),
];

/// Keyed wavelet table for repeated lookups.
///
/// Built once from the static catalog; resolving a name is a hash probe plus
/// one descriptor construction. The free functions below cover one-shot use.
pub struct Catalog {
    map: HashMap<&'static str, &'static Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut map = HashMap::with_capacity(ENTRIES.len());
        for entry in ENTRIES {
            map.insert(entry.name, entry);
        }
        Catalog { map }
    }

    /// Resolve a canonical name into a validated descriptor.
    pub fn get(&self, name: &str) -> Result<Wavelet, ModwtError> {
        match self.map.get(name) {
            Some(entry) => entry.build(),
            None => Err(ModwtError::UnknownWavelet(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Canonical names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.map.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a wavelet by canonical name ("haar", "db4", "sym8", "bior2.2", ...).
pub fn get_wavelet(name: &str) -> Result<Wavelet, ModwtError> {
    for entry in ENTRIES {
        if entry.name == name {
            return entry.build();
        }
    }
    Err(ModwtError::UnknownWavelet(name.to_string()))
}

/// All cataloged names, sorted.
pub fn list_wavelets() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ENTRIES.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names
}

/// Transforms the named wavelet can drive.
///
/// Orthogonal wavelets support the full surface; biorthogonal ones are
/// excluded from denoising (see [`WaveletKind::transforms`]). Streaming
/// additionally requires the block size to be at least the filter length,
/// which is checked when the stream is configured.
pub fn supported_transforms(name: &str) -> Result<&'static [TransformKind], ModwtError> {
    for entry in ENTRIES {
        if entry.name == name {
            return Ok(entry.kind.transforms());
        }
    }
    Err(ModwtError::UnknownWavelet(name.to_string()))
}

/// Names of the wavelets usable with the given transform, sorted.
pub fn wavelets_for(kind: TransformKind) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ENTRIES
        .iter()
        .filter(|entry| entry.kind.transforms().contains(&kind))
        .map(|entry| entry.name)
        .collect();
    names.sort_unstable();
    names
}
