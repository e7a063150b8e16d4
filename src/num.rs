//! f64 math helpers for the no_std build.
//!
//! With the `std` feature the intrinsic float methods are used; without it
//! the same operations come from `libm`.

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn ln(x: f64) -> f64 {
    x.ln()
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn log2(x: f64) -> f64 {
    x.log2()
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn log2(x: f64) -> f64 {
    libm::log2(x)
}

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn copysign(x: f64, sign: f64) -> f64 {
    x.copysign(sign)
}

#[cfg(not(feature = "std"))]
#[inline(always)]
pub(crate) fn copysign(x: f64, sign: f64) -> f64 {
    libm::copysign(x, sign)
}
