//! Minimal complex number for the numeric part of the tour

use std::fmt;

/// A complex number with `f64` parts.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Purely imaginary number, written `5j` in the tour
    pub const fn imaginary(im: f64) -> Self {
        Self { re: 0.0, im }
    }
}

impl From<i64> for Complex {
    fn from(n: i64) -> Self {
        Self::new(n as f64, 0.0)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

// `5j` when the real part is +0, otherwise `(3+5j)`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.re == 0.0 && self.re.is_sign_positive() {
            return write!(f, "{}j", self.im);
        }
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(f, "({}{}{}j)", self.re, sign, self.im.abs())
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
