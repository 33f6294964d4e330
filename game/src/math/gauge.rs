pub trait GaugeMath {
    fn bounded(self, min: f64, max: f64) -> Self;
    fn finite_or(self, fallback: f64) -> Self;
    fn round_to(self, digits: i32) -> Self;
    fn non_negative(self) -> Self;
}

impl GaugeMath for f64 {
    /// Clamps into `[min, max]`, mapping NaN to `min`.
    #[inline]
    fn bounded(self, min: f64, max: f64) -> Self {
        if self.is_nan() {
            min
        } else {
            self.max(min).min(max)
        }
    }

    #[inline]
    fn finite_or(self, fallback: f64) -> Self {
        if self.is_finite() {
            self
        } else {
            fallback
        }
    }

    #[inline]
    fn round_to(self, digits: i32) -> Self {
        let factor = 10f64.powi(digits);
        (self * factor).round() / factor
    }

    #[inline]
    fn non_negative(self) -> Self {
        self.finite_or(0.0).max(0.0)
    }
}
