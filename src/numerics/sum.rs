use std::iter::Sum;

/// Compensated (Kahan-Babuska-Neumaier) accumulator.
///
/// Carries the rounding error of every addition in a separate term, which
/// gives the same result as summing in a wider format for the sample counts
/// seen here. Non-finite inputs make the sum non-finite, as plain addition would.
///
/// # Examples
///
/// ```
/// use sigscale::numerics::ExtendedSum;
///
/// let sum: ExtendedSum = [1.0e16, 1.0, -1.0e16].into_iter().sum();
/// assert_eq!(sum.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtendedSum {
    sum: f64,
    compensation: f64,
}

impl ExtendedSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one term.
    pub fn push(&mut self, value: f64) {
        let t = self.sum + value;
        if !t.is_finite() {
            self.sum = t;
            return;
        }
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// The accumulated sum, rounded once to `f64`.
    pub fn value(&self) -> f64 {
        if !self.sum.is_finite() {
            return self.sum;
        }
        self.sum + self.compensation
    }
}

impl Extend<f64> for ExtendedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl Sum<f64> for ExtendedSum {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        let mut acc = ExtendedSum::new();
        acc.extend(iter);
        acc
    }
}

impl<'a> Sum<&'a f64> for ExtendedSum {
    fn sum<I: Iterator<Item = &'a f64>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
