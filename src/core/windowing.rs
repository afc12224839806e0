//! Sliding-window slicing of a sample sequence.
//!
//! Windows are fixed-length, half-overlapping index ranges over the trace.
//! Trailing samples that do not fill a whole window are discarded rather
//! than padded; a trace shorter than one window yields no windows at all.

/// Produces half-open index ranges `[start, start + len)` over a sequence
/// of `n` samples, advancing by `stride` between window starts.
#[derive(Debug, Clone, Copy)]
pub struct Windower {
    /// Window length in samples
    pub len: usize,
    /// Offset between consecutive window starts
    pub stride: usize,
}

impl Windower {
    /// Create a windower. `stride` is clamped to at least 1 so the window
    /// sequence always terminates.
    pub fn new(len: usize, stride: usize) -> Self {
        Self {
            len,
            stride: stride.max(1),
        }
    }

    /// Iterate the window ranges over a sequence of `n` samples.
    ///
    /// Ranges appear in strictly increasing start order. Empty when
    /// `n < len`; no error is raised for short input.
    pub fn ranges(&self, n: usize) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        let len = self.len;
        (0..)
            .map(move |k| k * self.stride)
            .take_while(move |&start| start + len <= n)
            .map(move |start| start..start + len)
    }

    /// Number of windows a sequence of `n` samples produces:
    /// `floor((n - len) / stride) + 1` when `n >= len`, else 0.
    pub fn count(&self, n: usize) -> usize {
        if n < self.len {
            0
        } else {
            (n - self.len) / self.stride + 1
        }
    }
}
