//! Mean wall-clock timing of repeated invocations.

use std::time::Instant;

pub use std::hint::black_box;

/// Mean wall-clock seconds per call of `f` over `repetitions` consecutive
/// invocations.
///
/// The whole batch is timed with one `Instant` pair and divided by the
/// repetition count, so per-call timer overhead is amortized away. Each
/// return value passes through [`black_box`] so the compiler cannot elide
/// the work under measurement.
///
/// # Panics
///
/// Panics if `repetitions` is zero.
pub fn mean_secs<T>(repetitions: usize, mut f: impl FnMut() -> T) -> f64 {
    assert!(repetitions > 0, "repetitions must be > 0");
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(f());
    }
    start.elapsed().as_secs_f64() / repetitions as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_non_negative() {
        let mean = mean_secs(100, || 1u64 + 1);
        assert!(mean >= 0.0);
        assert!(mean.is_finite());
    }

    #[test]
    fn mean_reflects_per_call_cost() {
        let mean = mean_secs(5, || std::thread::sleep(std::time::Duration::from_millis(1)));
        // Five 1ms sleeps: the mean is at least 1ms and nowhere near the total.
        assert!(mean >= 0.001);
        assert!(mean < 0.5);
    }

    #[test]
    #[should_panic(expected = "repetitions must be > 0")]
    fn zero_repetitions_panics() {
        let _ = mean_secs(0, || ());
    }
}
