/// Final results of a completed session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub wpm: f64,
    pub acc: f64,
}

/// Words per minute, normalized at 5 characters per word.
/// Returns 0 for a zero elapsed time (e.g. a simulated instantaneous finish).
pub fn wpm(chars_typed: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs == 0.0 {
        return 0.0;
    }

    (chars_typed as f64 / 5.0) * (60.0 / elapsed_secs)
}

/// Accuracy percentage over the recorded correctness entries.
/// Unset positions are not counted. Truncating integer division, matching
/// the classic `100 - (100 * wrong / total)` formula. 100 when nothing was
/// recorded.
pub fn accuracy(correctness: &[Option<bool>]) -> f64 {
    let total = correctness.iter().filter(|c| c.is_some()).count();
    if total == 0 {
        return 100.0;
    }

    let wrong = correctness
        .iter()
        .filter(|c| matches!(c, Some(false)))
        .count();

    (100 - (100 * wrong / total)) as f64
}

pub fn compute(chars_typed: usize, elapsed_secs: f64, correctness: &[Option<bool>]) -> Stats {
    Stats {
        wpm: wpm(chars_typed, elapsed_secs),
        acc: accuracy(correctness),
    }
}
