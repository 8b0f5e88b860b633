/// Word-count limits the session can be set to, in cycling order.
pub const LIMIT_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_LIMIT: usize = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub fn is_valid(limit: usize) -> bool {
    LIMIT_OPTIONS.contains(&limit)
}

/// Next limit in `direction`, clamped at the ends of the option set.
/// A value outside the option set is returned unchanged.
pub fn step(current: usize, direction: Direction) -> usize {
    let Some(idx) = LIMIT_OPTIONS.iter().position(|&l| l == current) else {
        return current;
    };

    match direction {
        Direction::Up if idx + 1 < LIMIT_OPTIONS.len() => LIMIT_OPTIONS[idx + 1],
        Direction::Down if idx > 0 => LIMIT_OPTIONS[idx - 1],
        _ => current,
    }
}
