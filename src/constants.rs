/// Input sorted by the demo when no values are given on the command line.
pub const DEMO_INPUT: [i64; 4] = [1, 2, 3, 4];

/// Inclusive bounds of the values drawn by the demo's `--random`.
pub const RANDOM_MIN: i64 = -1000;
pub const RANDOM_MAX: i64 = 1000;
