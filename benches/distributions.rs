use num_traits::{Bounded, FromPrimitive, One, PrimInt};
use rand::{
    distributions::{uniform::SampleUniform, Uniform},
    thread_rng, Rng,
};

const ARRAY_LEN: usize = 6;
pub const DISTRIBUTIONS: [&dyn Fn(usize) -> Vec<u32>; ARRAY_LEN] = [
    &uniform,
    &ones,
    &sorted,
    &reverse,
    &almost_sorted,
    &smallest_last,
];
pub const NAMES: [&str; ARRAY_LEN] = [
    "uniform",
    "ones",
    "sorted",
    "reverse",
    "almost_sorted",
    "smallest_last",
];

pub fn uniform<T>(len: usize) -> Vec<T>
where
    T: Bounded + SampleUniform,
{
    let mut rng = thread_rng();
    let range = Uniform::new_inclusive(T::min_value(), T::max_value());
    (0..len).map(|_| rng.sample(&range)).collect()
}

pub fn ones<T>(len: usize) -> Vec<T>
where
    T: One + Clone,
{
    vec![T::one(); len]
}

/// `1, 2, ..., len`: best case, no shifts.
pub fn sorted<T>(len: usize) -> Vec<T>
where
    T: FromPrimitive + PrimInt,
{
    (1..=len).filter_map(T::from_usize).collect()
}

/// `len, ..., 1`: worst case, every key travels to the front.
pub fn reverse<T>(len: usize) -> Vec<T>
where
    T: FromPrimitive + PrimInt,
{
    let mut v = sorted(len);
    v.reverse();
    v
}

/// Sorted, with about `sqrt(len)` neighbouring pairs nudged out of order.
pub fn almost_sorted<T>(len: usize) -> Vec<T>
where
    T: FromPrimitive + PrimInt,
{
    let mut rng = thread_rng();
    let mut v = sorted(len);
    if len < 2 {
        return v;
    }
    let swaps = (len as f64).sqrt() as usize;
    for _ in 0..swaps {
        let i = rng.gen_range(0..len - 1);
        v.swap(i, i + 1);
    }
    v
}

/// `2, ..., len, 1`: sorted except for one key that crosses the whole slice.
pub fn smallest_last<T>(len: usize) -> Vec<T>
where
    T: FromPrimitive + PrimInt,
{
    let mut v = sorted(len);
    if !v.is_empty() {
        v.rotate_left(1);
    }
    v
}
