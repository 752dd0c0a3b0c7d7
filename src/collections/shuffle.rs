use rand::Rng;

/// Returns a uniformly random permutation of `seq`, drawing from the thread-local RNG.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Returns a uniformly random permutation of `seq`, drawing indices from `rng`.
///
/// Every element of `seq` appears in the result exactly once (Fisher-Yates), so the result is
/// never a sample with replacement.
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut result = seq.to_vec();

    for i in (1..result.len()).rev() {
        let j = rng.gen_range(0..=i);
        result.swap(i, j);
    }

    result
}
