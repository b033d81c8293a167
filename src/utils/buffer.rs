use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

/// Multiplies `frame` point-wise by `window`. This function modifies `frame` in place.
pub fn apply_window<T: Float>(window: &[T], frame: &mut [T]) {
    assert_eq!(window.len(), frame.len());
    frame
        .iter_mut()
        .zip(window)
        .for_each(|(sample, &weight)| *sample = *sample * weight);
}

/// Compute the sum of the square of each element of `arr`.
pub fn square_sum<T: Float>(arr: &[T]) -> T {
    arr.iter().fold(T::zero(), |acc, &s| acc + s * s)
}
