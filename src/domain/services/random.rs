//! Random draw abstraction shared by every generation step

/// A sequential source of uniform integers
///
/// Every generation step draws from one source in a fixed order, so a seeded
/// source replays a day exactly.
pub trait RandomSource {
    /// Uniform integer in `[0, bound_exclusive)`; 0 when the bound is 0
    fn next_int(&mut self, bound_exclusive: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_int(&mut self, bound_exclusive: u32) -> u32 {
        (**self).next_int(bound_exclusive)
    }
}
