//! Bit length helpers used to size the sparse table and the segment tree.
use num::{PrimInt, Unsigned};

fn bits<T: PrimInt>() -> u32 {
    (std::mem::size_of::<T>() * 8) as u32
}

/// Return `floor(log2(n))`, or `None` if `n` is zero.
pub fn log2<T: PrimInt + Unsigned>(n: T) -> Option<u32> {
    if n.is_zero() {
        None
    } else {
        Some(bits::<T>() - 1 - n.leading_zeros())
    }
}

/// Return `ceil(log2(n))`, or `None` if `n` is zero.
/// Equals `log2(n)` exactly when `n` is a power of two.
pub fn log2ceil<T: PrimInt + Unsigned>(n: T) -> Option<u32> {
    let lg = log2(n)?;
    Some(lg + (n.count_ones() != 1) as u32)
}
