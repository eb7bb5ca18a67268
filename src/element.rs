//! Benchmark element types.
//!
//! Searches are measured at several element byte-widths. The native `u32` and
//! `u64` cover 4 and 8 bytes; the `WideKey*` types pad a `u64` key out to 16,
//! 32 and 64 bytes, emulating a narrow key embedded in a wider table row.

/// An element of the backing array.
///
/// Elements are constructed from array offsets (the backing array is the
/// identity sequence) and convert back to the offset for verification.
pub trait Element: Copy + Ord + Default + std::fmt::Debug {
    /// Build the element holding `offset`.
    fn from_offset(offset: u64) -> Self;

    /// The wrapped offset value.
    fn offset(self) -> u64;
}

impl Element for u32 {
    fn from_offset(offset: u64) -> Self {
        offset as u32
    }

    fn offset(self) -> u64 {
        u64::from(self)
    }
}

impl Element for u64 {
    fn from_offset(offset: u64) -> Self {
        offset
    }

    fn offset(self) -> u64 {
        self
    }
}

/// A `u64` key padded to 16 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(align(16))]
pub struct WideKey16(u64);

/// A `u64` key padded to 32 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(align(32))]
pub struct WideKey32(u64);

/// A `u64` key padded to 64 bytes (one cache line per element).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(align(64))]
pub struct WideKey64(u64);

macro_rules! wide_key_impls {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Create a new key holding `value`.
                pub fn new(value: u64) -> Self {
                    Self(value)
                }

                /// The wrapped value.
                pub fn get(self) -> u64 {
                    self.0
                }
            }

            impl From<u64> for $name {
                fn from(value: u64) -> Self {
                    Self(value)
                }
            }

            impl From<$name> for u64 {
                fn from(key: $name) -> u64 {
                    key.0
                }
            }

            impl Element for $name {
                fn from_offset(offset: u64) -> Self {
                    Self(offset)
                }

                fn offset(self) -> u64 {
                    self.0
                }
            }
        )+
    };
}

wide_key_impls!(WideKey16, WideKey32, WideKey64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_wide_key_layout() {
        assert_eq!(size_of::<WideKey16>(), 16);
        assert_eq!(size_of::<WideKey32>(), 32);
        assert_eq!(size_of::<WideKey64>(), 64);

        assert_eq!(align_of::<WideKey16>(), 16);
        assert_eq!(align_of::<WideKey32>(), 32);
        assert_eq!(align_of::<WideKey64>(), 64);
    }

    #[test]
    fn test_native_widths() {
        assert_eq!(size_of::<u32>(), 4);
        assert_eq!(size_of::<u64>(), 8);
    }

    #[test]
    fn test_wide_key_ordering() {
        let a = WideKey32::new(3);
        let b = WideKey32::new(7);

        assert!(a < b);
        assert!(b > a);
        assert_eq!(a, WideKey32::from(3));
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_wide_key_default_is_zero() {
        assert_eq!(WideKey16::default().get(), 0);
        assert_eq!(WideKey64::default(), WideKey64::new(0));
    }

    #[test]
    fn test_offset_round_trip() {
        assert_eq!(u32::from_offset(42).offset(), 42);
        assert_eq!(u64::from_offset(1 << 40).offset(), 1 << 40);
        assert_eq!(WideKey16::from_offset(9).offset(), 9);
        assert_eq!(u64::from(WideKey32::from_offset(11)), 11);
    }
}
