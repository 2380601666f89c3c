/// Key hashing for the table components. Equal keys map to equal hash values.
/// No resistance against hash flooding is claimed.
pub trait Hash {
    fn hash(&self) -> u64;
}

impl Hash for &[u8] {
    #[inline]
    fn hash(&self) -> u64 {
        fnv_hash(self)
    }
}

impl Hash for Vec<u8> {
    #[inline]
    fn hash(&self) -> u64 {
        fnv_hash(self)
    }
}

impl Hash for &str {
    #[inline]
    fn hash(&self) -> u64 {
        fnv_hash(self.as_bytes())
    }
}

impl Hash for String {
    #[inline]
    fn hash(&self) -> u64 {
        fnv_hash(self.as_bytes())
    }
}

impl Hash for char {
    #[inline]
    fn hash(&self) -> u64 {
        (*self) as u64
    }
}

macro_rules! impl_hash_unsigned {
    ($($t:ty),+) => {$(
        impl Hash for $t {
            #[inline]
            fn hash(&self) -> u64 {
                *self as u64
            }
        }
    )+};
}

impl_hash_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_hash_signed {
    ($($t:ty),+) => {$(
        impl Hash for $t {
            #[inline]
            fn hash(&self) -> u64 {
                // Sign extend first so negative keys keep their two's
                // complement bit pattern.
                *self as i64 as u64
            }
        }
    )+};
}

impl_hash_signed!(i8, i16, i32, i64, isize);

const INIT_V: u64 = 14695981039346656037;
const PRIME: u64 = 1099511628211;

/// FNV-1a over a byte slice.
#[inline]
pub fn fnv_hash(b: &[u8]) -> u64 {
    b.iter()
        .fold(INIT_V, |h, e| (h ^ (*e as u64)).wrapping_mul(PRIME))
}
