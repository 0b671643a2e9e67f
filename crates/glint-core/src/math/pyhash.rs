// Numeric and tuple hashing, bit-compatible with CPython on 64-bit builds.

const HASH_BITS: u32 = 61;
const HASH_MODULUS: u64 = (1u64 << HASH_BITS) - 1;
const HASH_INF: i64 = 314_159;

const XXPRIME_1: u64 = 11_400_714_785_074_694_791;
const XXPRIME_2: u64 = 14_029_467_366_897_019_727;
const XXPRIME_5: u64 = 2_870_177_450_012_600_261;

/// Split `v` into a mantissa in `[0.5, 1)` (signed) and a power of two.
fn frexp(v: f64) -> (f64, i32) {
    if v == 0.0 || !v.is_finite() {
        return (v, 0);
    }
    let bits = v.to_bits();
    let exp = ((bits >> 52) & 0x7FF) as i32;
    if exp == 0 {
        // subnormal: renormalize first
        let (m, e) = frexp(v * f64::from_bits(0x4350_0000_0000_0000)); // 2^54
        return (m, e - 54);
    }
    let m = f64::from_bits((bits & !(0x7FFu64 << 52)) | (1022u64 << 52));
    (m, exp - 1022)
}

/// Hash of a float: integral values hash to themselves, everything else is
/// reduced modulo `2^61 - 1`.
pub fn hash_f64(v: f64) -> i64 {
    if v.is_nan() {
        return 0;
    }
    if v.is_infinite() {
        return if v > 0.0 { HASH_INF } else { -HASH_INF };
    }

    let (mut m, mut e) = frexp(v);
    let sign: i64 = if m < 0.0 {
        m = -m;
        -1
    } else {
        1
    };

    let mut x: u64 = 0;
    while m != 0.0 {
        x = ((x << 28) & HASH_MODULUS) | (x >> (HASH_BITS - 28));
        m *= 268_435_456.0; // 2^28
        e -= 28;
        let y = m as u64;
        m -= y as f64;
        x += y;
        if x >= HASH_MODULUS {
            x -= HASH_MODULUS;
        }
    }

    let bits = HASH_BITS as i32;
    let e = if e >= 0 {
        e % bits
    } else {
        bits - 1 - ((-1 - e) % bits)
    };
    let e = e as u32;
    x = ((x << e) & HASH_MODULUS) | (x >> (HASH_BITS - e));

    let h = (x as i64) * sign;
    if h == -1 {
        -2
    } else {
        h
    }
}

#[inline]
pub fn hash_f32(v: f32) -> i64 {
    hash_f64(f64::from(v))
}

/// Combine element hashes the way a tuple does.
pub fn hash_tuple(items: &[i64]) -> i64 {
    let mut acc = XXPRIME_5;
    for &h in items {
        let lane = h as u64;
        acc = acc.wrapping_add(lane.wrapping_mul(XXPRIME_2));
        acc = acc.rotate_left(31);
        acc = acc.wrapping_mul(XXPRIME_1);
    }
    acc = acc.wrapping_add((items.len() as u64) ^ (XXPRIME_5 ^ 3_527_539));

    if acc == u64::MAX {
        1_546_275_796
    } else {
        acc as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_hash_to_themselves() {
        assert_eq!(hash_f64(0.0), 0);
        assert_eq!(hash_f64(1.0), 1);
        assert_eq!(hash_f64(3.0), 3);
        assert_eq!(hash_f64(-1.0), -2);
    }

    #[test]
    fn fractional_floats() {
        assert_eq!(hash_f64(0.5), 1_152_921_504_606_846_976);
        assert_eq!(hash_f64(1.5), 1_152_921_504_606_846_977);
        assert_eq!(hash_f32(0.1), 230_584_304_357_343_232);
    }

    #[test]
    fn special_values() {
        assert_eq!(hash_f64(f64::INFINITY), 314_159);
        assert_eq!(hash_f64(f64::NEG_INFINITY), -314_159);
        assert_eq!(hash_f64(f64::NAN), 0);
    }

    #[test]
    fn tuples() {
        assert_eq!(hash_tuple(&[]), 5_740_354_900_026_072_187);
        assert_eq!(hash_tuple(&[1, 2, 3]), 529_344_067_295_497_451);
        let t = [hash_f64(1.0), hash_f64(0.5), hash_f64(0.0)];
        assert_eq!(hash_tuple(&t), 5_615_544_138_699_794_474);
    }
}
