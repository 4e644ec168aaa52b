// Licensed under the Apache-2.0 license

/// Reverses the byte order of a halfword.
#[inline(always)]
pub const fn swap16(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverses the byte order of a word.
#[inline(always)]
pub const fn swap32(value: u32) -> u32 {
    value.swap_bytes()
}

// Network order is big-endian and the supported targets are little-endian,
// so host/network conversion is always a swap.

#[inline(always)]
pub const fn htons(value: u16) -> u16 {
    swap16(value)
}

#[inline(always)]
pub const fn htonl(value: u32) -> u32 {
    swap32(value)
}

#[inline(always)]
pub const fn ntohs(value: u16) -> u16 {
    swap16(value)
}

#[inline(always)]
pub const fn ntohl(value: u32) -> u32 {
    swap32(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_swap_values() {
        assert_eq!(swap16(0x1234), 0x3412);
        assert_eq!(swap32(0xdead_beef), 0xefbe_adde);
        assert_eq!(swap16(0), 0);
        assert_eq!(swap32(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_swap16_involution() {
        for x in 0..=u16::MAX {
            assert_eq!(swap16(swap16(x)), x);
        }
    }

    #[test]
    fn test_swap32_involution() {
        for x in [0, 1, 0x8000_0000, 0x0102_0304, 0xdead_beef, u32::MAX] {
            assert_eq!(swap32(swap32(x)), x);
        }
        let mut x: u32 = 0x9e37_79b9;
        for _ in 0..10_000 {
            assert_eq!(swap32(swap32(x)), x);
            x = x.wrapping_mul(0x0019_660d).wrapping_add(0x3c6e_f35f);
        }
    }

    #[test]
    fn test_network_aliases() {
        assert_eq!(htons(0x0102), 0x0201);
        assert_eq!(ntohs(htons(0xabcd)), 0xabcd);
        assert_eq!(htonl(0x0102_0304), 0x0403_0201);
        assert_eq!(ntohl(htonl(0xabcd_ef01)), 0xabcd_ef01);
    }
}
