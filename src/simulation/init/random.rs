/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform in [lo, hi)
pub(super) fn uniform(state: &mut u32, lo: f64, hi: f64) -> f64 {
    let unit = xorshift32(state) as f64 / (u32::MAX as f64 + 1.0);
    lo + unit * (hi - lo)
}

/// A zero state would keep xorshift at zero forever
#[inline]
pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 { 0x9e37_79b9 } else { seed }
}
