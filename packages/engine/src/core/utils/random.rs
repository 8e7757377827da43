//! Randomness sources for seeding the grid

/// Uniform `[0, 1)` generator consumed by `GridStore::randomize`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Seedable xorshift32, the engine's default PRNG.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const DEFAULT_SEED: u32 = 12345;

    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { state }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        // 2^32 keeps the result strictly below 1.0
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// `Math.random()` from the host. Only meaningful inside a browser.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsMathRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for JsMathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Source for a fresh engine: seeded xorshift when `seed` is given,
/// otherwise the host's `Math.random()` (a fixed seed on native targets).
pub fn default_source(seed: Option<u32>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(XorShift32::new(seed)),
        #[cfg(target_arch = "wasm32")]
        None => Box::new(JsMathRandom),
        #[cfg(not(target_arch = "wasm32"))]
        None => Box::new(XorShift32::default()),
    }
}
