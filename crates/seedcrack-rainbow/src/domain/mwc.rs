//! Start-point source: a complementary multiply-with-carry generator
//!
//! Chain start-points only need to be statistically independent draws from
//! the seed space, nothing about this generator is security relevant. The
//! lag-4096 CMWC construction has a huge period and costs one multiply per
//! output.

use std::sync::{LazyLock, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Lag (state words); power of two so the index wraps with a mask
const LAG: usize = 4096;

/// Golden-ratio increment used to spread the seed across the state
const PHI: u32 = 0x9E37_79B9;

/// CMWC multiplier
const MULTIPLIER: u64 = 18782;

/// 32-bit multiply-with-carry generator with 4096 words of state
pub struct MwcRng {
    q: [u32; LAG],
    carry: u32,
    index: usize,
}

impl MwcRng {
    pub fn new(seed: u32) -> Self {
        let mut q = [0u32; LAG];
        q[0] = seed;
        q[1] = seed.wrapping_add(PHI);
        q[2] = seed.wrapping_add(PHI).wrapping_add(PHI);
        for i in 3..LAG {
            q[i] = q[i - 3] ^ q[i - 2] ^ PHI ^ i as u32;
        }
        Self {
            q,
            carry: 362_436,
            index: LAG - 1,
        }
    }

    /// Seed from the wall clock; used for the process-wide instance
    fn from_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new((now.as_secs() as u32) ^ now.subsec_micros())
    }

    pub fn next_u32(&mut self) -> u32 {
        self.index = (self.index + 1) & (LAG - 1);
        let t = MULTIPLIER * self.q[self.index] as u64 + self.carry as u64;
        self.carry = (t >> 32) as u32;
        let mut x = (t as u32).wrapping_add(self.carry);
        if x < self.carry {
            x = x.wrapping_add(1);
            self.carry = self.carry.wrapping_add(1);
        }
        self.q[self.index] = 0xFFFF_FFFEu32.wrapping_sub(x);
        self.q[self.index]
    }
}

/// Process-wide instance, clock-seeded on first use
static START_POINTS: LazyLock<Mutex<MwcRng>> = LazyLock::new(|| Mutex::new(MwcRng::from_clock()));

/// Draw one chain start-point from the shared generator
pub fn next_start_point() -> u32 {
    START_POINTS
        .lock()
        .expect("start-point generator poisoned")
        .next_u32()
}
