//! The MT19937 generator, bit-exact with the reference implementation.

/// Number of 32-bit words in the generator state.
pub const STATE_WORDS: usize = 624;

/// Offset of the second state word entering the twist recurrence.
const RECURRENCE_OFFSET: usize = 397;

const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// A 32-bit Mersenne Twister.
///
/// The constants and shift counts below are bit-exact with the reference
/// MT19937 used by widely deployed language standard libraries; any
/// deviation breaks interoperability with observed streams.
#[derive(Clone, Debug)]
pub struct Mt19937 {
    state: [u32; STATE_WORDS],
    index: usize,
}

impl Mt19937 {
    /// Wrap a caller-supplied state; the next extraction reads `state[0]`.
    pub fn from_state(state: [u32; STATE_WORDS]) -> Self {
        Self { state, index: 0 }
    }

    /// Seed with the reference `init_genrand` recurrence.
    ///
    /// The index is primed so the first extraction twists, matching the
    /// published output vectors (seed 5489 emits 3 499 211 612 first).
    pub fn from_seed(seed: u32) -> Self {
        let mut state = [0u32; STATE_WORDS];
        state[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = state[i - 1];
            state[i] = SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            state,
            index: STATE_WORDS,
        }
    }

    /// Read-only view of the raw (untempered) state words.
    pub fn state(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }

    /// Extract the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index == STATE_WORDS {
            self.twist();
        }
        let y = temper(self.state[self.index]);
        self.index += 1;
        y
    }

    /// Advance the stream by `n` outputs, discarding them.
    pub fn discard(&mut self, n: usize) {
        for _ in 0..n {
            self.next_u32();
        }
    }

    fn twist(&mut self) {
        for k in 0..STATE_WORDS {
            let x = (self.state[k] & UPPER_MASK)
                | (self.state[(k + 1) % STATE_WORDS] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.state[k] = self.state[(k + RECURRENCE_OFFSET) % STATE_WORDS] ^ x_a;
        }
        self.index = 0;
    }
}

/// The output-whitening bijection; GF(2)-linear in the state word.
#[inline(always)]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & 0x9d2c_5680;
    y ^= (y << 15) & 0xefc6_0000;
    y ^ (y >> 18)
}
