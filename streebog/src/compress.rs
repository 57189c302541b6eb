//! Key schedule and the compression function `G`.

use crate::consts::C;
use crate::transform::{linear_diffuse, permute, substitute, xor_combine, Block};

/// The `LPS` composite applied by every round and by the key schedule.
#[inline(always)]
fn lps(b: &Block) -> Block {
    linear_diffuse(&permute(&substitute(b)))
}

/// Derives round key `K(i+1)` from `K(i)`.
#[inline(always)]
fn next_key(k: &Block, i: usize) -> Block {
    lps(&xor_combine(k, &C[i]))
}

/// 12-round block encryption `E` keyed by `k0`.
fn encrypt(k0: &Block, m: &Block) -> Block {
    let mut state = xor_combine(m, k0);
    let mut key = *k0;
    for i in 0..12 {
        state = lps(&state);
        key = next_key(&key, i);
        state = xor_combine(&state, &key);
    }
    state
}

/// Compression function: mixes the counter `n`, the chaining value `h`,
/// and one message block `m` into the next chaining value.
pub(crate) fn g(n: &Block, h: &Block, m: &Block) -> Block {
    let k0 = lps(&xor_combine(n, h));
    xor_combine(&xor_combine(&encrypt(&k0, m), h), m)
}
