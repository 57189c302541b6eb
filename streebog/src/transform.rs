//! Stateless primitives over 512-bit blocks.
//!
//! Every transform takes its operands by reference and returns a fresh
//! block; nothing here mutates caller state.

use crate::table::{A, PI, TAU};

/// 512-bit block operated on by the compression function.
pub(crate) type Block = [u8; 64];

/// Big-endian addition modulo 2^512. The carry out of the top byte
/// is discarded.
pub(crate) fn add512(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; 64];
    let mut carry = 0u16;
    for i in (0..64).rev() {
        carry = u16::from(a[i]) + u16::from(b[i]) + (carry >> 8);
        out[i] = carry as u8;
    }
    out
}

/// `X` transform: byte-wise XOR of two blocks.
pub(crate) fn xor_combine(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; 64];
    for i in 0..64 {
        out[i] = a[i] ^ b[i];
    }
    out
}

/// `S` transform: substitution of every byte through `PI`.
pub(crate) fn substitute(b: &Block) -> Block {
    let mut out = [0u8; 64];
    for i in 0..64 {
        out[i] = PI[b[i] as usize];
    }
    out
}

/// `P` transform: transposition of bytes according to `TAU`.
pub(crate) fn permute(b: &Block) -> Block {
    let mut out = [0u8; 64];
    for i in 0..64 {
        out[i] = b[TAU[i] as usize];
    }
    out
}

/// `L` transform: each of the eight big-endian 64-bit words is
/// multiplied as a GF(2) vector by the binary matrix `A`, selecting
/// rows from the most significant bit down.
pub(crate) fn linear_diffuse(b: &Block) -> Block {
    let mut out = [0u8; 64];
    for (dst, src) in out.chunks_exact_mut(8).zip(b.chunks_exact(8)) {
        let mut w = 0u64;
        for &byte in src {
            w = (w << 8) | u64::from(byte);
        }
        let mut acc = 0u64;
        for (j, row) in A.iter().enumerate() {
            if w >> (63 - j) & 1 != 0 {
                acc ^= row;
            }
        }
        dst.copy_from_slice(&acc.to_be_bytes());
    }
    out
}
