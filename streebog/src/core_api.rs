use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, OutputSizeUser, TruncSide,
        UpdateCore, VariableOutputCore,
    },
    consts::U64,
    HashMarker, InvalidOutputSize, Output,
};

use crate::compress::g;
use crate::consts::BLOCK_SIZE;
use crate::transform::add512;

const ZERO: [u8; 64] = [0u8; 64];

/// Lowest-level Streebog hasher state, shared by both output widths.
///
/// The chaining value `h`, the bit counter `n`, and the block checksum
/// `sigma` advance together, once per consumed block.
#[derive(Clone)]
pub struct StreebogVarCore {
    h: [u8; 64],
    n: [u8; 64],
    sigma: [u8; 64],
}

impl StreebogVarCore {
    /// Consumes one 64-byte block carrying `msg_bits` bits of message data.
    fn compress(&mut self, block: &[u8; 64], msg_bits: u32) {
        let mut m = *block;
        m.reverse();
        self.h = g(&self.n, &self.h, &m);
        let mut bits = ZERO;
        bits[56..].copy_from_slice(&u64::from(msg_bits).to_be_bytes());
        self.n = add512(&self.n, &bits);
        self.sigma = add512(&self.sigma, &m);
    }
}

impl HashMarker for StreebogVarCore {}

impl BlockSizeUser for StreebogVarCore {
    type BlockSize = U64;
}

impl BufferKindUser for StreebogVarCore {
    type BufferKind = Eager;
}

impl UpdateCore for StreebogVarCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        let mut block = [0u8; 64];
        for b in blocks {
            block.copy_from_slice(b.as_slice());
            self.compress(&block, 8 * BLOCK_SIZE as u32);
        }
    }
}

impl OutputSizeUser for StreebogVarCore {
    type OutputSize = U64;
}

impl VariableOutputCore for StreebogVarCore {
    const TRUNC_SIDE: TruncSide = TruncSide::Right;

    #[inline]
    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        let h = match output_size {
            32 => [1; 64],
            64 => [0; 64],
            _ => return Err(InvalidOutputSize),
        };
        Ok(Self {
            h,
            n: ZERO,
            sigma: ZERO,
        })
    }

    #[inline]
    fn finalize_variable_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        // pad10*: remaining message bytes, a single 0x01 marker, zeros.
        // Runs even for an empty remainder, so a message that is an
        // exact multiple of the block size still gets a pad-only block.
        let pos = buffer.get_pos();
        let mut block = ZERO;
        block[..pos].copy_from_slice(buffer.get_data());
        block[pos] = 1;
        self.compress(&block, 8 * pos as u32);

        let n = self.n;
        self.h = g(&ZERO, &self.h, &n);
        let sigma = self.sigma;
        self.h = g(&ZERO, &self.h, &sigma);

        let mut digest = self.h;
        digest.reverse();
        out.copy_from_slice(&digest);
    }
}

impl AlgorithmName for StreebogVarCore {
    #[inline]
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Streebog")
    }
}

opaque_debug::implement!(StreebogVarCore);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_vectors_per_output_width() {
        assert_eq!(StreebogVarCore::new(32).unwrap().h, [1u8; 64]);
        assert_eq!(StreebogVarCore::new(64).unwrap().h, [0u8; 64]);
    }

    #[test]
    fn unsupported_output_widths_are_rejected() {
        for size in [0, 16, 31, 33, 48, 63, 65, 128] {
            assert!(StreebogVarCore::new(size).is_err());
        }
    }

    #[test]
    fn block_processing_is_shared_between_widths() {
        // the two variants differ only in the initial chaining value;
        // with equal starting states they stay in lock-step
        let mut narrow = StreebogVarCore::new(32).unwrap();
        let mut wide = StreebogVarCore::new(64).unwrap();
        wide.h = narrow.h;

        let block = [0xA5u8; 64];
        narrow.compress(&block, 512);
        wide.compress(&block, 512);
        assert_eq!(narrow.h, wide.h);
        assert_eq!(narrow.n, wide.n);
        assert_eq!(narrow.sigma, wide.sigma);
    }

    #[test]
    fn counter_tracks_bits_in_full_512_bit_precision() {
        let mut core = StreebogVarCore::new(64).unwrap();
        let block = [0u8; 64];
        for _ in 0..3 {
            core.compress(&block, 512);
        }
        let mut expected = [0u8; 64];
        expected[56..].copy_from_slice(&1536u64.to_be_bytes());
        assert_eq!(core.n, expected);
    }
}
