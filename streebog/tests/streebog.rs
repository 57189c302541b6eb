use hex_literal::hex;
use streebog::{Digest, Streebog256, Streebog512};

fn digest256(msg: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Streebog256::digest(msg)[..]);
    out
}

fn digest512(msg: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Streebog512::digest(msg)[..]);
    out
}

#[test]
fn streebog256_known_answers() {
    assert_eq!(
        digest256(b""),
        hex!("3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb")
    );
    assert_eq!(
        digest256(b"abc"),
        hex!("4e2919cf137ed41ec4fb6270c61826cc4fffb660341e0af3688cd0626d23b481")
    );
    assert_eq!(
        digest256(b"hello world"),
        hex!("c600fd9dd049cf8abd2f5b32e840d2cb0e41ea44de1c155dcd88dc84fe58a855")
    );
    assert_eq!(
        digest256(b"The quick brown fox jumps over the lazy dog"),
        hex!("3e7dea7f2384b6c5a3d0e24aaa29c05e89ddd762145030ec22c71a6db8b2c1f4")
    );
    // the 63-byte message of RFC 6986, fed in native byte order
    assert_eq!(
        digest256(b"012345678901234567890123456789012345678901234567890123456789012"),
        hex!("9d151eefd8590b89daa6ba6cb74af9275dd051026bb149a452fd84e5e57b5500")
    );
}

#[test]
fn streebog512_known_answers() {
    assert_eq!(
        digest512(b""),
        hex!("
            8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7
            362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a
        ")
    );
    assert_eq!(
        digest512(b"abc"),
        hex!("
            28156e28317da7c98f4fe2bed6b542d0dab85bb224445fcedaf75d46e26d7eb8
            d5997f3e0915dd6b7f0aab08d9c8beb0d8c64bae2ab8b3c8c6bc53b3bf0db728
        ")
    );
    assert_eq!(
        digest512(b"hello world"),
        hex!("
            84d883ede9fa6ce855d82d8c278ecd9f5fc88bf0602831ae0c38b9b506ea3cb0
            2f3fa076b8f5664adf1ff862c0157da4cc9a83e141b738ff9268a9ba3ed6f563
        ")
    );
    assert_eq!(
        digest512(b"The quick brown fox jumps over the lazy dog"),
        hex!("
            d2b793a0bb6cb5904828b5b6dcfb443bb8f33efc06ad09368878ae4cdc8245b9
            7e60802469bed1e7c21a64ff0b179a6a1e0bb74d92965450a0adab69162c00fe
        ")
    );
    assert_eq!(
        digest512(b"012345678901234567890123456789012345678901234567890123456789012"),
        hex!("
            1b54d01a4af5b9d5cc3d86d68d285462b19abc2475222f35c085122be4ba1ffa
            00ad30f8767b3a82384c6574f024c311e2a481332b08ef7f41797891c1646f48
        ")
    );
}

#[test]
fn block_boundary_lengths() {
    // 63 bytes: pad-only final block; 64: full block plus empty-remainder
    // pad block; 65: full block plus a one-byte final block
    let msg: Vec<u8> = (0u8..65).collect();

    let d63_256 = digest256(&msg[..63]);
    let d64_256 = digest256(&msg[..64]);
    let d65_256 = digest256(&msg[..65]);
    assert_eq!(
        d63_256,
        hex!("937c66cf8c151d92d5acac335d951073c69711727172443c93aba97071b8f48b")
    );
    assert_eq!(
        d64_256,
        hex!("1bce2366e4aecd63c75f972bfc6a514e03e2125920bea5b59cbd8ce0be56b8f3")
    );
    assert_eq!(
        d65_256,
        hex!("3ce0351669ec6743d326120c67e27043eb7742a874c61a933c4d8970364cb97c")
    );
    assert_ne!(d63_256, d64_256);
    assert_ne!(d64_256, d65_256);

    assert_eq!(
        digest512(&msg[..63]),
        hex!("
            60eabc4fff6e8ae0bac4f5ab478f3830463c0186fa58e1e436d3108691a1cd75
            0419a6053ecbae5c4d0d0b5371457fc5f134e1f8e250e991759c8093c0747ebd
        ")
    );
    assert_eq!(
        digest512(&msg[..64]),
        hex!("
            2ae581f18ae85e3596c936acbef910f2ed70dcf91ed5d24b39a5af657bf8232a
            303d686056c8c00bf30d42e16ce255426fa8a155dcb3eb822d925808f7c7e345
        ")
    );
    assert_eq!(
        digest512(&msg[..65]),
        hex!("
            9ceec527f07f832abe16e8274c67dbf2236fd05790426237dc9abfb5eed6daf2
            0847df0c94c754b4e88f09b836890e68303ef8f589dd6e51489cfa9d3bbfdadd
        ")
    );
}

#[test]
fn multi_block_message() {
    let msg = vec![0xA5u8; 100000];
    assert_eq!(
        digest256(&msg),
        hex!("0e835746272dd1aa494c06ec1ae9d006d49bdf76d744fc1aa6ba5f71b590f975")
    );
    assert_eq!(
        digest512(&msg),
        hex!("
            d5d0426f44d3bb78429f34c187d2351e5cd41cd93dddd54a74bb47b4de7783e4
            7c334b15aa887f7df1e27dc2d927024de7b4abb81cde183e5e46638dce478013
        ")
    );
}

#[test]
fn digest_is_independent_of_update_chunking() {
    let msg: Vec<u8> = (0..777u32).map(|i| (i * 31 % 251) as u8).collect();
    let expected = digest512(&msg);

    for chunk_len in [1, 3, 17, 63, 64, 65, 200] {
        let mut hasher = Streebog512::new();
        for chunk in msg.chunks(chunk_len) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize()[..], expected[..]);
    }

    // empty updates are no-ops
    let mut hasher = Streebog512::new();
    hasher.update(b"");
    hasher.update(&msg);
    hasher.update(b"");
    assert_eq!(hasher.finalize()[..], expected[..]);
}

#[test]
fn cloned_hashers_diverge_independently() {
    let mut original = Streebog256::new();
    original.update(b"shared prefix|");

    let mut fork = original.clone();
    original.update(b"left branch");
    fork.update(b"right branch");

    assert_eq!(
        original.finalize()[..],
        digest256(b"shared prefix|left branch")[..]
    );
    assert_eq!(
        fork.finalize()[..],
        digest256(b"shared prefix|right branch")[..]
    );
}

#[test]
fn finalize_reset_restores_a_fresh_state() {
    let mut hasher = Streebog512::new();
    hasher.update(b"first message");
    let first = hasher.finalize_reset();
    assert_eq!(first[..], digest512(b"first message")[..]);

    hasher.update(b"second, unrelated message");
    assert_eq!(
        hasher.finalize()[..],
        digest512(b"second, unrelated message")[..]
    );
}

#[test]
fn reset_discards_buffered_input() {
    use digest::Reset;

    let mut hasher = Streebog256::new();
    hasher.update(b"to be discarded");
    Reset::reset(&mut hasher);
    hasher.update(b"hello world");
    assert_eq!(hasher.finalize()[..], digest256(b"hello world")[..]);
}

#[test]
fn dyn_finalize_checks_buffer_length() {
    use digest::DynDigest;

    let mut hasher: Box<dyn DynDigest> = Box::new(Streebog256::new());
    assert_eq!(hasher.output_size(), 32);

    hasher.update(b"abc");
    let mut short = [0u8; 16];
    assert!(hasher.finalize_into_reset(&mut short).is_err());

    hasher.reset();
    hasher.update(b"abc");
    let mut out = [0u8; 32];
    hasher.finalize_into_reset(&mut out).unwrap();
    assert_eq!(
        out,
        hex!("4e2919cf137ed41ec4fb6270c61826cc4fffb660341e0af3688cd0626d23b481")
    );
}

#[test]
fn narrow_digest_is_not_a_prefix_of_wide() {
    // the variants use different initial chaining values, so the narrow
    // digest is unrelated to any truncation of the wide one
    let wide = digest512(b"hello world");
    let narrow = digest256(b"hello world");
    assert_ne!(narrow[..], wide[..32]);
    assert_ne!(narrow[..], wide[32..]);
}
