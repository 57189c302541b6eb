//! An implementation of the [Streebog][1] cryptographic hash function
//! defined in the Russian national standard GOST R 34.11-2012.
//!
//! The standard defines two variants which differ only in the initial
//! chaining value and in how the final state is truncated: Streebog-256
//! (32-byte digest) and Streebog-512 (64-byte digest).
//!
//! Digests are produced in the byte order of the final state reversal;
//! callers comparing against test vectors published in the opposite
//! bit-order convention have to reverse both their input and the digest.
//!
//! # Usage
//!
//! ```rust
//! use streebog::{Digest, Streebog256, Streebog512};
//! use hex_literal::hex;
//!
//! // create hasher object
//! let mut hasher = Streebog256::new();
//! // write input message
//! hasher.update(b"hello world");
//! // read hash digest (it will consume hasher)
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     c600fd9dd049cf8abd2f5b32e840d2cb0e41ea44de1c155dcd88dc84fe58a855
//! ")[..]);
//!
//! // same for Streebog-512
//! let mut hasher = Streebog512::new();
//! hasher.update(b"hello world");
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     84d883ede9fa6ce855d82d8c278ecd9f5fc88bf0602831ae0c38b9b506ea3cb0
//!     2f3fa076b8f5664adf1ff862c0157da4cc9a83e141b738ff9268a9ba3ed6f563
//! ")[..]);
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/Streebog
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use digest::{
    consts::{U32, U64},
    core_api::{CoreWrapper, CtVariableCoreWrapper},
};

mod compress;
mod consts;
mod core_api;
mod table;
mod transform;

pub use crate::core_api::StreebogVarCore;

/// Streebog-256 hasher.
pub type Streebog256 = CoreWrapper<CtVariableCoreWrapper<StreebogVarCore, U32>>;

/// Streebog-512 hasher.
pub type Streebog512 = CoreWrapper<CtVariableCoreWrapper<StreebogVarCore, U64>>;
