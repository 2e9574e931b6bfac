//! # Rate-1/n Convolutional Codes with Viterbi Decoding
//!
//! This crate implements the classical forward-error-correction codec used
//! in radio, satellite, and storage links: a binary rate-1/n convolutional
//! encoder and its companion maximum-likelihood (Viterbi) decoder.
//!
//! The encoder is a finite-state transducer: each input bit shifts through
//! a K-1 bit register and every generator polynomial taps a subset of the
//! register into a modulo-2 sum, emitting n output bits per input bit. K-1
//! zero flush bits are appended so the register deterministically returns
//! to the zero state. The decoder searches the implied trellis with the
//! Viterbi algorithm, accumulating Hamming path metrics and tracing back
//! from the known zero termination state to recover the most likely
//! message, correcting scattered bit errors up to the code's free distance.
//!
//! Both directions are owned by a single [`ViterbiCodec`] parameterized
//! once at construction. The codec is a leaf library: synchronous, pure,
//! and safe to share across threads.
//!
//! ## Example
//!
//! ```rust
//! use viterbi_codec::{CodeConfig, ViterbiCodec};
//!
//! // The textbook K=3, rate-1/2 code with generators 7 and 5
//! let codec = ViterbiCodec::new(CodeConfig::new(3, vec![7, 5])).unwrap();
//!
//! let coded = codec.encode("010111001010001").unwrap();
//! assert_eq!(coded, "0011100001100111111000101100111011");
//! assert_eq!(codec.decode(&coded).unwrap(), "010111001010001");
//!
//! // A corrupted bit is transparently corrected
//! let corrupted = "0011100001100111110000101100111011";
//! assert_eq!(codec.decode(corrupted).unwrap(), "010111001010001");
//! ```

pub mod bits;
pub mod codec;
pub mod error;

pub use codec::{free_distance, CodeConfig, ViterbiCodec};
pub use error::{CodecError, CodecResult};
