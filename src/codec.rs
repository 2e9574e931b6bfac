//! Convolutional Encoder and Viterbi Decoder
//!
//! Implements rate-1/n convolutional encoding with arbitrary constraint
//! length and generator polynomials, plus a hard-decision Viterbi decoder,
//! the workhorse FEC scheme in digital communications. Convolutional codes
//! add redundancy by convolving input bits with generator polynomials
//! through a shift register; the Viterbi decoder finds the
//! maximum-likelihood path through the code trellis with dynamic
//! programming, achieving near-optimal performance at tractable cost.
//!
//! ## Register convention
//!
//! The shift register holds the K-1 most recent input bits with the newest
//! bit at the LSB: consuming input `b` in state `s` forms the K-bit value
//! `reg = (s << 1) | b`, each polynomial contributes the parity of
//! `reg & poly`, and the next state is the low K-1 bits of `reg`. Bit 0 of
//! a polynomial therefore taps the newest input bit and bit K-1 the
//! oldest. Polynomials in the mirror-image (MATLAB) notation can be
//! translated with [`crate::bits::reverse_bits`] or
//! [`CodeConfig::reverse_polynomials`].
//!
//! ## Standard codes
//!
//! - **K=3, rate 1/2**: generators [7, 5] (the textbook example)
//! - **Voyager K=7, rate 1/2**: generators [109, 79]
//! - **LTE K=7, rate 1/3**: generators [91, 117, 121]
//! - **CDMA2000 K=9, rate 1/4**: generators [501, 441, 331, 315]
//!
//! ## Algorithm
//!
//! 1. Branch metric computation (Hamming distance between the received
//!    symbol and each transition's expected symbol)
//! 2. Path metric update (add-compare-select over both predecessors)
//! 3. Traceback from the zero state (the encoder always flushes to it)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bits::{format_bits, parse_bits, reverse_bits, tap_output};
use crate::error::{CodecError, CodecResult};

/// Configuration of a convolutional code: constraint length plus one
/// generator polynomial per output bit.
///
/// A `CodeConfig` is plain data; validation happens when it is handed to
/// [`ViterbiCodec::new`]. Valid configurations have `1 <= constraint <= 64`,
/// a non-empty polynomial list, and every polynomial in `(0, 2^constraint)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    /// Constraint length K (memory + 1).
    pub constraint: usize,
    /// Generator polynomials, one per output (bit 0 taps the newest input bit).
    pub polynomials: Vec<u64>,
}

impl CodeConfig {
    /// Create a configuration from a constraint length and polynomial list.
    pub fn new(constraint: usize, polynomials: Vec<u64>) -> Self {
        Self {
            constraint,
            polynomials,
        }
    }

    /// The textbook K=3, rate-1/2 code with generators [7, 5].
    ///
    /// Free distance 5, so any 2 bit errors per constraint span are
    /// correctable.
    pub fn k3_rate_half() -> Self {
        Self::new(3, vec![7, 5])
    }

    /// Voyager K=7, rate-1/2 code with generators [109, 79].
    pub fn voyager_k7_rate_half() -> Self {
        Self::new(7, vec![109, 79])
    }

    /// LTE K=7, rate-1/3 code with generators [91, 117, 121].
    pub fn lte_k7_rate_third() -> Self {
        Self::new(7, vec![91, 117, 121])
    }

    /// CDMA2000 K=9, rate-1/4 code with generators [501, 441, 331, 315].
    pub fn cdma2000_k9_rate_quarter() -> Self {
        Self::new(9, vec![501, 441, 331, 315])
    }

    /// Cassini / Mars Pathfinder K=15 code with seven generators.
    ///
    /// 16384 trellis states; decoding is noticeably heavier than for the
    /// shorter standard codes.
    pub fn cassini_k15() -> Self {
        Self::new(15, vec![15, 17817, 20133, 23879, 30451, 32439, 26975])
    }

    /// Number of output bits per input bit (the n in rate 1/n).
    pub fn outputs_per_input(&self) -> usize {
        self.polynomials.len()
    }

    /// Code rate as a fraction (1/n where n = number of polynomials).
    pub fn rate(&self) -> f64 {
        1.0 / self.polynomials.len() as f64
    }

    /// Number of states in the trellis (2^(K-1)).
    ///
    /// Meaningful only for validated constraints (1..=64); a constraint of
    /// 0 is treated as 1 rather than underflowing.
    pub fn num_states(&self) -> usize {
        1 << self.constraint.saturating_sub(1)
    }

    /// Return a configuration with every polynomial bit-reversed over the
    /// constraint width, translating between the two generator notations
    /// (e.g. 6 = 0b110 becomes 3 = 0b011 at K=3).
    pub fn reverse_polynomials(&self) -> Self {
        Self {
            constraint: self.constraint,
            polynomials: self
                .polynomials
                .iter()
                .map(|&p| reverse_bits(self.constraint, p))
                .collect(),
        }
    }
}

impl fmt::Display for CodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conv(K={}, rate=1/{}, polynomials={:?})",
            self.constraint,
            self.polynomials.len(),
            self.polynomials
        )
    }
}

/// Rate-1/n convolutional codec: encoder and maximum-likelihood (Viterbi)
/// decoder sharing one immutable configuration.
///
/// Both [`encode`](Self::encode) and [`decode`](Self::decode) take `&self`
/// and keep all working state on the call stack, so a codec can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct ViterbiCodec {
    config: CodeConfig,
    /// Mask for the full K-bit register (2^K - 1).
    register_mask: u64,
    /// Mask for the K-1 bit state (num_states - 1).
    state_mask: usize,
}

impl ViterbiCodec {
    /// Create a codec, validating the configuration.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidConstraint`] unless `1 <= constraint <= 64`
    /// - [`CodecError::EmptyPolynomials`] for an empty polynomial list
    /// - [`CodecError::TooManyPolynomials`] for more than 64 polynomials
    ///   (output symbols are held in a `u64`)
    /// - [`CodecError::InvalidPolynomial`] for any polynomial outside
    ///   `(0, 2^constraint)`
    pub fn new(config: CodeConfig) -> CodecResult<Self> {
        let k = config.constraint;
        if k < 1 || k > 64 {
            return Err(CodecError::InvalidConstraint(k));
        }
        if config.polynomials.is_empty() {
            return Err(CodecError::EmptyPolynomials);
        }
        if config.polynomials.len() > 64 {
            return Err(CodecError::TooManyPolynomials(config.polynomials.len()));
        }
        let register_mask = u64::MAX >> (64 - k);
        for &polynomial in &config.polynomials {
            if polynomial == 0 || polynomial > register_mask {
                return Err(CodecError::InvalidPolynomial {
                    polynomial,
                    constraint: k,
                });
            }
        }
        let state_mask = config.num_states() - 1;
        Ok(Self {
            config,
            register_mask,
            state_mask,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    /// Encode a `'0'`/`'1'` message string.
    ///
    /// Output length is exactly `n * (message_len + K - 1)`: every message
    /// bit plus K-1 trailing zero flush bits each produce one n-bit symbol.
    /// Fails only on characters outside the binary alphabet.
    pub fn encode(&self, message: &str) -> CodecResult<String> {
        let bits = parse_bits(message)?;
        Ok(format_bits(&self.encode_bits(&bits)))
    }

    /// Encode a message given as a bit slice.
    ///
    /// The encoder starts in the zero state and the K-1 flush bits drive it
    /// back there, so the decoder's trellis is known to terminate at state 0.
    pub fn encode_bits(&self, message: &[bool]) -> Vec<bool> {
        let n = self.config.outputs_per_input();
        let tail = self.config.constraint - 1;
        let mut output = Vec::with_capacity((message.len() + tail) * n);

        let mut state = 0usize;
        for &bit in message {
            state = self.encode_step(state, bit, &mut output);
        }
        for _ in 0..tail {
            state = self.encode_step(state, false, &mut output);
        }
        debug_assert_eq!(state, 0, "flush bits must return the encoder to state 0");

        output
    }

    /// Decode a `'0'`/`'1'` received string.
    ///
    /// The length must be a positive multiple of n and cover at least the
    /// K-1 flush symbols; the decoded message has
    /// `received_len / n - (K - 1)` bits. Given a length- and
    /// alphabet-valid input, decoding always produces a best-estimate
    /// result, even under heavy corruption.
    pub fn decode(&self, received: &str) -> CodecResult<String> {
        let bits = parse_bits(received)?;
        Ok(format_bits(&self.decode_bits(&bits)?))
    }

    /// Decode a received sequence given as a bit slice.
    ///
    /// Standard hard-decision Viterbi: a forward add-compare-select pass
    /// accumulates Hamming path metrics per state, then a traceback from
    /// the zero state recovers the input bits and the K-1 flush bits are
    /// stripped. Ties go to the first candidate in enumeration order
    /// (ascending predecessor state, input 0 before 1).
    pub fn decode_bits(&self, received: &[bool]) -> CodecResult<Vec<bool>> {
        let n = self.config.outputs_per_input();
        if received.is_empty() || received.len() % n != 0 {
            return Err(CodecError::LengthNotMultiple {
                length: received.len(),
                multiple: n,
            });
        }
        let steps = received.len() / n;
        let tail = self.config.constraint - 1;
        if steps < tail {
            return Err(CodecError::ReceivedTooShort {
                symbols: steps,
                tail,
            });
        }

        let num_states = self.config.num_states();

        // Path metrics, u32::MAX as the unreachable sentinel. The encoder
        // starts in state 0, so only state 0 has cost zero at time 0.
        let mut metrics = vec![u32::MAX; num_states];
        metrics[0] = 0;
        let mut next_metrics = vec![u32::MAX; num_states];

        // Back-pointers: flat step-major (predecessor state, input bit)
        // tables, one entry per (step, state).
        let mut survivors = vec![0usize; steps * num_states];
        let mut decisions = vec![false; steps * num_states];

        for step in 0..steps {
            let received_symbol = pack_symbol(&received[step * n..(step + 1) * n]);
            let base = step * num_states;
            next_metrics.fill(u32::MAX);

            for state in 0..num_states {
                let metric = metrics[state];
                if metric == u32::MAX {
                    continue;
                }
                for input in [false, true] {
                    let next = self.next_state(state, input);
                    let branch = (self.output_symbol(state, input) ^ received_symbol).count_ones();
                    let candidate = metric.saturating_add(branch);
                    if candidate < next_metrics[next] {
                        next_metrics[next] = candidate;
                        survivors[base + next] = state;
                        decisions[base + next] = input;
                    }
                }
            }

            std::mem::swap(&mut metrics, &mut next_metrics);
        }

        // Traceback from state 0: the flush bits guarantee a terminated
        // trellis. If no path reached state 0 the recorded defaults still
        // yield a deterministic best-effort walk.
        let mut decoded = vec![false; steps];
        let mut state = 0usize;
        for step in (0..steps).rev() {
            let base = step * num_states;
            decoded[step] = decisions[base + state];
            state = survivors[base + state];
        }

        // Drop the flush tail, keeping the message bits.
        decoded.truncate(steps - tail);
        Ok(decoded)
    }

    /// Next-state function of the trellis: shift the input bit into the
    /// register and drop the oldest history bit.
    #[inline]
    fn next_state(&self, state: usize, input: bool) -> usize {
        ((state << 1) | input as usize) & self.state_mask
    }

    /// Output function of the trellis: the n-bit symbol emitted on the
    /// transition out of `state` under `input`, packed with polynomial i's
    /// bit at position i (construction caps n at 64 so every symbol fits).
    /// Packing lets the branch metric be a single XOR + popcount.
    #[inline]
    fn output_symbol(&self, state: usize, input: bool) -> u64 {
        let register = (((state as u64) << 1) | input as u64) & self.register_mask;
        let mut symbol = 0u64;
        for (i, &polynomial) in self.config.polynomials.iter().enumerate() {
            if tap_output(register, polynomial) {
                symbol |= 1 << i;
            }
        }
        symbol
    }

    /// Emit the symbol for one input bit and return the successor state.
    fn encode_step(&self, state: usize, input: bool, output: &mut Vec<bool>) -> usize {
        let symbol = self.output_symbol(state, input);
        for i in 0..self.config.outputs_per_input() {
            output.push((symbol >> i) & 1 == 1);
        }
        self.next_state(state, input)
    }
}

impl fmt::Display for ViterbiCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.fmt(f)
    }
}

/// Pack one received n-bit symbol into a bitmask, bit i holding the bit for
/// polynomial i.
#[inline]
fn pack_symbol(chunk: &[bool]) -> u64 {
    let mut symbol = 0u64;
    for (i, &bit) in chunk.iter().enumerate() {
        if bit {
            symbol |= 1 << i;
        }
    }
    symbol
}

/// Compute the free distance (d_free) of a convolutional code.
///
/// The free distance is the minimum Hamming weight over all codeword paths
/// that diverge from the zero state and re-merge to it, and determines the
/// error-correcting capability: up to floor((d_free - 1) / 2) errors per
/// constraint span are correctable.
///
/// Exhaustive weight enumeration over diverge/re-merge paths, pruned by the
/// best weight found so far. Only practical for small constraint lengths
/// (K <= 10 or so).
pub fn free_distance(config: &CodeConfig) -> usize {
    let codec = match ViterbiCodec::new(config.clone()) {
        Ok(codec) => codec,
        Err(_) => return 0,
    };
    let num_states = config.num_states();
    // A path must re-merge within num_states + K steps or it revisits a
    // state without improving.
    let max_path_len = num_states + config.constraint;
    let mut min_dist = usize::MAX;

    struct PathState {
        state: usize,
        output_weight: usize,
        depth: usize,
    }

    // The first step takes input 1 to diverge from the zero state.
    let mut stack = vec![PathState {
        state: codec.next_state(0, true),
        output_weight: codec.output_symbol(0, true).count_ones() as usize,
        depth: 1,
    }];

    while let Some(path) = stack.pop() {
        if path.depth >= max_path_len || path.output_weight >= min_dist {
            continue;
        }
        for input in [false, true] {
            let next = codec.next_state(path.state, input);
            let weight =
                path.output_weight + codec.output_symbol(path.state, input).count_ones() as usize;
            if next == 0 {
                if weight < min_dist {
                    min_dist = weight;
                }
            } else if weight < min_dist {
                stack.push(PathState {
                    state: next,
                    output_weight: weight,
                    depth: path.depth + 1,
                });
            }
        }
    }

    if min_dist == usize::MAX {
        0
    } else {
        min_dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn codec(constraint: usize, polynomials: Vec<u64>) -> ViterbiCodec {
        ViterbiCodec::new(CodeConfig::new(constraint, polynomials)).unwrap()
    }

    /// K=3 [7,5] reference vector: encoding side.
    #[test]
    fn test_encode_known_vector_k3_75() {
        let codec = codec(3, vec![7, 5]);
        assert_eq!(
            codec.encode("010111001010001").unwrap(),
            "0011100001100111111000101100111011"
        );
    }

    /// K=3 [7,5] reference vector: clean decode and a 1-bit-flipped variant.
    #[test]
    fn test_decode_known_vector_k3_75() {
        let codec = codec(3, vec![7, 5]);
        assert_eq!(
            codec.decode("0011100001100111111000101100111011").unwrap(),
            "010111001010001"
        );
        // Same sequence with the bit at position 18 flipped
        assert_eq!(
            codec.decode("0011100001100111110000101100111011").unwrap(),
            "010111001010001"
        );
    }

    /// Asymmetric polynomial 6 pins down the register bit order.
    #[test]
    fn test_decode_k3_76() {
        let codec = codec(3, vec![7, 6]);
        assert_eq!(codec.decode("1011010100110000").unwrap(), "101100");
        assert_eq!(codec.encode("101100").unwrap(), "1011010100110000");
    }

    #[test]
    fn test_decode_k3_65_with_two_errors() {
        let codec = codec(3, vec![6, 5]);
        assert_eq!(codec.decode("011011011101101011").unwrap(), "1001101");
        // Two injected bit errors
        assert_eq!(codec.decode("111011011100101011").unwrap(), "1001101");
    }

    #[test]
    fn test_decode_lte_k7_with_four_errors() {
        let codec = ViterbiCodec::new(CodeConfig::lte_k7_rate_third()).unwrap();
        assert_eq!(
            codec
                .decode("111100101110001011110101111111001011100111")
                .unwrap(),
            "10110111"
        );
        // Four injected bit errors
        assert_eq!(
            codec
                .decode("100100101110001011110101110111001011100110")
                .unwrap(),
            "10110111"
        );
    }

    #[test]
    fn test_empty_message_roundtrip() {
        let codec = codec(3, vec![7, 5]);
        // Only the K-1 flush symbols are emitted
        let coded = codec.encode("").unwrap();
        assert_eq!(coded, "0000");
        assert_eq!(codec.decode(&coded).unwrap(), "");
    }

    /// K=1 has no memory: the code degenerates to per-bit repetition.
    #[test]
    fn test_constraint_one_is_identity() {
        let codec = codec(1, vec![1]);
        assert_eq!(codec.encode("10110").unwrap(), "10110");
        assert_eq!(codec.decode("10110").unwrap(), "10110");
    }

    #[test]
    fn test_encode_length_invariant() {
        for config in [
            CodeConfig::k3_rate_half(),
            CodeConfig::voyager_k7_rate_half(),
            CodeConfig::lte_k7_rate_third(),
            CodeConfig::cdma2000_k9_rate_quarter(),
        ] {
            let n = config.outputs_per_input();
            let k = config.constraint;
            let codec = ViterbiCodec::new(config).unwrap();
            for len in [0, 1, 7, 32] {
                let message: Vec<bool> = (0..len).map(|i| i % 3 == 1).collect();
                let coded = codec.encode_bits(&message);
                assert_eq!(coded.len(), n * (len + k - 1));
                let decoded = codec.decode_bits(&coded).unwrap();
                assert_eq!(decoded.len(), coded.len() / n - (k - 1));
                assert_eq!(decoded, message);
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let codec = codec(3, vec![7, 5]);
        let coded1 = codec.encode("1100101").unwrap();
        let coded2 = codec.encode("1100101").unwrap();
        assert_eq!(coded1, coded2);
        assert_eq!(
            codec.decode(&coded1).unwrap(),
            codec.decode(&coded2).unwrap()
        );
    }

    #[test]
    fn test_invalid_constraint() {
        assert_eq!(
            ViterbiCodec::new(CodeConfig::new(0, vec![1])).unwrap_err(),
            CodecError::InvalidConstraint(0)
        );
        assert_eq!(
            ViterbiCodec::new(CodeConfig::new(65, vec![1])).unwrap_err(),
            CodecError::InvalidConstraint(65)
        );
    }

    /// Symbols wider than 32 bits must pack without overflow: a rate-1/33
    /// code encodes and round-trips cleanly.
    #[test]
    fn test_wide_symbol_roundtrip() {
        let polynomials: Vec<u64> = (0..33).map(|i| [7, 5, 6, 3][i % 4]).collect();
        let codec = ViterbiCodec::new(CodeConfig::new(3, polynomials)).unwrap();
        let message = vec![true, false, true];
        let coded = codec.encode_bits(&message);
        assert_eq!(coded.len(), 33 * (3 + 2));
        assert_eq!(codec.decode_bits(&coded).unwrap(), message);
    }

    #[test]
    fn test_too_many_polynomials() {
        assert!(ViterbiCodec::new(CodeConfig::new(3, vec![7; 64])).is_ok());
        assert_eq!(
            ViterbiCodec::new(CodeConfig::new(3, vec![7; 65])).unwrap_err(),
            CodecError::TooManyPolynomials(65)
        );
    }

    #[test]
    fn test_empty_polynomials() {
        assert_eq!(
            ViterbiCodec::new(CodeConfig::new(3, vec![])).unwrap_err(),
            CodecError::EmptyPolynomials
        );
    }

    #[test]
    fn test_invalid_polynomial() {
        assert_eq!(
            ViterbiCodec::new(CodeConfig::new(3, vec![7, 0])).unwrap_err(),
            CodecError::InvalidPolynomial {
                polynomial: 0,
                constraint: 3
            }
        );
        assert_eq!(
            ViterbiCodec::new(CodeConfig::new(3, vec![8])).unwrap_err(),
            CodecError::InvalidPolynomial {
                polynomial: 8,
                constraint: 3
            }
        );
        // Largest valid polynomial for K=3 is 7
        assert!(ViterbiCodec::new(CodeConfig::new(3, vec![7])).is_ok());
    }

    #[test]
    fn test_decode_length_errors() {
        let codec = codec(3, vec![7, 5]);
        assert_eq!(
            codec.decode("").unwrap_err(),
            CodecError::LengthNotMultiple {
                length: 0,
                multiple: 2
            }
        );
        assert_eq!(
            codec.decode("101").unwrap_err(),
            CodecError::LengthNotMultiple {
                length: 3,
                multiple: 2
            }
        );
        // One symbol cannot hold the two flush symbols
        assert_eq!(
            codec.decode("11").unwrap_err(),
            CodecError::ReceivedTooShort {
                symbols: 1,
                tail: 2
            }
        );
        // Exactly the flush tail decodes to the empty message
        assert_eq!(codec.decode("0000").unwrap(), "");
    }

    #[test]
    fn test_alphabet_errors() {
        let codec = codec(3, vec![7, 5]);
        assert_eq!(
            codec.encode("01x1").unwrap_err(),
            CodecError::InvalidBitChar {
                found: 'x',
                position: 2
            }
        );
        assert!(codec.decode("0101 10").is_err());
    }

    /// Heavy corruption still yields a well-formed best-effort result.
    #[test]
    fn test_decode_garbage_never_fails() {
        let codec = codec(3, vec![7, 5]);
        let garbage = "1".repeat(40);
        let decoded = codec.decode(&garbage).unwrap();
        assert_eq!(decoded.len(), 40 / 2 - 2);
        assert!(decoded.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_config_properties() {
        let config = CodeConfig::lte_k7_rate_third();
        assert_eq!(config.num_states(), 64);
        assert_eq!(config.outputs_per_input(), 3);
        assert!((config.rate() - 1.0 / 3.0).abs() < 1e-10);
        // Accessors stay total on unvalidated configs
        assert_eq!(CodeConfig::new(0, vec![1]).num_states(), 1);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = CodeConfig::lte_k7_rate_third();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<CodeConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_config_display() {
        let config = CodeConfig::k3_rate_half();
        let rendered = format!("{}", ViterbiCodec::new(config).unwrap());
        assert_eq!(rendered, "Conv(K=3, rate=1/2, polynomials=[7, 5])");
    }

    #[test]
    fn test_reverse_polynomials_config() {
        let config = CodeConfig::new(3, vec![6, 5]);
        assert_eq!(config.reverse_polynomials().polynomials, vec![3, 5]);
        // Reversing twice restores the original
        assert_eq!(config.reverse_polynomials().reverse_polynomials(), config);
    }

    /// The (7,5) code has free distance 5.
    #[test]
    fn test_free_distance_k3() {
        assert_eq!(free_distance(&CodeConfig::k3_rate_half()), 5);
    }

    /// Randomized round-trips across the standard codes, mirroring the
    /// lengths 8/16/32 sweep of the classic self-test.
    #[test]
    fn test_random_roundtrips() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for config in [
            CodeConfig::k3_rate_half(),
            CodeConfig::new(3, vec![6, 5]),
            CodeConfig::voyager_k7_rate_half(),
            CodeConfig::lte_k7_rate_third(),
            CodeConfig::cdma2000_k9_rate_quarter(),
        ] {
            let codec = ViterbiCodec::new(config).unwrap();
            for num_bits in [8usize, 16, 32] {
                for _ in 0..10 {
                    let message: Vec<bool> = (0..num_bits).map(|_| rng.gen()).collect();
                    let coded = codec.encode_bits(&message);
                    assert_eq!(
                        codec.decode_bits(&coded).unwrap(),
                        message,
                        "round-trip failed for {}",
                        codec
                    );
                }
            }
        }
    }

    /// Single round-trip through the 16384-state Cassini code.
    #[test]
    fn test_cassini_k15_roundtrip() {
        let codec = ViterbiCodec::new(CodeConfig::cassini_k15()).unwrap();
        let message = "10110111";
        let coded = codec.encode(message).unwrap();
        assert_eq!(coded.len(), 7 * (8 + 14));
        assert_eq!(codec.decode(&coded).unwrap(), message);
    }

    /// Error tolerance: flip single bits across the whole K=3 codeword and
    /// expect exact recovery each time (free distance 5 corrects 2 errors).
    #[test]
    fn test_single_bit_error_sweep_k3() {
        let codec = codec(3, vec![7, 5]);
        let message: Vec<bool> = (0..24).map(|i| i % 5 < 2).collect();
        let coded = codec.encode_bits(&message);
        for i in 0..coded.len() {
            let mut corrupted = coded.clone();
            corrupted[i] = !corrupted[i];
            assert_eq!(
                codec.decode_bits(&corrupted).unwrap(),
                message,
                "failed after flipping bit {}",
                i
            );
        }
    }
}
