//! Positional ABI-style tuple encoding.
//!
//! Head/tail layout over 32-byte words: static values occupy one head word
//! each; dynamic values (strings) occupy a head word holding the byte offset
//! of their tail block, measured from the start of the encoding. A string
//! tail is a 32-byte big-endian length word followed by the UTF-8 bytes,
//! right-padded with zeros to a word boundary.
//!
//! Injective over the field tuple, and byte-compatible with the reference
//! deployment's commitment encoding.

use sealedbook_types::Order;
use sealedbook_types::constants::ABI_WORD_BYTES;

/// One head slot: either a finished static word, or a placeholder for the
/// offset of the tail block at the given index.
enum HeadSlot {
    Word([u8; ABI_WORD_BYTES]),
    Dynamic(usize),
}

/// Incremental encoder for one positional tuple.
///
/// Values must be pushed in tuple order; [`TupleEncoder::finish`] resolves
/// the dynamic offsets and concatenates head and tail sections.
#[derive(Default)]
pub struct TupleEncoder {
    head: Vec<HeadSlot>,
    tails: Vec<Vec<u8>>,
}

impl TupleEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unsigned integer as one 32-byte big-endian word.
    pub fn push_uint(&mut self, value: u64) {
        self.head.push(HeadSlot::Word(uint_word(value)));
    }

    /// Append a length-tagged, zero-padded string.
    pub fn push_str(&mut self, value: &str) {
        let bytes = value.as_bytes();
        let padded_len = bytes.len().div_ceil(ABI_WORD_BYTES) * ABI_WORD_BYTES;

        let mut tail = Vec::with_capacity(ABI_WORD_BYTES + padded_len);
        tail.extend_from_slice(&uint_word(bytes.len() as u64));
        tail.extend_from_slice(bytes);
        tail.resize(ABI_WORD_BYTES + padded_len, 0);

        self.head.push(HeadSlot::Dynamic(self.tails.len()));
        self.tails.push(tail);
    }

    /// Resolve offsets and produce the final byte sequence.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        let head_len = self.head.len() * ABI_WORD_BYTES;
        let tail_len: usize = self.tails.iter().map(Vec::len).sum();

        // Offset of each tail block from the start of the encoding.
        let mut offsets = Vec::with_capacity(self.tails.len());
        let mut next = head_len;
        for tail in &self.tails {
            offsets.push(next);
            next += tail.len();
        }

        let mut out = Vec::with_capacity(head_len + tail_len);
        for slot in self.head {
            match slot {
                HeadSlot::Word(word) => out.extend_from_slice(&word),
                HeadSlot::Dynamic(i) => out.extend_from_slice(&uint_word(offsets[i] as u64)),
            }
        }
        for tail in self.tails {
            out.extend_from_slice(&tail);
        }
        out
    }
}

/// Encode an order's seven fields as the canonical commitment tuple.
///
/// Side and account type enter as their wire *names*; direction enters as
/// its *ordinal*. The asymmetry is part of the compatibility surface.
#[must_use]
pub fn encode_order(order: &Order) -> Vec<u8> {
    let mut enc = TupleEncoder::new();
    enc.push_str(&order.ticker_symbol);
    enc.push_str(order.side.name());
    enc.push_str(order.account_type.name());
    enc.push_uint(order.quantity);
    enc.push_uint(order.price);
    enc.push_uint(order.time_in_force);
    enc.push_uint(order.direction.ordinal());
    enc.finish()
}

/// A `u64` widened into one 32-byte big-endian word.
fn uint_word(value: u64) -> [u8; ABI_WORD_BYTES] {
    let mut word = [0u8; ABI_WORD_BYTES];
    word[ABI_WORD_BYTES - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

#[cfg(test)]
mod tests {
    use sealedbook_types::{AccountType, Direction, Order, OrderSide};

    use super::*;

    fn nvda_order() -> Order {
        Order {
            ticker_symbol: "NVDA".to_string(),
            side: OrderSide::Buy,
            account_type: AccountType::Institutional,
            quantity: 1550,
            price: 445,
            time_in_force: 1_692_741_126_000,
            direction: Direction::Long,
        }
    }

    /// Reference encoding produced by the original deployment's ABI coder
    /// for the NVDA tuple. Byte-for-byte compatibility is the contract.
    const NVDA_ENCODING_HEX: &str = concat!(
        "00000000000000000000000000000000000000000000000000000000000000e0",
        "0000000000000000000000000000000000000000000000000000000000000120",
        "0000000000000000000000000000000000000000000000000000000000000160",
        "000000000000000000000000000000000000000000000000000000000000060e",
        "00000000000000000000000000000000000000000000000000000000000001bd",
        "0000000000000000000000000000000000000000000000000000018a1f3bc770",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000004",
        "4e56444100000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000003",
        "4255590000000000000000000000000000000000000000000000000000000000",
        "000000000000000000000000000000000000000000000000000000000000000d",
        "494e535449545554494f4e414c00000000000000000000000000000000000000",
    );

    #[test]
    fn nvda_encoding_matches_reference() {
        let encoded = encode_order(&nvda_order());
        assert_eq!(encoded.len(), 13 * 32);
        assert_eq!(hex::encode(&encoded), NVDA_ENCODING_HEX);
    }

    #[test]
    fn head_is_seven_words() {
        let encoded = encode_order(&nvda_order());
        // First three head words are tail offsets: 224, 288, 352.
        assert_eq!(&encoded[..32], &uint_word(224));
        assert_eq!(&encoded[32..64], &uint_word(288));
        assert_eq!(&encoded[64..96], &uint_word(352));
        // Integer head words follow in tuple order.
        assert_eq!(&encoded[96..128], &uint_word(1550));
        assert_eq!(&encoded[128..160], &uint_word(445));
        assert_eq!(&encoded[160..192], &uint_word(1_692_741_126_000));
        assert_eq!(&encoded[192..224], &uint_word(0));
    }

    #[test]
    fn string_tail_is_length_tagged_and_padded() {
        let encoded = encode_order(&nvda_order());
        // Ticker tail at offset 224: length word 4, then "NVDA" zero-padded.
        assert_eq!(&encoded[224..256], &uint_word(4));
        assert_eq!(&encoded[256..260], b"NVDA");
        assert!(encoded[260..288].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_string_tail_is_only_length_word() {
        let mut enc = TupleEncoder::new();
        enc.push_str("");
        let encoded = enc.finish();
        // One head word (offset 32) + one zero length word, no data words.
        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[..32], &uint_word(32));
        assert_eq!(&encoded[32..], &uint_word(0));
    }

    #[test]
    fn word_boundary_string_gets_no_extra_padding() {
        let ticker = "A".repeat(32);
        let mut enc = TupleEncoder::new();
        enc.push_str(&ticker);
        let encoded = enc.finish();
        // Head word + length word + exactly one data word.
        assert_eq!(encoded.len(), 96);
        assert_eq!(&encoded[32..64], &uint_word(32));
        assert_eq!(&encoded[64..], ticker.as_bytes());
    }

    #[test]
    fn thirty_three_byte_string_pads_to_two_words() {
        let ticker = "B".repeat(33);
        let mut enc = TupleEncoder::new();
        enc.push_str(&ticker);
        let encoded = enc.finish();
        assert_eq!(encoded.len(), 32 + 32 + 64);
        assert_eq!(&encoded[32..64], &uint_word(33));
        assert_eq!(&encoded[64..97], ticker.as_bytes());
        assert!(encoded[97..].iter().all(|&b| b == 0));
    }

    #[test]
    fn encoding_is_deterministic() {
        let order = nvda_order();
        assert_eq!(encode_order(&order), encode_order(&order));
    }

    #[test]
    fn direction_enters_by_ordinal_not_name() {
        let long = nvda_order();
        let mut short = nvda_order();
        short.direction = Direction::Short;

        let enc_long = encode_order(&long);
        let enc_short = encode_order(&short);
        // Same length: only the direction head word differs.
        assert_eq!(enc_long.len(), enc_short.len());
        assert_eq!(&enc_short[192..224], &uint_word(1));
        assert_eq!(&enc_long[..192], &enc_short[..192]);
        assert_eq!(&enc_long[224..], &enc_short[224..]);
    }

    #[test]
    fn side_enters_by_name() {
        let mut sell = nvda_order();
        sell.side = OrderSide::Sell;
        let encoded = encode_order(&sell);
        // Side tail at offset 288: length 4, "SELL".
        assert_eq!(&encoded[288..320], &uint_word(4));
        assert_eq!(&encoded[320..324], b"SELL");
    }
}
