//! LZMA decompression.
//!
//! Single-shot decoder: the whole compressed stream is in memory, the
//! declared uncompressed size is known from the container, and the decode
//! either completes or aborts with a corruption error. No partial output
//! is ever returned.

use crate::model::{
    DIST_ALIGN_BITS, DIST_SLOT_BITS, END_POS_MODEL_INDEX, LEN_HIGH_BITS, LEN_LOW_BITS,
    LEN_MID_BITS, LEN_TO_POS_STATES, LengthModel, LzmaModel, LzmaProperties, MATCH_LEN_MIN, State,
};
use crate::range_coder::RangeDecoder;
use crate::window::Window;
use oxipak_core::error::{PakError, Result};

/// Distance value that marks the end of the stream.
const END_MARKER_DIST: u32 = 0xFFFF_FFFF;

/// Decode a match length (includes the implicit +2 base).
fn decode_length(
    rc: &mut RangeDecoder<'_>,
    len_model: &mut LengthModel,
    pos_state: usize,
) -> Result<usize> {
    let len = if rc.decode_bit(&mut len_model.choice)? == 0 {
        rc.decode_bit_tree(&mut len_model.low[pos_state], LEN_LOW_BITS)?
    } else if rc.decode_bit(&mut len_model.choice2)? == 0 {
        (1 << LEN_LOW_BITS) + rc.decode_bit_tree(&mut len_model.mid[pos_state], LEN_MID_BITS)?
    } else {
        (1 << LEN_LOW_BITS)
            + (1 << LEN_MID_BITS)
            + rc.decode_bit_tree(&mut len_model.high, LEN_HIGH_BITS)?
    };

    Ok(MATCH_LEN_MIN + len as usize)
}

/// LZMA decoder for one stream with a known uncompressed size.
pub struct LzmaDecoder<'a> {
    rc: RangeDecoder<'a>,
    model: LzmaModel,
    window: Window,
    state: State,
    rep: [u32; 4],
    unpack_size: usize,
}

impl<'a> LzmaDecoder<'a> {
    /// Create a decoder over a raw LZMA stream (range-coder prologue first).
    pub fn new(
        stream: &'a [u8],
        props: LzmaProperties,
        dict_size: u32,
        unpack_size: usize,
    ) -> Result<Self> {
        Ok(Self {
            rc: RangeDecoder::new(stream)?,
            model: LzmaModel::new(props),
            window: Window::new(dict_size, unpack_size),
            state: State::new(),
            rep: [0; 4],
            unpack_size,
        })
    }

    /// Decode one literal byte into the window.
    fn decode_literal(&mut self) -> Result<()> {
        let prev_byte = if self.window.is_empty() {
            0
        } else {
            self.window.get_byte(1)
        };

        let lit_state = self.model.literal.get_state(
            self.window.total_pos(),
            prev_byte,
            self.model.props.lc,
            self.model.props.lp,
        );
        let probs = &mut self.model.literal.probs[lit_state];

        let mut symbol = 1usize;

        if !self.state.is_literal() {
            // Matched-literal mode: branch the context on the byte at the
            // most recent match distance until the first disagreement.
            let mut match_byte = self.window.get_byte(self.rep[0] as usize + 1);

            while symbol < 0x100 {
                let match_bit = usize::from((match_byte >> 7) & 1);
                match_byte <<= 1;

                let bit = self.rc.decode_bit(&mut probs[((1 + match_bit) << 8) + symbol])?;
                symbol = (symbol << 1) | bit as usize;

                if match_bit != bit as usize {
                    break;
                }
            }
        }

        while symbol < 0x100 {
            let bit = self.rc.decode_bit(&mut probs[symbol])?;
            symbol = (symbol << 1) | bit as usize;
        }

        self.window.put_byte((symbol - 0x100) as u8);
        self.state.update_literal();
        Ok(())
    }

    /// Decode a match distance for the given (already +2-based) length.
    fn decode_distance(&mut self, len: usize) -> Result<u32> {
        let len_state = (len - MATCH_LEN_MIN).min(LEN_TO_POS_STATES - 1);

        let slot = self
            .rc
            .decode_bit_tree(&mut self.model.distance.slot[len_state], DIST_SLOT_BITS)?;
        if slot < 4 {
            return Ok(slot);
        }

        let num_direct_bits = (slot >> 1) - 1;
        let mut dist = (2 | (slot & 1)) << num_direct_bits;

        if (slot as usize) < END_POS_MODEL_INDEX {
            // Slots 4..14 take their low bits from the shared position
            // array; each slot owns a disjoint region starting at
            // dist - slot.
            let base = dist as usize - slot as usize;
            dist += self
                .rc
                .decode_bit_tree_reverse(&mut self.model.distance.special[base..], num_direct_bits)?;
        } else {
            dist = dist.wrapping_add(
                self.rc
                    .decode_direct_bits(num_direct_bits - DIST_ALIGN_BITS)?
                    << DIST_ALIGN_BITS,
            );
            dist = dist.wrapping_add(
                self.rc
                    .decode_bit_tree_reverse(&mut self.model.distance.align, DIST_ALIGN_BITS)?,
            );
        }

        Ok(dist)
    }

    /// Validate a match against the produced history, then copy it.
    fn copy_match(&mut self, len: usize) -> Result<()> {
        let dist = self.rep[0] as usize + 1;

        if self.rep[0] as usize >= self.window.capacity() || !self.window.check_distance(dist) {
            return Err(PakError::invalid_distance(
                u64::from(self.rep[0]),
                self.window.total_pos(),
            ));
        }

        let remaining = self.unpack_size - self.window.total_pos() as usize;
        if len > remaining {
            return Err(PakError::corrupted(
                self.window.total_pos(),
                "match length exceeds declared uncompressed size",
            ));
        }

        self.window.copy_match(dist, len);
        Ok(())
    }

    /// Run the decode loop until the declared size is produced.
    ///
    /// On success the output buffer's ownership transfers to the caller;
    /// on any failure every table and the window are torn down before the
    /// error propagates.
    pub fn decompress(mut self) -> Result<Vec<u8>> {
        while (self.window.total_pos() as usize) < self.unpack_size {
            let pos_state =
                self.window.total_pos() as usize & (self.model.props.num_pos_states() - 1);
            let state_idx = self.state.value();

            if self
                .rc
                .decode_bit(&mut self.model.is_match[state_idx][pos_state])?
                == 0
            {
                self.decode_literal()?;
                continue;
            }

            let len = if self.rc.decode_bit(&mut self.model.is_rep[state_idx])? == 0 {
                // New match: length first, then a freshly decoded distance.
                let len = decode_length(&mut self.rc, &mut self.model.match_len, pos_state)?;
                self.rep[3] = self.rep[2];
                self.rep[2] = self.rep[1];
                self.rep[1] = self.rep[0];

                let dist = self.decode_distance(len)?;
                if dist == END_MARKER_DIST {
                    return Err(PakError::corrupted(
                        self.window.total_pos(),
                        "end marker before declared uncompressed size",
                    ));
                }

                self.rep[0] = dist;
                self.state.update_match();
                len
            } else if self.rc.decode_bit(&mut self.model.is_rep_g0[state_idx])? == 0 {
                if self
                    .rc
                    .decode_bit(&mut self.model.is_rep0_long[state_idx][pos_state])?
                    == 0
                {
                    // Short rep: a single byte at the most recent distance.
                    let dist = self.rep[0] as usize + 1;
                    if !self.window.check_distance(dist) {
                        return Err(PakError::invalid_distance(
                            u64::from(self.rep[0]),
                            self.window.total_pos(),
                        ));
                    }
                    let byte = self.window.get_byte(dist);
                    self.window.put_byte(byte);
                    self.state.update_short_rep();
                    continue;
                }

                self.state.update_long_rep();
                decode_length(&mut self.rc, &mut self.model.rep_len, pos_state)?
            } else {
                // Promote one of the cached distances to rep0 (MRU rotation).
                if self.rc.decode_bit(&mut self.model.is_rep_g1[state_idx])? == 0 {
                    self.rep.swap(0, 1);
                } else if self.rc.decode_bit(&mut self.model.is_rep_g2[state_idx])? == 0 {
                    let dist = self.rep[2];
                    self.rep[2] = self.rep[1];
                    self.rep[1] = self.rep[0];
                    self.rep[0] = dist;
                } else {
                    let dist = self.rep[3];
                    self.rep[3] = self.rep[2];
                    self.rep[2] = self.rep[1];
                    self.rep[1] = self.rep[0];
                    self.rep[0] = dist;
                }

                self.state.update_long_rep();
                decode_length(&mut self.rc, &mut self.model.rep_len, pos_state)?
            };

            if self.rc.is_corrupted() {
                return Err(PakError::corrupted(
                    self.window.total_pos(),
                    "range decoder invariant violated",
                ));
            }

            self.copy_match(len)?;
        }

        Ok(self.window.into_output())
    }
}

/// Decompress a raw LZMA stream with known parameters and size.
pub fn decompress_raw(
    stream: &[u8],
    props: LzmaProperties,
    dict_size: u32,
    unpack_size: usize,
) -> Result<Vec<u8>> {
    LzmaDecoder::new(stream, props, dict_size, unpack_size)?.decompress()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output() {
        // Five prologue bytes, nothing to produce.
        let stream = [0x00, 0x12, 0x34, 0x56, 0x78];
        let props = LzmaProperties::new(3, 0, 2);
        let out = decompress_raw(&stream, props, 4096, 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_match_before_any_output_is_rejected() {
        // An initial code of 0x8000_0000 forces the first is-match bit to 1,
        // so the stream claims a match while the window is still empty.
        let mut stream = vec![0x00, 0x80, 0x00, 0x00, 0x00];
        stream.extend_from_slice(&[0x00; 30]);

        let props = LzmaProperties::new(3, 0, 2);
        let err = decompress_raw(&stream, props, 4096, 100).unwrap_err();
        assert!(matches!(err, PakError::InvalidDistance { distance: 0, .. }));
    }

    #[test]
    fn test_truncated_stream() {
        let stream = [0x00, 0x12, 0x34, 0x56];
        let props = LzmaProperties::new(3, 0, 2);
        let err = decompress_raw(&stream, props, 4096, 16).unwrap_err();
        assert!(matches!(err, PakError::UnexpectedEof { .. }));
    }
}
