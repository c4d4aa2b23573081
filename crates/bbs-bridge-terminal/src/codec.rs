//! Big5 on the wire, UTF-8 everywhere else.

use encoding_rs::{BIG5, CoderResult, Decoder, EncoderResult};

/// Streaming Big5 decoder.
///
/// A multi-byte sequence split across two chunks is held back and completed
/// by the next [`feed`](Self::feed); it is never surfaced as an error.
pub struct Big5Decoder {
    decoder: Decoder,
}

impl Big5Decoder {
    pub fn new() -> Self {
        Self {
            decoder: BIG5.new_decoder(),
        }
    }

    pub fn feed(&mut self, chunk: &[u8]) -> String {
        let mut out = String::new();
        let mut input = chunk;
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(input.len())
                .unwrap_or(input.len() * 3 + 4);
            out.reserve(needed);

            let (result, read, _) = self.decoder.decode_to_string(input, &mut out, false);
            input = &input[read..];
            if let CoderResult::InputEmpty = result {
                return out;
            }
        }
    }

    /// Drop any held-back partial sequence.
    pub fn reset(&mut self) {
        self.decoder = BIG5.new_decoder();
    }
}

impl Default for Big5Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `text` as Big5; characters with no Big5 mapping become `?`.
pub fn encode_big5(text: &str) -> Vec<u8> {
    let mut encoder = BIG5.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut input = text;
    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(input.len())
            .unwrap_or(input.len() * 2 + 4);
        out.reserve(needed);

        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(input, &mut out, true);
        input = &input[read..];
        match result {
            EncoderResult::InputEmpty => return out,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => out.push(b'?'),
        }
    }
}
