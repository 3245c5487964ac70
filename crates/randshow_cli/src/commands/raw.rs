//! Raw command implementation
//!
//! Streams native-width little-endian engine words as binary data, for
//! consumption by external statistical test suites such as PractRand
//! (`randshow raw --engine pcg32 | RNG_test stdin32`).

use std::io::{ErrorKind, Write};
use tracing::{debug, info};

use crate::engine::SelectedEngine;
use crate::Result;

/// Bytes produced per write.
const CHUNK_BYTES: usize = 64 * 1024;

/// Run the raw command
///
/// Writes `limit` bytes, or an unbounded stream when `limit` is `None`. A
/// closed pipe ends the stream normally. Returns the number of bytes written.
pub fn run<W: Write>(engine: &mut SelectedEngine, limit: Option<u64>, out: &mut W) -> Result<u64> {
    info!(word_bytes = engine.word_bytes(), ?limit, "streaming raw words");

    let mut buffer = Vec::with_capacity(CHUNK_BYTES + 8);
    let mut written: u64 = 0;

    loop {
        let want = match limit {
            Some(limit) if written >= limit => break,
            Some(limit) => (limit - written).min(CHUNK_BYTES as u64) as usize,
            None => CHUNK_BYTES,
        };

        buffer.clear();
        while buffer.len() < want {
            engine.push_native_word(&mut buffer);
        }
        buffer.truncate(want);

        match out.write_all(&buffer) {
            Ok(()) => written += want as u64,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!(written, "output closed");
                return Ok(written);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Err(e) = out.flush() {
        if e.kind() != ErrorKind::BrokenPipe {
            return Err(e.into());
        }
    }
    info!(written, "raw stream complete");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineKind;
    use randshow_core::{Pcg32, RandomEngine};
    use std::io;

    #[test]
    fn test_pcg32_stream_matches_engine_words() {
        let mut engine = SelectedEngine::new(EngineKind::Pcg32, Some(42));
        let mut out = Vec::new();
        let written = run(&mut engine, Some(12), &mut out).unwrap();
        assert_eq!(written, 12);

        let mut reference = Pcg32::from_seed(42);
        let expected: Vec<u8> = (0..3)
            .flat_map(|_| reference.next().to_le_bytes())
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_limit_cuts_partial_words() {
        let mut engine = SelectedEngine::new(EngineKind::Xoshiro256pp, Some(0));
        let mut out = Vec::new();
        run(&mut engine, Some(13), &mut out).unwrap();
        assert_eq!(out.len(), 13);
        assert_eq!(&out[..8], &54_585_288_996_988_985u64.to_le_bytes());
    }

    #[test]
    fn test_large_limit_spans_chunks() {
        let mut engine = SelectedEngine::new(EngineKind::Lcg, Some(9));
        let mut out = Vec::new();
        let limit = (CHUNK_BYTES * 2 + 5) as u64;
        assert_eq!(run(&mut engine, Some(limit), &mut out).unwrap(), limit);
        assert_eq!(out.len() as u64, limit);
    }

    #[test]
    fn test_broken_pipe_ends_stream() {
        struct ClosedAfter(usize);
        impl Write for ClosedAfter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if self.0 == 0 {
                    return Err(io::Error::new(ErrorKind::BrokenPipe, "closed"));
                }
                self.0 -= 1;
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut engine = SelectedEngine::new(EngineKind::Splitmix64, Some(1));
        let written = run(&mut engine, None, &mut ClosedAfter(3)).unwrap();
        assert_eq!(written, 3 * CHUNK_BYTES as u64);
    }
}
