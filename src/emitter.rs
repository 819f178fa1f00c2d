use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Picks the stream for the 0-based line `index`.
    ///
    /// With an interleave of `k > 0` the last line of every block of `k`
    /// goes to stderr, everything else to stdout. An interleave of 0 keeps
    /// every line on stdout.
    pub fn select(index: u64, interleave: u32) -> Self {
        let interleave = u64::from(interleave);
        if interleave != 0 && index % interleave == interleave - 1 {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }
}

/// Number of lines written to each stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitStats {
    pub stdout: u64,
    pub stderr: u64,
}

impl EmitStats {
    pub fn total(&self) -> u64 {
        self.stdout + self.stderr
    }
}

/// Writes lines to a pair of buffered sinks standing for stdout and stderr.
pub struct Emitter<O: Write, E: Write> {
    stdout: BufWriter<O>,
    stderr: BufWriter<E>,
    buffer: Vec<u8>,
    stats: EmitStats,
}

impl<O: Write, E: Write> Emitter<O, E> {
    pub fn new(stdout: O, stderr: E) -> Self {
        Self {
            stdout: BufWriter::new(stdout),
            stderr: BufWriter::new(stderr),
            buffer: Vec::new(),
            stats: EmitStats::default(),
        }
    }

    /// Writes `line` followed by a newline to `stream` in a single write.
    pub fn emit(&mut self, stream: Stream, line: &str) -> io::Result<()> {
        self.buffer.clear();
        self.buffer.extend_from_slice(line.as_bytes());
        self.buffer.push(b'\n');

        match stream {
            Stream::Stdout => {
                self.stdout.write_all(&self.buffer)?;
                self.stats.stdout += 1;
            }
            Stream::Stderr => {
                // Pending stdout lines go out first so a merged stream keeps
                // loop order. Each stderr line is flushed as it is written.
                self.stdout.flush()?;
                self.stderr.write_all(&self.buffer)?;
                self.stderr.flush()?;
                self.stats.stderr += 1;
            }
        }
        Ok(())
    }

    /// Flushes both sinks and returns the per-stream line counts.
    pub fn finish(mut self) -> io::Result<EmitStats> {
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(self.stats)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn select_without_interleave() {
        for index in 0..100 {
            assert_eq!(Stream::select(index, 0), Stream::Stdout);
        }
    }

    #[test]
    fn select_every_fourth() {
        let stderr: Vec<u64> = (0..12)
            .filter(|index| Stream::select(*index, 4) == Stream::Stderr)
            .collect();
        assert_eq!(stderr, vec![3, 7, 11]);
    }

    #[test]
    fn select_one_per_block() {
        for interleave in [1u32, 2, 3, 7, 10] {
            let k = u64::from(interleave);
            for block in 0..5u64 {
                let count = (block * k..(block + 1) * k)
                    .filter(|index| Stream::select(*index, interleave) == Stream::Stderr)
                    .count();
                assert_eq!(count, 1);
                assert_eq!(
                    Stream::select(block * k + k - 1, interleave),
                    Stream::Stderr
                );
            }
        }
    }

    #[test]
    fn select_interleave_of_one() {
        for index in 0..10 {
            assert_eq!(Stream::select(index, 1), Stream::Stderr);
        }
    }

    #[test]
    fn emit_routes_lines() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut emitter = Emitter::new(&mut out, &mut err);
        emitter.emit(Stream::Stdout, "one").unwrap();
        emitter.emit(Stream::Stderr, "two").unwrap();
        emitter.emit(Stream::Stdout, "three").unwrap();
        let stats = emitter.finish().unwrap();

        assert_eq!(out, b"one\nthree\n");
        assert_eq!(err, b"two\n");
        assert_eq!(stats, EmitStats { stdout: 2, stderr: 1 });
        assert_eq!(stats.total(), 3);
    }

    // Both streams appending to one buffer, like `2>&1`.
    #[derive(Clone, Default)]
    struct Merged(Rc<RefCell<Vec<u8>>>);

    impl Write for Merged {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn merged_streams_keep_order() {
        let merged = Merged::default();
        let mut emitter = Emitter::new(merged.clone(), merged.clone());
        for index in 0..12u64 {
            let line = (index + 1).to_string();
            emitter.emit(Stream::select(index, 4), &line).unwrap();
        }
        emitter.finish().unwrap();

        let output = String::from_utf8(merged.0.borrow().clone()).unwrap();
        let numbers: Vec<&str> = output.lines().collect();
        assert_eq!(
            numbers,
            vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_failure() {
        let mut emitter = Emitter::new(Vec::new(), BrokenPipe);
        let err = emitter.emit(Stream::Stderr, "line").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut emitter = Emitter::new(BrokenPipe, Vec::new());
        emitter.emit(Stream::Stdout, "line").unwrap();
        let err = emitter.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
