//! Streams a chart to any byte sink, one row at a time.

use std::io::{self, BufWriter, StdoutLock, Write, stdout};

use crate::{
    core::{config::RenderConfig, error::HistError, histogram::Histogram},
    render::chart::render_lines,
};

pub struct Renderer<W: Write> {
    out: BufWriter<W>,
}

impl Renderer<StdoutLock<'static>> {
    /// Renderer bound to the process-wide locked stdout.
    #[inline]
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(stdout().lock())
    }
}

impl<W: Write> Renderer<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Write each chart line followed by `\n` as it is produced. Memory use
    /// does not grow with the row count.
    ///
    /// A reader that hangs up early (`BrokenPipe`) is not an error.
    ///
    /// # Errors
    /// [`HistError::Io`] for any other write failure.
    pub fn render(&mut self, hist: &Histogram, cfg: &RenderConfig) -> Result<(), HistError> {
        match self.write_chart(hist, cfg) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other.map_err(HistError::from),
        }
    }

    fn write_chart(&mut self, hist: &Histogram, cfg: &RenderConfig) -> io::Result<()> {
        for line in render_lines(hist, cfg) {
            self.out.write_all(line.as_bytes())?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }

    /// Flush and hand back the sink.
    ///
    /// # Errors
    /// [`HistError::Io`] when the final flush fails.
    pub fn into_inner(self) -> Result<W, HistError> {
        self.out
            .into_inner()
            .map_err(|e| HistError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;
    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Full;
    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn frame_is_newline_terminated_lines() {
        let hist = Histogram::count(b"z");
        let cfg = RenderConfig::builder().rows(1).tick_stride(1).build().unwrap();
        let mut r = Renderer::new(Vec::new());
        r.render(&hist, &cfg).unwrap();
        let text = String::from_utf8(r.into_inner().unwrap()).unwrap();
        let expected = format!(
            "0|{}*\n +--------------------------\n |abcdefghijklmnopqrstuvwxyz\n",
            " ".repeat(25)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn back_to_back_renders_repeat_the_chart() {
        let hist = Histogram::count(b"hello");
        let cfg = RenderConfig::default();
        let mut r = Renderer::new(Vec::new());
        r.render(&hist, &cfg).unwrap();
        r.render(&hist, &cfg).unwrap();
        let out = r.into_inner().unwrap();
        let (first, second) = out.split_at(out.len() / 2);
        assert_eq!(first, second);
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 24);
    }

    #[test]
    fn broken_pipe_is_swallowed() {
        let mut r = Renderer::new(ClosedPipe);
        assert!(r.render(&Histogram::default(), &RenderConfig::default()).is_ok());
    }

    #[test]
    fn other_write_errors_surface() {
        let mut r = Renderer::new(Full);
        let err = r
            .render(&Histogram::default(), &RenderConfig::default())
            .unwrap_err();
        assert!(matches!(err, HistError::Io(_)));
    }

    /// Accepts `room` bytes, then reports a closed pipe.
    struct ShortPipe {
        room: usize,
    }
    impl Write for ShortPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::ErrorKind::BrokenPipe.into());
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn huge_row_count_streams_until_reader_leaves() {
        let hist = Histogram::count(b"a");
        let cfg = RenderConfig::builder().rows(usize::MAX).build().unwrap();
        let mut r = Renderer::new(ShortPipe { room: 64 * 1024 });
        assert!(r.render(&hist, &cfg).is_ok());
    }
}
