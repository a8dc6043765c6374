use colored::control::ShouldColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink that can be cloned and inspected after being handed out
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().map(|bytes| bytes.is_empty()).unwrap_or(true)
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        if let Ok(mut bytes) = self.inner.lock() {
            bytes.clear();
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output buffer poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output destination of a command run, with terminal detection
pub struct IoStreams {
    out: Box<dyn Write + Send>,
    err_out: Box<dyn Write + Send>,
    stdout_tty: bool,
    stderr_tty: bool,
    color_enabled: bool,
}

impl IoStreams {
    /// Streams bound to the process stdout/stderr.
    /// Color follows `colored`'s CLICOLOR/NO_COLOR/CLICOLOR_FORCE rules.
    pub fn system() -> Self {
        Self {
            out: Box::new(io::stdout()),
            err_out: Box::new(io::stderr()),
            stdout_tty: io::stdout().is_terminal(),
            stderr_tty: io::stderr().is_terminal(),
            color_enabled: ShouldColorize::from_env().should_colorize(),
        }
    }

    /// Streams backed by memory; returns handles to stdout and stderr.
    /// Every stream starts out as a non-terminal with color disabled.
    pub fn test() -> (Self, SharedBuffer, SharedBuffer) {
        let stdout = SharedBuffer::new();
        let stderr = SharedBuffer::new();

        let ios = Self {
            out: Box::new(stdout.clone()),
            err_out: Box::new(stderr.clone()),
            stdout_tty: false,
            stderr_tty: false,
            color_enabled: false,
        };

        (ios, stdout, stderr)
    }

    pub fn is_stdout_tty(&self) -> bool {
        self.stdout_tty
    }

    pub fn is_stderr_tty(&self) -> bool {
        self.stderr_tty
    }

    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn set_stdout_tty(&mut self, is_tty: bool) {
        self.stdout_tty = is_tty;
    }

    pub fn set_stderr_tty(&mut self, is_tty: bool) {
        self.stderr_tty = is_tty;
    }

    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.color_enabled = enabled;
    }

    /// Writer for regular output
    pub fn out(&mut self) -> &mut (dyn Write + Send) {
        self.out.as_mut()
    }

    /// Writer for diagnostics
    pub fn err_out(&mut self) -> &mut (dyn Write + Send) {
        self.err_out.as_mut()
    }
}

impl std::fmt::Debug for IoStreams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoStreams")
            .field("stdout_tty", &self.stdout_tty)
            .field("stderr_tty", &self.stderr_tty)
            .field("color_enabled", &self.color_enabled)
            .finish_non_exhaustive()
    }
}
