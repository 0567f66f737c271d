//! Logger writing formatted lines to any `io::Write`.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::error::LogResult;
use crate::logger::{Arg, Cause, Logger};
use crate::sink::format::{write_record, LineFormat};
use crate::sink::{Level, LevelHandle};

/// A writer shared by every logger handed out by one factory.
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

pub fn shared_writer(writer: impl Write + Send + 'static) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// Named logger over a [`SharedWriter`], filtered by a [`LevelHandle`].
pub struct WriterLogger {
    name: Arc<str>,
    level: LevelHandle,
    format: LineFormat,
    out: SharedWriter,
}

impl WriterLogger {
    pub fn new(name: &str, level: LevelHandle, format: LineFormat, out: SharedWriter) -> Self {
        Self {
            name: Arc::from(name),
            level,
            format,
            out,
        }
    }

    fn emit(
        &self,
        level: Level,
        message: &str,
        cause: Option<Cause<'_>>,
        args: &[Arg<'_>],
    ) -> LogResult<()> {
        if !self.level.allows(level) {
            return Ok(());
        }
        // A panic mid-write leaves at worst a partial line; the writer itself is fine.
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        write_record(&mut **out, self.format, &self.name, level, message, cause, args)?;
        out.flush()?;
        Ok(())
    }
}

impl Logger for WriterLogger {
    fn error(&self, message: &str, cause: Option<Cause<'_>>, args: &[Arg<'_>]) -> LogResult<()> {
        self.emit(Level::Error, message, cause, args)
    }

    fn info(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.emit(Level::Info, message, None, args)
    }

    fn warn(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.emit(Level::Warn, message, None, args)
    }

    fn debug(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.emit(Level::Debug, message, None, args)
    }

    fn trace(&self, message: &str, args: &[Arg<'_>]) -> LogResult<()> {
        self.emit(Level::Trace, message, None, args)
    }

    fn is_debug_enabled(&self) -> bool {
        self.level.allows(Level::Debug)
    }

    fn is_trace_enabled(&self) -> bool {
        self.level.allows(Level::Trace)
    }
}

impl fmt::Debug for WriterLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterLogger")
            .field("name", &self.name)
            .field("level", &self.level.get())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes).unwrap().lines().map(String::from).collect()
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_threshold_filters_records() {
        let buffer = Buffer::default();
        let level = LevelHandle::new(Level::Info);
        let out = shared_writer(buffer.clone());
        let logger = WriterLogger::new("app", level.clone(), LineFormat::Plain, out);

        logger.info("kept", &[]).unwrap();
        logger.debug("dropped", &[]).unwrap();
        assert!(!logger.is_debug_enabled());

        level.set(Level::Debug);
        assert!(logger.is_debug_enabled());
        assert!(!logger.is_trace_enabled());
        logger.debug("now kept", &[]).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO  app - kept"));
        assert!(lines[1].ends_with("DEBUG app - now kept"));
    }

    #[test]
    fn test_write_failure_is_returned() {
        let out = shared_writer(BrokenPipe);
        let logger = WriterLogger::new("app", LevelHandle::default(), LineFormat::Plain, out);

        let err = logger.warn("lost", &[]).unwrap_err();
        match err {
            crate::error::LogError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::BrokenPipe)
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
