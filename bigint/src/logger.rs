//! Level-tagged logging for bigint runs.
//!
//! Every message goes through a [MessageFormatter], which fills a format string like
//! `"[{time}] {level}: {message}"` with the current local time, the level tag and the message.
//! Loggers either collect formatted messages in memory ([BufferLogger]), append them to a file
//! ([FileLogger]), or both ([DoubleLogger]).

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const TIME_TAG: &str = "{time}";
const LEVEL_TAG: &str = "{level}";
const MESSAGE_TAG: &str = "{message}";

/// Format used when none is given.
pub const DEFAULT_LOG_FORMAT: &str = "{level}: {message}";

/// Severity of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Progress of a run.
    Info,
    /// Something worth noticing that did not stop the run.
    Warning,
    /// Something that went wrong.
    Error,
}

impl LogLevel {
    /// The tag substituted for `{level}`.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Renders log messages according to a format string.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    format: String,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FORMAT)
    }
}

impl MessageFormatter {
    /// Creates a formatter for `format`, which may contain the placeholders `{time}`,
    /// `{level}` and `{message}`.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Formats a message, terminated by a newline.
    ///
    /// Only the first occurrence of each placeholder is replaced.
    pub fn format(&self, message: &str, level: LogLevel) -> String {
        let mut formatted = self.format.clone();
        if formatted.contains(TIME_TAG) {
            let time = chrono::Local::now().format("%H:%M:%S").to_string();
            formatted = formatted.replacen(TIME_TAG, &time, 1);
        }
        formatted = formatted.replacen(LEVEL_TAG, level.tag(), 1);
        formatted = formatted.replacen(MESSAGE_TAG, message, 1);
        formatted.push('\n');
        formatted
    }
}

/// A sink for log messages.
pub trait Logger {
    /// Logs a message at a level.
    fn log(&mut self, message: &str, level: LogLevel) -> io::Result<()>;

    /// Logs a message at [Info](LogLevel::Info) level.
    fn info(&mut self, message: &str) -> io::Result<()> {
        self.log(message, LogLevel::Info)
    }

    /// Logs a message at [Warning](LogLevel::Warning) level.
    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.log(message, LogLevel::Warning)
    }

    /// Logs a message at [Error](LogLevel::Error) level.
    fn error(&mut self, message: &str) -> io::Result<()> {
        self.log(message, LogLevel::Error)
    }
}

/// Collects formatted messages in memory.
#[derive(Debug, Default)]
pub struct BufferLogger {
    formatter: MessageFormatter,
    buffer: String,
}

impl BufferLogger {
    /// Creates an empty buffer logger.
    pub fn new(formatter: MessageFormatter) -> Self {
        Self {
            formatter,
            buffer: String::new(),
        }
    }

    /// Everything logged so far.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Consumes the logger, returning everything logged.
    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Logger for BufferLogger {
    fn log(&mut self, message: &str, level: LogLevel) -> io::Result<()> {
        self.buffer
            .push_str(&self.formatter.format(message, level));
        Ok(())
    }
}

/// Appends formatted messages to a file.
#[derive(Debug)]
pub struct FileLogger {
    formatter: MessageFormatter,
    file: File,
}

impl FileLogger {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>, formatter: MessageFormatter) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { formatter, file })
    }
}

impl Logger for FileLogger {
    fn log(&mut self, message: &str, level: LogLevel) -> io::Result<()> {
        self.file
            .write_all(self.formatter.format(message, level).as_bytes())
    }
}

/// Logs to a buffer and, when configured, to a file as well.
#[derive(Debug)]
pub struct DoubleLogger {
    file: Option<FileLogger>,
    buffer: BufferLogger,
}

impl DoubleLogger {
    /// Creates a logger writing to a buffer, and to `log_file` if given.
    pub fn new<P: AsRef<Path>>(formatter: MessageFormatter, log_file: Option<P>) -> io::Result<Self> {
        let file = match log_file {
            Some(path) => Some(FileLogger::open(path, formatter.clone())?),
            None => None,
        };
        Ok(Self {
            file,
            buffer: BufferLogger::new(formatter),
        })
    }

    /// Everything logged to the buffer so far.
    pub fn output(&self) -> &str {
        self.buffer.output()
    }

    /// Consumes the logger, returning everything logged to the buffer.
    pub fn into_output(self) -> String {
        self.buffer.into_output()
    }
}

impl Logger for DoubleLogger {
    fn log(&mut self, message: &str, level: LogLevel) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.log(message, level)?;
        }
        self.buffer.log(message, level)
    }
}
