// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Exceptions attached to log messages.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Write;
use std::sync::Arc;

/// The message used when an exception is logged without one.
pub const DEFAULT_MESSAGE: &str = "Exception:";

/// An exception that can be logged together with a message.
#[derive(Debug, Clone)]
pub enum Exception {
    /// A wrapper around a native error. The cause is handed to the backend as-is so that it can
    /// render it in its own way.
    Native(Arc<dyn StdError + Send + Sync + 'static>),
    /// An exception described by its type name, message and stack frames. It is rendered to text
    /// before reaching the backend.
    Plain(ExceptionRecord),
}

impl Exception {
    /// Wrap a native error, to be passed to the backend as a structured cause.
    pub fn native(cause: impl StdError + Send + Sync + 'static) -> Self {
        Exception::Native(Arc::new(cause))
    }

    /// Describe `err` as a plain exception record named after its type.
    ///
    /// The record has no frames; add them with [`ExceptionRecord::with_frames`] or
    /// [`ExceptionRecord::with_backtrace`].
    pub fn from_error<E: StdError>(err: &E) -> Self {
        Exception::Plain(ExceptionRecord::from_error(err))
    }

    /// Describe a type-erased error as a plain exception record with the given type name.
    pub fn from_dyn_error(type_name: impl Into<String>, err: &dyn StdError) -> Self {
        Exception::Plain(ExceptionRecord::from_dyn_error(type_name, err))
    }
}

impl From<ExceptionRecord> for Exception {
    fn from(record: ExceptionRecord) -> Self {
        Exception::Plain(record)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exception::Native(cause) => write!(f, "{cause}"),
            Exception::Plain(record) => write!(f, "{record}"),
        }
    }
}

/// A type name, a message, and an ordered list of stack frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRecord {
    type_name: String,
    message: String,
    frames: Vec<String>,
}

impl ExceptionRecord {
    /// Create a record with no frames.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            frames: vec![],
        }
    }

    /// Create a record from an error value, using its type path as the type name.
    ///
    /// `E` must be a concrete type. A `dyn Error` has no type path of its own; describe it with
    /// [`ExceptionRecord::from_dyn_error`] instead.
    pub fn from_error<E: StdError>(err: &E) -> Self {
        Self::new(std::any::type_name::<E>(), err.to_string())
    }

    /// Create a record from a type-erased error, naming its type explicitly.
    pub fn from_dyn_error(type_name: impl Into<String>, err: &dyn StdError) -> Self {
        Self::new(type_name, err.to_string())
    }

    /// Append stack frames, in call order from the innermost frame.
    pub fn with_frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames.extend(frames.into_iter().map(Into::into));
        self
    }

    /// Append the lines of a captured backtrace as frames.
    ///
    /// A backtrace that was not captured contributes its status line (e.g. "disabled backtrace").
    pub fn with_backtrace(self, backtrace: &Backtrace) -> Self {
        let rendered = backtrace.to_string();
        self.with_frames(
            rendered
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned),
        )
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Render `message` followed by this exception as one block of text.
    ///
    /// The layout is the message, then `<type>: <message>`, then one tab-indented line per frame.
    /// Every line ends with a newline except the leading message.
    pub fn render(&self, message: &str) -> String {
        let frames_len: usize = self.frames.iter().map(|f| f.len() + 2).sum();
        let mut text = String::with_capacity(
            message.len() + self.type_name.len() + self.message.len() + frames_len + 4,
        );

        text.push_str(message);
        text.push('\n');
        let _ = writeln!(text, "{}: {}", self.type_name, self.message);
        for frame in &self.frames {
            text.push('\t');
            text.push_str(frame);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for ExceptionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}
