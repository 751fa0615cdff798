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

use std::borrow::Cow;
use std::ops::Shl;
use std::sync::Arc;

use crate::Level;
use crate::Severity;
use crate::backend::Handle;
use crate::exception::DEFAULT_MESSAGE;
use crate::exception::Exception;
use crate::exception::ExceptionRecord;

/// What a level method was called with: a message, or an exception standing in for one.
#[derive(Debug, Clone)]
pub enum Payload<'a> {
    Text(Cow<'a, str>),
    /// Logged with the message `"Exception:"`.
    Exception(Cow<'a, Exception>),
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Payload::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Payload<'_> {
    fn from(text: String) -> Self {
        Payload::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Payload<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a Exception> for Payload<'a> {
    fn from(exception: &'a Exception) -> Self {
        Payload::Exception(Cow::Borrowed(exception))
    }
}

impl From<Exception> for Payload<'_> {
    fn from(exception: Exception) -> Self {
        Payload::Exception(Cow::Owned(exception))
    }
}

impl From<ExceptionRecord> for Payload<'_> {
    fn from(record: ExceptionRecord) -> Self {
        Payload::Exception(Cow::Owned(Exception::Plain(record)))
    }
}

/// A named logger facade over one backend logger.
///
/// Every level (`trace`, `debug`, `info`, `warn`, `error`, and `fatal` as an alias of `error`)
/// has the same family of methods, shown here for `info`:
///
/// ```
/// use logshim::LoggerFactory;
/// use logshim::backend::Testing;
/// use logshim::exception::Exception;
///
/// let logger = LoggerFactory::new(Testing::new()).create("my.app.Logger").unwrap();
/// let ex = Exception::native(std::io::Error::other("boom"));
///
/// logger.info_enabled(); // Is this level enabled for logging?
/// logger.info("message"); // Log message
/// logger.info_with(|| "message"); // Evaluate the closure if enabled and log its value
/// logger.info_ex("message", &ex); // Log message with exception message and frames
/// logger.info_ex_with(&ex, || "message"); // Same, evaluating the closure only if enabled
/// logger.info(&ex); // Log exception with the default "Exception:" message
/// ```
///
/// A message that ends up empty is not logged, and nothing reaches the backend for a disabled
/// level.
///
/// Exceptions come in two flavors. An [`Exception::Native`] is passed to the backend as a
/// structured cause next to the message. An [`Exception::Plain`] is rendered into the message
/// text with [`ExceptionRecord::render`].
///
/// The logger also offers the `add`/`log`/`<<` entry points of classic line loggers, driven by
/// a [`Severity`] rather than a [`Level`].
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    handle: Arc<dyn Handle>,
    level: Severity<'static>,
}

impl Logger {
    /// Wrap a backend logger. The compatibility severity starts at [`Severity::Info`].
    pub fn new(name: impl Into<String>, handle: Arc<dyn Handle>) -> Self {
        Self {
            name: name.into(),
            handle,
            level: Severity::Info,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying backend logger.
    pub fn handle(&self) -> &Arc<dyn Handle> {
        &self.handle
    }

    /// The severity used by [`Logger::append`] and the `<<` operator.
    pub fn level(&self) -> &Severity<'static> {
        &self.level
    }

    /// Change the severity used by [`Logger::append`] and the `<<` operator.
    ///
    /// A logger shared between threads cannot be changed in place; give each thread its own
    /// clone if they need different severities.
    pub fn set_level<'s>(&mut self, severity: impl Into<Severity<'s>>) {
        self.level = severity.into().into_owned();
    }

    /// Whether messages at `level` are enabled.
    pub fn enabled(&self, level: Level) -> bool {
        self.handle.enabled(level)
    }

    /// Log a message, or an exception with the message `"Exception:"`.
    pub fn log_at<'a>(&self, level: Level, payload: impl Into<Payload<'a>>) {
        match payload.into() {
            Payload::Text(text) => self.dispatch(level, Some(&*text), None, None::<fn() -> String>),
            Payload::Exception(exception) => self.dispatch(
                level,
                Some(DEFAULT_MESSAGE),
                Some(&*exception),
                None::<fn() -> String>,
            ),
        }
    }

    /// Log the message returned by `f`. `f` is only called when `level` is enabled.
    pub fn log_at_with<F, S>(&self, level: Level, f: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.dispatch(level, None, None, Some(f));
    }

    /// Log a message followed by an exception. An empty message logs nothing.
    pub fn log_ex(&self, level: Level, message: impl AsRef<str>, exception: &Exception) {
        let message = message.as_ref();
        if message.is_empty() || !self.enabled(level) {
            return;
        }

        match exception {
            Exception::Native(cause) => self.handle.log_cause(level, message, &**cause),
            Exception::Plain(record) => self.handle.log(level, &record.render(message)),
        }
    }

    /// Log the message returned by `f` followed by an exception. `f` is only called when `level`
    /// is enabled.
    pub fn log_ex_with<F, S>(&self, level: Level, exception: &Exception, f: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.dispatch(level, None, Some(exception), Some(f));
    }

    fn dispatch<F, S>(
        &self,
        level: Level,
        message: Option<&str>,
        exception: Option<&Exception>,
        deferred: Option<F>,
    ) where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let deferred_message: String;
        let mut message = message;
        if let Some(f) = deferred {
            if self.enabled(level) {
                deferred_message = f().into();
                message = Some(deferred_message.as_str());
            }
        }

        let Some(message) = message.filter(|m| !m.is_empty()) else {
            return;
        };

        match exception {
            Some(exception) => self.log_ex(level, message, exception),
            None if self.enabled(level) => self.handle.log(level, message),
            None => {}
        }
    }

    /// Log at the level `severity` resolves to, see [`Severity::resolve`].
    ///
    /// The logged text is `"<progname> - <message>"`, or whichever of the two is present. Nothing
    /// is logged when both are absent. Always returns `true`.
    pub fn add<'s>(
        &self,
        severity: impl Into<Severity<'s>>,
        message: Option<&str>,
        progname: Option<&str>,
    ) -> bool {
        self.add_inner(severity.into(), message, progname, None::<fn() -> String>)
    }

    /// Like [`Logger::add`], with the message produced by `f` only when the level is enabled.
    pub fn add_with<'s, F, S>(&self, severity: impl Into<Severity<'s>>, progname: Option<&str>, f: F) -> bool
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.add_inner(severity.into(), None, progname, Some(f))
    }

    /// Synonym for [`Logger::add`].
    pub fn log<'s>(
        &self,
        severity: impl Into<Severity<'s>>,
        message: Option<&str>,
        progname: Option<&str>,
    ) -> bool {
        self.add(severity, message, progname)
    }

    /// Synonym for [`Logger::add_with`].
    pub fn log_with<'s, F, S>(&self, severity: impl Into<Severity<'s>>, progname: Option<&str>, f: F) -> bool
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.add_with(severity, progname, f)
    }

    /// Log `message` at the current compatibility severity, see [`Logger::level`].
    pub fn append(&self, message: &str) -> bool {
        self.add(self.level.by_ref(), Some(message), None)
    }

    fn add_inner<F, S>(
        &self,
        severity: Severity<'_>,
        message: Option<&str>,
        progname: Option<&str>,
        deferred: Option<F>,
    ) -> bool
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let level = severity.resolve();
        if !self.enabled(level) {
            return true;
        }

        let deferred_message: String;
        let message = match (message, deferred) {
            (None, Some(f)) => {
                deferred_message = f().into();
                Some(deferred_message.as_str())
            }
            (message, _) => message,
        };

        let text = match (progname, message) {
            (Some(progname), Some(message)) => Cow::Owned(format!("{progname} - {message}")),
            (Some(only), None) | (None, Some(only)) => Cow::Borrowed(only),
            (None, None) => return true,
        };
        self.log_at(level, text);
        true
    }
}

/// `&logger << "message"` is [`Logger::append`]. Appends chain: `&logger << "a" << "b"`.
impl<'a, M: AsRef<str>> Shl<M> for &'a Logger {
    type Output = &'a Logger;

    fn shl(self, message: M) -> &'a Logger {
        self.append(message.as_ref());
        self
    }
}

macro_rules! level_methods {
    ($($level:ident $name:literal => $enabled:ident $log:ident $with:ident $ex:ident $ex_with:ident;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Whether `", $name, "` messages are enabled.")]
                pub fn $enabled(&self) -> bool {
                    self.enabled(Level::$level)
                }

                #[doc = concat!("Log a message, or an exception with the message `\"Exception:\"`, at `", $name, "`.")]
                pub fn $log<'a>(&self, payload: impl Into<Payload<'a>>) {
                    self.log_at(Level::$level, payload)
                }

                #[doc = concat!("Log the message returned by `f` at `", $name, "`. `f` is only called if `", $name, "` is enabled.")]
                pub fn $with<F, S>(&self, f: F)
                where
                    F: FnOnce() -> S,
                    S: Into<String>,
                {
                    self.log_at_with(Level::$level, f)
                }

                #[doc = concat!("Log a message followed by an exception at `", $name, "`.")]
                pub fn $ex(&self, message: impl AsRef<str>, exception: &Exception) {
                    self.log_ex(Level::$level, message, exception)
                }

                #[doc = concat!("Log the message returned by `f` followed by an exception at `", $name, "`. `f` is only called if `", $name, "` is enabled.")]
                pub fn $ex_with<F, S>(&self, exception: &Exception, f: F)
                where
                    F: FnOnce() -> S,
                    S: Into<String>,
                {
                    self.log_ex_with(Level::$level, exception, f)
                }
            )*
        }
    };
}

level_methods! {
    Trace "trace" => trace_enabled trace trace_with trace_ex trace_ex_with;
    Debug "debug" => debug_enabled debug debug_with debug_ex debug_ex_with;
    Info "info" => info_enabled info info_with info_ex info_ex_with;
    Warn "warn" => warn_enabled warn warn_with warn_ex warn_ex_with;
    Error "error" => error_enabled error error_with error_ex error_ex_with;
    // fatal is error under another name
    Error "fatal" => fatal_enabled fatal fatal_with fatal_ex fatal_ex_with;
}
