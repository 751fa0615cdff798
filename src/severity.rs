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
use std::fmt;

use crate::Level;

/// A severity accepted by the legacy [`Logger::add`](crate::Logger::add) entry point.
///
/// The well-known variants mirror the severity constants of classic line loggers. Anything else
/// is carried as text and resolved by name; see [`Severity::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Severity<'a> {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Unknown,
    Named(Cow<'a, str>),
}

impl Severity<'_> {
    /// Resolve this severity to the level it logs at.
    ///
    /// `Fatal` logs at [`Level::Error`]. A `Named` severity logs at the level with that name
    /// (ignoring case, `fatal` included). Everything else, `Unknown` among them, falls back to
    /// [`Level::Trace`].
    pub fn resolve(&self) -> Level {
        match self {
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error | Severity::Fatal => Level::Error,
            Severity::Unknown => Level::Trace,
            Severity::Named(name) => Level::from_name(name).unwrap_or(Level::Trace),
        }
    }

    /// Borrow this severity without cloning a named one.
    pub fn by_ref(&self) -> Severity<'_> {
        match self {
            Severity::Debug => Severity::Debug,
            Severity::Info => Severity::Info,
            Severity::Warn => Severity::Warn,
            Severity::Error => Severity::Error,
            Severity::Fatal => Severity::Fatal,
            Severity::Unknown => Severity::Unknown,
            Severity::Named(name) => Severity::Named(Cow::Borrowed(&**name)),
        }
    }

    /// Take ownership of a named severity's text.
    pub fn into_owned(self) -> Severity<'static> {
        match self {
            Severity::Debug => Severity::Debug,
            Severity::Info => Severity::Info,
            Severity::Warn => Severity::Warn,
            Severity::Error => Severity::Error,
            Severity::Fatal => Severity::Fatal,
            Severity::Unknown => Severity::Unknown,
            Severity::Named(name) => Severity::Named(Cow::Owned(name.into_owned())),
        }
    }
}

impl fmt::Display for Severity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Unknown => "UNKNOWN",
            Severity::Named(name) => &**name,
        };
        f.pad(name)
    }
}

impl From<Level> for Severity<'_> {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => Severity::Named(Cow::Borrowed("trace")),
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warn => Severity::Warn,
            Level::Error => Severity::Error,
        }
    }
}

/// Legacy numeric severity codes: 0 debug, 1 info, 2 warn, 3 error, 4 fatal, 5 unknown.
impl From<u8> for Severity<'_> {
    fn from(code: u8) -> Self {
        match code {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            4 => Severity::Fatal,
            5 => Severity::Unknown,
            n => Severity::Named(Cow::Owned(n.to_string())),
        }
    }
}

impl<'a> From<&'a str> for Severity<'a> {
    fn from(name: &'a str) -> Self {
        Severity::Named(Cow::Borrowed(name))
    }
}

impl From<String> for Severity<'_> {
    fn from(name: String) -> Self {
        Severity::Named(Cow::Owned(name))
    }
}
