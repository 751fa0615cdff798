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

//! Logging backends a [`Logger`](crate::Logger) delegates to.
//!
//! A backend owns named loggers, decides which levels are enabled for each of them, and emits
//! messages. Its configuration (appenders, filters, sinks) is entirely its own business.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::Level;

mod log_crate;
mod testing;

pub use self::log_crate::LogCrate;
pub use self::testing::Captured;
pub use self::testing::Testing;

/// A source of named backend loggers.
pub trait Backend: fmt::Debug + Send + Sync {
    /// The error returned when a logger cannot be obtained.
    type Error;

    /// Obtain the backend logger for `name`, creating it if needed.
    ///
    /// Backends are expected to deduplicate loggers by name themselves.
    fn get_logger(&self, name: &str) -> Result<Arc<dyn Handle>, Self::Error>;
}

/// A named backend logger.
///
/// Handles are shared between facades and threads, so every method must be safe to call
/// concurrently.
pub trait Handle: fmt::Debug + Send + Sync + 'static {
    /// Whether messages at `level` are enabled for this logger.
    fn enabled(&self, level: Level) -> bool;

    /// Emit a plain text message.
    fn log(&self, level: Level, message: &str);

    /// Emit a message together with a structured cause.
    fn log_cause(&self, level: Level, message: &str, cause: &(dyn StdError + 'static));
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    type Error = B::Error;

    fn get_logger(&self, name: &str) -> Result<Arc<dyn Handle>, Self::Error> {
        (**self).get_logger(name)
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    type Error = B::Error;

    fn get_logger(&self, name: &str) -> Result<Arc<dyn Handle>, Self::Error> {
        (**self).get_logger(name)
    }
}
