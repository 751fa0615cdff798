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

use crate::Logger;
use crate::backend::Backend;
use crate::backend::LogCrate;
use crate::name::Name;
use crate::name::normalize;

/// Creates [`Logger`]s from a [`Backend`].
///
/// Loggers are not cached: every call returns a new facade. Facades created for the same name
/// share whatever the backend returns for that name and behave the same.
#[derive(Debug, Clone)]
pub struct LoggerFactory<B> {
    backend: B,
}

impl<B: Backend> LoggerFactory<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Create a logger for `name`, normalized with [`normalize`].
    ///
    /// # Errors
    ///
    /// Returns the backend's error, unchanged, if it cannot provide a logger for the name.
    pub fn create<'a>(&self, name: impl Into<Name<'a>>) -> Result<Logger, B::Error> {
        let name = normalize(name);
        let handle = self.backend.get_logger(&name)?;
        Ok(Logger::new(name, handle))
    }
}

impl Default for LoggerFactory<LogCrate> {
    fn default() -> Self {
        Self::new(LogCrate::new())
    }
}

/// Create a logger for `name` over the global [`log`] crate logger.
///
/// # Examples
///
/// ```
/// let log = logshim::logger("my.app.logger");
/// log.info("Hello World!");
/// ```
pub fn logger<'a>(name: impl Into<Name<'a>>) -> Logger {
    let Ok(logger) = LoggerFactory::default().create(name);
    logger
}

/// Create a logger named after the current module, over the global [`log`] crate logger.
///
/// # Examples
///
/// ```
/// let log = logshim::logger!();
/// log.debug_with(|| format!("expensive: {}", 6 * 7));
/// ```
#[macro_export]
macro_rules! logger {
    () => {
        $crate::logger($crate::name::Name::module(::core::module_path!()))
    };
}
