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

use std::error::Error as StdError;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Level;
use crate::backend::Backend;
use crate::backend::Handle;

/// A backend that records every emitted message in memory, for use in tests.
///
/// All levels start enabled. Clones share the same state, so a test can keep one clone to
/// inspect while a factory owns another.
///
/// # Examples
///
/// ```
/// use logshim::Level;
/// use logshim::LoggerFactory;
/// use logshim::backend::Testing;
///
/// let backend = Testing::new();
/// backend.disable(Level::Debug);
///
/// let logger = LoggerFactory::new(backend.clone()).create("app").unwrap();
/// logger.debug("dropped");
/// logger.info("kept");
///
/// let captured = backend.captured();
/// assert_eq!(captured.len(), 1);
/// assert_eq!(captured[0].message, "kept");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Testing {
    state: Arc<State>,
}

/// A message received by the [`Testing`] backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// The name of the logger that emitted the message.
    pub logger: String,
    pub level: Level,
    pub message: String,
    /// The rendered cause, for messages emitted with a structured cause.
    pub cause: Option<String>,
}

#[derive(Debug)]
struct State {
    enabled: [AtomicBool; 5],
    denied: Mutex<Vec<(String, Option<String>)>>,
    captured: Mutex<Vec<Captured>>,
    lookups: AtomicUsize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            enabled: std::array::from_fn(|_| AtomicBool::new(true)),
            denied: Mutex::default(),
            captured: Mutex::default(),
            lookups: AtomicUsize::new(0),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Testing {
    /// Create a backend with every level enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&self, level: Level) {
        self.state.enabled[level.index()].store(true, Ordering::Relaxed);
    }

    pub fn disable(&self, level: Level) {
        self.state.enabled[level.index()].store(false, Ordering::Relaxed);
    }

    /// Disable every level.
    pub fn disable_all(&self) {
        for level in Level::ALL {
            self.disable(level);
        }
    }

    /// Make lookups of `name` fail.
    pub fn deny(&self, name: impl Into<String>) {
        lock(&self.state.denied).push((name.into(), None));
    }

    /// Make lookups of `name` fail, with `reason` as the source of the returned error.
    pub fn deny_because(&self, name: impl Into<String>, reason: impl Into<String>) {
        lock(&self.state.denied).push((name.into(), Some(reason.into())));
    }

    /// The number of loggers handed out so far.
    pub fn lookups(&self) -> usize {
        self.state.lookups.load(Ordering::Relaxed)
    }

    /// A copy of all messages received so far, in order.
    pub fn captured(&self) -> Vec<Captured> {
        lock(&self.state.captured).clone()
    }

    /// Remove and return all messages received so far.
    pub fn take(&self) -> Vec<Captured> {
        std::mem::take(&mut *lock(&self.state.captured))
    }
}

impl Backend for Testing {
    type Error = Error;

    fn get_logger(&self, name: &str) -> Result<Arc<dyn Handle>, Error> {
        if let Some((_, reason)) = lock(&self.state.denied).iter().find(|(n, _)| n == name) {
            let err = Error::new("logger lookup denied").with_context("name", name);
            return Err(match reason {
                Some(reason) => err.with_source(anyhow::anyhow!("{reason}")),
                None => err,
            });
        }

        self.state.lookups.fetch_add(1, Ordering::Relaxed);
        Ok(Arc::new(TestingHandle {
            name: name.to_owned(),
            state: self.state.clone(),
        }))
    }
}

#[derive(Debug)]
struct TestingHandle {
    name: String,
    state: Arc<State>,
}

impl TestingHandle {
    fn capture(&self, level: Level, message: &str, cause: Option<String>) {
        lock(&self.state.captured).push(Captured {
            logger: self.name.clone(),
            level,
            message: message.to_owned(),
            cause,
        });
    }
}

impl Handle for TestingHandle {
    fn enabled(&self, level: Level) -> bool {
        self.state.enabled[level.index()].load(Ordering::Relaxed)
    }

    fn log(&self, level: Level, message: &str) {
        self.capture(level, message, None);
    }

    fn log_cause(&self, level: Level, message: &str, cause: &(dyn StdError + 'static)) {
        self.capture(level, message, Some(cause.to_string()));
    }
}
