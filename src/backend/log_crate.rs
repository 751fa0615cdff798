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

use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use log::Log;
use log::Metadata;
use log::Record;
use log::kv::Value;

use crate::Level;
use crate::backend::Backend;
use crate::backend::Handle;

/// A backend that forwards to the [`log`] crate.
///
/// Logger names become record targets. Causes of native exceptions are attached to the record as
/// the `cause` key-value.
///
/// By default records go to the global logger installed with [`log::set_logger`], and
/// [`log::max_level`] applies. A backend built with [`LogCrate::with_logger`] sends records to the
/// given logger instead and leaves level decisions to it alone.
///
/// # Examples
///
/// ```
/// use logshim::LoggerFactory;
/// use logshim::backend::LogCrate;
///
/// let factory = LoggerFactory::new(LogCrate::new());
/// let Ok(logger) = factory.create("my.app.Server");
/// logger.info("started");
/// ```
#[derive(Clone, Default)]
pub struct LogCrate {
    logger: Option<Arc<dyn Log>>,
}

impl fmt::Debug for LogCrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogCrate")
            .field("global", &self.logger.is_none())
            .finish()
    }
}

impl LogCrate {
    /// Create a backend over the global logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend over the given logger.
    pub fn with_logger(logger: impl Log + 'static) -> Self {
        Self {
            logger: Some(Arc::new(logger)),
        }
    }
}

impl Backend for LogCrate {
    type Error = Infallible;

    fn get_logger(&self, name: &str) -> Result<Arc<dyn Handle>, Infallible> {
        Ok(Arc::new(LogCrateHandle {
            target: name.to_owned(),
            logger: self.logger.clone(),
        }))
    }
}

struct LogCrateHandle {
    target: String,
    logger: Option<Arc<dyn Log>>,
}

impl fmt::Debug for LogCrateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogCrateHandle")
            .field("target", &self.target)
            .field("global", &self.logger.is_none())
            .finish()
    }
}

impl LogCrateHandle {
    fn logger(&self) -> &dyn Log {
        match &self.logger {
            Some(logger) => logger.as_ref(),
            None => log::logger(),
        }
    }
}

impl Handle for LogCrateHandle {
    fn enabled(&self, level: Level) -> bool {
        let level = log::Level::from(level);
        if self.logger.is_none() && level > log::max_level() {
            return false;
        }

        let metadata = Metadata::builder()
            .level(level)
            .target(&self.target)
            .build();
        self.logger().enabled(&metadata)
    }

    fn log(&self, level: Level, message: &str) {
        self.logger().log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level.into())
                .target(&self.target)
                .build(),
        );
    }

    fn log_cause(&self, level: Level, message: &str, cause: &(dyn StdError + 'static)) {
        let kvs = [("cause", Value::from_dyn_error(cause))];
        self.logger().log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level.into())
                .target(&self.target)
                .key_values(&kvs)
                .build(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::kv::Key;
    use log::kv::VisitSource;

    use super::*;

    #[derive(Debug, Default)]
    struct Capture {
        max_level: Option<log::Level>,
        records: Mutex<Vec<(log::Level, String, String, Option<String>)>>,
    }

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata) -> bool {
            self.max_level.is_some_and(|max| metadata.level() <= max)
        }

        fn log(&self, record: &Record) {
            struct CauseVisitor(Option<String>);

            impl<'kvs> VisitSource<'kvs> for CauseVisitor {
                fn visit_pair(
                    &mut self,
                    key: Key<'kvs>,
                    value: Value<'kvs>,
                ) -> Result<(), log::kv::Error> {
                    if key.as_str() == "cause" {
                        self.0 = Some(value.to_string());
                    }
                    Ok(())
                }
            }

            let mut visitor = CauseVisitor(None);
            record.key_values().visit(&mut visitor).unwrap();
            self.records.lock().unwrap().push((
                record.level(),
                record.target().to_owned(),
                record.args().to_string(),
                visitor.0,
            ));
        }

        fn flush(&self) {}
    }

    #[derive(Debug, Clone, Default)]
    struct Shared(Arc<Capture>);

    impl Log for Shared {
        fn enabled(&self, metadata: &Metadata) -> bool {
            self.0.enabled(metadata)
        }

        fn log(&self, record: &Record) {
            self.0.log(record)
        }

        fn flush(&self) {}
    }

    fn capture_backend(max_level: Option<log::Level>) -> (LogCrate, Arc<Capture>) {
        let capture = Arc::new(Capture {
            max_level,
            records: Mutex::default(),
        });
        (LogCrate::with_logger(Shared(capture.clone())), capture)
    }

    #[test]
    fn target_is_logger_name() {
        let (backend, capture) = capture_backend(Some(log::Level::Trace));
        let Ok(handle) = backend.get_logger("foo.bar.Baz");

        handle.log(Level::Warn, "careful");

        let records = capture.records.lock().unwrap();
        assert_eq!(
            *records,
            [(
                log::Level::Warn,
                "foo.bar.Baz".to_owned(),
                "careful".to_owned(),
                None
            )]
        );
    }

    #[test]
    fn enabled_asks_the_logger() {
        let (backend, _) = capture_backend(Some(log::Level::Info));
        let Ok(handle) = backend.get_logger("a");

        assert!(handle.enabled(Level::Error));
        assert!(handle.enabled(Level::Info));
        assert!(!handle.enabled(Level::Debug));
        assert!(!handle.enabled(Level::Trace));

        let (backend, _) = capture_backend(None);
        let Ok(handle) = backend.get_logger("a");
        assert!(!handle.enabled(Level::Error));
    }

    #[test]
    fn cause_is_attached_as_key_value() {
        let (backend, capture) = capture_backend(Some(log::Level::Trace));
        let Ok(handle) = backend.get_logger("a");

        let err = std::io::Error::other("disk on fire");
        handle.log_cause(Level::Error, "write failed", &err);

        let records = capture.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].2, "write failed");
        assert_eq!(records[0].3.as_deref(), Some("disk on fire"));
    }
}
