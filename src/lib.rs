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

//! Logshim is a logger facade over a leveled, hierarchically named logging backend.
//!
//! # Overview
//!
//! A [`Logger`] wraps one named backend logger and offers level-gated methods for `trace`,
//! `debug`, `info`, `warn`, `error` and `fatal` (an alias of `error`), messages built only when
//! their level is enabled, and exceptions rendered next to the message. It also speaks the
//! `add`/`log`/`<<` dialect of classic line loggers.
//!
//! Logshim never configures the backend. By default it forwards to the [`log`] crate, so
//! whichever logger is installed there (for example Logforth) decides where records go.
//!
//! # Examples
//!
//! Log through the global `log` crate logger:
//!
//! ```
//! let log = logshim::logger("my.app.logger");
//! log.info("Hello World!");
//! log.debug_with(|| format!("computed only when debug is enabled: {}", 6 * 7));
//! ```
//!
//! Name a logger after a type, and use an explicit backend:
//!
//! ```
//! use logshim::LoggerFactory;
//! use logshim::backend::Testing;
//! use logshim::name::Name;
//!
//! mod book_store {
//!     pub struct Application;
//! }
//!
//! let backend = Testing::new();
//! let factory = LoggerFactory::new(backend.clone());
//! let logger = factory.create(Name::of::<book_store::Application>()).unwrap();
//! assert!(logger.name().ends_with("book_store.Application"));
//!
//! logger.warn("low on stock");
//! assert_eq!(backend.captured()[0].message, "low on stock");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod backend;
pub mod exception;
pub mod name;

mod error;
mod factory;
mod level;
mod logger;
mod severity;

pub use self::error::Error;
pub use self::exception::Exception;
pub use self::factory::LoggerFactory;
pub use self::factory::logger;
pub use self::level::Level;
pub use self::logger::Logger;
pub use self::logger::Payload;
pub use self::severity::Severity;
