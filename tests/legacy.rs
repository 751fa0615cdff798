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

use std::cell::Cell;

use logshim::Level;
use logshim::Logger;
use logshim::LoggerFactory;
use logshim::Severity;
use logshim::backend::Testing;

fn setup() -> (Testing, Logger) {
    let backend = Testing::new();
    let logger = LoggerFactory::new(backend.clone()).create("legacy").unwrap();
    (backend, logger)
}

fn messages(backend: &Testing) -> Vec<(Level, String)> {
    backend
        .take()
        .into_iter()
        .map(|c| (c.level, c.message))
        .collect()
}

#[test]
fn add_with_level_name() {
    let (backend, logger) = setup();

    assert!(logger.add("warn", Some("hi"), None));
    assert_eq!(messages(&backend), [(Level::Warn, "hi".to_owned())]);
}

#[test]
fn add_with_well_known_severities() {
    let (backend, logger) = setup();

    logger.add(Severity::Debug, Some("d"), None);
    logger.add(Severity::Info, Some("i"), None);
    logger.add(Severity::Warn, Some("w"), None);
    logger.add(Severity::Error, Some("e"), None);
    logger.add(Severity::Fatal, Some("f"), None);
    logger.add(Severity::Unknown, Some("u"), None);

    assert_eq!(
        messages(&backend),
        [
            (Level::Debug, "d".to_owned()),
            (Level::Info, "i".to_owned()),
            (Level::Warn, "w".to_owned()),
            (Level::Error, "e".to_owned()),
            (Level::Error, "f".to_owned()),
            (Level::Trace, "u".to_owned()),
        ]
    );
}

#[test]
fn add_with_unknown_severity_falls_back_to_trace() {
    let (backend, logger) = setup();

    assert!(logger.add("unknown-severity", Some("hi"), None));
    assert_eq!(messages(&backend), [(Level::Trace, "hi".to_owned())]);

    backend.disable(Level::Trace);
    assert!(logger.add("unknown-severity", Some("hi"), None));
    assert!(backend.captured().is_empty());
}

#[test]
fn add_joins_progname_and_message() {
    let (backend, logger) = setup();

    logger.add(Severity::Info, Some("started"), Some("worker"));
    logger.add(Severity::Info, None, Some("prog"));
    logger.add(Severity::Info, Some("bare"), None);

    assert_eq!(
        messages(&backend),
        [
            (Level::Info, "worker - started".to_owned()),
            (Level::Info, "prog".to_owned()),
            (Level::Info, "bare".to_owned()),
        ]
    );
}

#[test]
fn add_without_message_or_progname_emits_nothing() {
    let (backend, logger) = setup();

    assert!(logger.add(Severity::Error, None, None));
    assert!(backend.captured().is_empty());
}

#[test]
fn add_with_deferred_message() {
    let (backend, logger) = setup();
    let calls = Cell::new(0);
    let produce = || {
        calls.set(calls.get() + 1);
        "lazy"
    };

    assert!(logger.add_with(Severity::Warn, Some("prog"), produce));
    assert_eq!(calls.get(), 1);
    assert_eq!(messages(&backend), [(Level::Warn, "prog - lazy".to_owned())]);

    backend.disable(Level::Warn);
    assert!(logger.add_with(Severity::Warn, None, produce));
    assert_eq!(calls.get(), 1);
    assert!(backend.captured().is_empty());
}

#[test]
fn log_is_a_synonym_for_add() {
    let (backend, logger) = setup();

    assert!(logger.log(Severity::Fatal, Some("down"), Some("db")));
    assert!(logger.log_with("debug", None, || "lazy"));

    assert_eq!(
        messages(&backend),
        [
            (Level::Error, "db - down".to_owned()),
            (Level::Debug, "lazy".to_owned()),
        ]
    );
}

#[test]
fn append_uses_compatibility_severity() {
    let (backend, mut logger) = setup();

    assert!(logger.append("first"));
    logger.set_level(Severity::Warn);
    let _ = &logger << "second" << String::from("third");
    logger.set_level(Level::Trace);
    let _ = &logger << "fourth";

    assert_eq!(
        messages(&backend),
        [
            (Level::Info, "first".to_owned()),
            (Level::Warn, "second".to_owned()),
            (Level::Warn, "third".to_owned()),
            (Level::Trace, "fourth".to_owned()),
        ]
    );
}

#[test]
fn fatal_and_error_severities_match() {
    let (backend, logger) = setup();

    logger.add("fatal", Some("a"), None);
    logger.add("error", Some("a"), None);
    logger.add(Severity::Fatal, Some("a"), None);
    logger.add(Severity::Error, Some("a"), None);
    assert!(messages(&backend).iter().all(|(level, _)| *level == Level::Error));

    backend.disable(Level::Error);
    logger.add(Severity::Fatal, Some("a"), None);
    logger.add("fatal", Some("a"), None);
    assert!(backend.captured().is_empty());
}

#[test]
fn add_with_runtime_severity_name() {
    let (backend, mut logger) = setup();
    let config = String::from("level=Debug");
    let name = config.split_once('=').map_or("", |(_, v)| v);

    assert!(logger.add(name, Some("from config"), None));
    logger.set_level(name);
    drop(config);
    let _ = &logger << "appended";

    assert_eq!(
        messages(&backend),
        [
            (Level::Debug, "from config".to_owned()),
            (Level::Debug, "appended".to_owned()),
        ]
    );
    assert_eq!(logger.level().to_string(), "Debug");
}
