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

use std::sync::Mutex;

use log::LevelFilter;
use log::Metadata;
use log::Record;
use logshim::Exception;
use logshim::name::Name;

static RECORDS: Mutex<Vec<(log::Level, String, String)>> = Mutex::new(Vec::new());

struct Collect;

impl log::Log for Collect {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((
            record.level(),
            record.target().to_owned(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

mod shop {
    pub struct Checkout;
}

// a single test owns the global logger of this binary
#[test]
fn forwards_to_the_global_logger() {
    static COLLECT: Collect = Collect;
    log::set_logger(&COLLECT).unwrap();
    log::set_max_level(LevelFilter::Info);

    let logger = logshim::logger(Name::of::<shop::Checkout>());
    assert_eq!(logger.name(), "global_log_crate.shop.Checkout");
    assert!(logger.info_enabled());
    assert!(!logger.debug_enabled());

    let calls = std::cell::Cell::new(0);
    logger.debug_with(|| {
        calls.set(calls.get() + 1);
        "hidden"
    });
    logger.warn("paid");
    logger.fatal_ex("declined", &Exception::native(std::io::Error::other("card")));

    assert_eq!(calls.get(), 0);
    assert_eq!(
        *RECORDS.lock().unwrap(),
        [
            (
                log::Level::Warn,
                "global_log_crate.shop.Checkout".to_owned(),
                "paid".to_owned()
            ),
            (
                log::Level::Error,
                "global_log_crate.shop.Checkout".to_owned(),
                "declined".to_owned()
            ),
        ]
    );
}
