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

//! Logger names.
//!
//! Loggers are arranged in a hierarchy by dotted names, following the package and class naming
//! convention of JVM-style backends:
//!
//! * `"pmodule"`
//! * `"pmodule.cmodule"`
//! * `"pmodule.cmodule.ClassName"`
//!
//! A plain string is used as the logger name as-is. A Rust path (a type or a module) is converted
//! with [`to_log_name`]: `::` becomes `.` and every segment but the last is lowercased.

use std::borrow::Cow;

/// Either a ready-made logger name or a Rust path to derive one from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name<'a> {
    /// A logger name used verbatim.
    Plain(Cow<'a, str>),
    /// A `::`-separated path, normalized with [`to_log_name`].
    Path(Cow<'a, str>),
}

impl Name<'static> {
    /// The name of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logshim::name::Name;
    /// use logshim::name::normalize;
    ///
    /// mod store {
    ///     pub struct BookStore;
    /// }
    ///
    /// let name = normalize(Name::of::<store::BookStore>());
    /// assert!(name.ends_with(".store.BookStore"));
    /// ```
    pub fn of<T: ?Sized>() -> Self {
        Name::Path(Cow::Borrowed(std::any::type_name::<T>()))
    }
}

impl<'a> Name<'a> {
    /// A module path, as returned by `module_path!()`.
    pub fn module(path: &'a str) -> Self {
        Name::Path(Cow::Borrowed(path))
    }
}

impl<'a> From<&'a str> for Name<'a> {
    fn from(name: &'a str) -> Self {
        Name::Plain(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for Name<'a> {
    fn from(name: &'a String) -> Self {
        Name::Plain(Cow::Borrowed(name))
    }
}

impl From<String> for Name<'static> {
    fn from(name: String) -> Self {
        Name::Plain(Cow::Owned(name))
    }
}

/// Turn a name or path into the logger name used with the backend.
///
/// # Examples
///
/// ```
/// use logshim::name::Name;
/// use logshim::name::normalize;
///
/// assert_eq!(normalize("my.app.logger"), "my.app.logger");
/// assert_eq!(normalize(Name::module("foo::bar::Baz")), "foo.bar.Baz");
/// ```
pub fn normalize<'a>(name: impl Into<Name<'a>>) -> String {
    match name.into() {
        Name::Plain(name) => name.into_owned(),
        Name::Path(path) => to_log_name(&path),
    }
}

/// Convert a Rust path into a dotted logger name.
///
/// Generic arguments are dropped, `::` separators become `.`, and every segment except the last
/// is lowercased, so `Foo::Bar::Baz` becomes `foo.bar.Baz`.
pub fn to_log_name(path: &str) -> String {
    let path = path.split_once('<').map_or(path, |(head, _)| head);

    let mut name = String::with_capacity(path.len());
    let mut segments = path.split("::").peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            name.push_str(&segment.to_lowercase());
            name.push('.');
        } else {
            name.push_str(segment);
        }
    }
    name
}
