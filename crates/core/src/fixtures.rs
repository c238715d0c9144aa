// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared class hierarchy for unit tests

use crate::class::ClassId;
use crate::option::{option_map, OptionKind};
use crate::registry::Registry;
use crate::task::handler;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub(crate) const FOO_DESCRIPTION: &str = "do some fooing
  This is more info!
  Everyone likes more info!
";

pub(crate) struct Scripts {
    pub script: ClassId,
    pub child: ClassId,
    pub grandchild: ClassId,
    pub amazing: ClassId,
}

pub(crate) fn main_file() -> PathBuf {
    Path::new("/project/tasks/main.toml").to_path_buf()
}

pub(crate) fn extra_file() -> PathBuf {
    Path::new("/project/tasks/fixtures/task.toml").to_path_buf()
}

/// Script -> ChildScript -> GrandChildScript, plus an unrelated Amazing class
pub(crate) fn scripts() -> (Registry, Scripts) {
    let mut registry = Registry::new();
    let main = main_file();

    let script = registry.define_class("MyScript", None, &main).unwrap();
    registry
        .class_mut(script)
        .group("script")
        .default_task("example_default_task")
        .map("-T", "animal")
        .map_many(["-f", "--foo"], "foo")
        .desc("zoo", "zoo around")
        .def("zoo", handler(|_, _| Ok(json!(true))))
        .desc("animal TYPE", "horse around")
        .def("animal", handler(|args, _| Ok(json!(args))))
        .desc("foo BAR", FOO_DESCRIPTION)
        .method_options(option_map([("force", OptionKind::Boolean)]))
        .def("foo", handler(|args, opts| Ok(json!([args[0], opts]))))
        .desc("example_default_task", "example!")
        .def(
            "example_default_task",
            handler(|_, _| Ok(Value::String("default task".to_string()))),
        );

    let child = registry
        .define_subclass("MyChildScript", "MyScript", &main)
        .unwrap();
    registry
        .class_mut(child)
        .default_options(option_map([
            ("force", OptionKind::Boolean),
            ("param", OptionKind::Numeric),
        ]))
        .desc("zoo", "zoo around")
        .method_options(option_map([("param", OptionKind::StringRequired)]))
        .def("zoo", handler(|_, opts| Ok(json!(opts))))
        .desc("animal TYPE", "horse around")
        .method_options(option_map([("other", OptionKind::StringOptional)]))
        .def("animal", handler(|args, opts| Ok(json!([args[0], opts]))));

    let grandchild = registry
        .define_subclass("Scripts::MyGrandChildScript", "MyChildScript", &main)
        .unwrap();
    registry
        .class_mut(grandchild)
        .default_options(option_map([
            ("force", OptionKind::StringOptional),
            ("param", OptionKind::StringRequired),
        ]));

    let amazing = registry.define_class("Amazing", None, &main).unwrap();
    registry
        .class_mut(amazing)
        .desc("hello", "say hello")
        .def("hello", handler(|_, _| Ok(json!("Hello"))));

    // Amazing is reopened by a second source unit
    registry
        .define_class("Amazing", None, &extra_file())
        .unwrap();

    (
        registry,
        Scripts {
            script,
            child,
            grandchild,
            amazing,
        },
    )
}
