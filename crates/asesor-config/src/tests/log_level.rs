use crate::LogLevel;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_mapped() {
    assert_that!(*LogLevel::parse_lenient("off"), eq(LevelFilter::Off));
    assert_that!(*LogLevel::parse_lenient("ERROR"), eq(LevelFilter::Error));
    assert_that!(*LogLevel::parse_lenient(" info "), eq(LevelFilter::Info));
    assert_that!(*LogLevel::parse_lenient("debug"), eq(LevelFilter::Debug));
}

#[test]
fn given_unknown_level_when_parsed_then_default() {
    assert_that!(*LogLevel::parse_lenient("verbose"), eq(LevelFilter::Warn));
}

#[test]
fn given_toml_level_when_deserialized_then_lenient() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let parsed: Wrapper = toml::from_str("level = \"loud\"").unwrap();
    assert_that!(*parsed.level, eq(LevelFilter::Warn));
}
