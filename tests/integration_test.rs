//! Integration tests for the amalgamation pipeline using the default
//! configuration, which targets the `af_xloper` header family.
//!
//! The headers live in `<tmp>/af_xloper/`, so the default output
//! `../af_xloper_single_header/af_xloper.h` lands inside the temp directory.

mod common;
use common::prelude::*;

use amalgamate::config::Config;
use amalgamate::error::Error;
use amalgamate::output::Reporter;
use amalgamate::phases::orchestrator;

fn xloper_family() -> TestFixture {
    TestFixture::new()
        .with_file(
            "af_xloper/af_xloper.h",
            "#pragma once\n\n#include \"af_xloper_registration.h\"\n#include \"af_xloper_conversions.h\"\n",
        )
        .with_file(
            "af_xloper/af_xloper_data.h",
            "#pragma once\n#include <windows.h>\n#include \"XLCALL.H\"\n#include <string>\n\nnamespace autotelica {\nnamespace xloper {\n\tstruct xl_data {};\n}\n}\n",
        )
        .with_file(
            "af_xloper/af_xloper_conversions.h",
            "#pragma once\n#include <string>\n#include <map>\n#include \"af_xloper_data.h\"\n\nnamespace autotelica {\n\tnamespace xloper {\n\tnamespace xl_conversions {\n\t\tint convert();\n\t}\n\t}\n}\n",
        )
        .with_file(
            "af_xloper/af_xloper_registration.h",
            "#pragma once\n#include <mutex>\n#include \"af_xloper_conversions.h\"\n#include \"af_xloper_data.h\"\n\nnamespace autotelica {\n\tnamespace xloper {\n\t\tvoid register_all();\n\t}\n}\n",
        )
}

fn config_for(fixture: &TestFixture) -> Config {
    Config {
        directory: fixture.path().join("af_xloper"),
        ..Config::default()
    }
}

#[test]
fn test_default_pipeline_orders_xloper_family() {
    let fixture = xloper_family();

    let result = orchestrator::execute(&config_for(&fixture), &Reporter::silent()).unwrap();

    assert_eq!(
        result.order.order,
        vec![
            "af_xloper_data.h",
            "af_xloper_conversions.h",
            "af_xloper_registration.h",
            "af_xloper.h",
        ]
    );
    assert_eq!(
        result.foreign_includes.lines(),
        [
            "#include <string>",
            "#include <map>",
            "#include <windows.h>",
            "#include \"XLCALL.H\"",
            "#include <mutex>",
        ]
    );
}

#[test]
fn test_default_pipeline_writes_single_header() {
    let fixture = xloper_family();

    orchestrator::execute(&config_for(&fixture), &Reporter::silent()).unwrap();

    let merged = fixture.read("af_xloper_single_header/af_xloper.h");
    assert!(merged.starts_with("\n#pragma once\n#define WIN32_LEAN_AND_MEAN   \n\n#include <string>\n"));
    assert!(merged.contains("\nnamespace autotelica {\nnamespace xloper {\n"));
    assert!(merged.ends_with("\n}\n}\n"));

    let data = merged.find("struct xl_data {};").unwrap();
    let conversions = merged.find("int convert();").unwrap();
    let registration = merged.find("void register_all();").unwrap();
    assert!(data < conversions && conversions < registration);
    assert_eq!(merged.matches("namespace autotelica").count(), 1);
    assert!(merged.contains("namespace xl_conversions {"));
}

#[test]
fn test_default_pipeline_missing_sibling_is_unresolved() {
    let fixture = xloper_family().with_file(
        "af_xloper/af_xloper_macros.h",
        "#include \"af_xloper/af_xloper_inner.h\"\n",
    );

    let err = orchestrator::execute(&config_for(&fixture), &Reporter::silent()).unwrap_err();

    match err {
        Error::UnresolvedDependency { file, include } => {
            assert_eq!(file, "af_xloper_macros.h");
            assert_eq!(include, "af_xloper/af_xloper_inner.h");
        }
        other => panic!("expected unresolved dependency, got {:?}", other),
    }
    fixture
        .child("af_xloper_single_header")
        .assert(predicate::path::missing());
}

#[test]
fn test_binary_without_arguments_uses_defaults() {
    let fixture = xloper_family();

    let mut cmd = cargo_bin_cmd!("amalgamate");
    cmd.current_dir(fixture.path().join("af_xloper"))
        .env_remove("AMALGAMATE_CONFIG")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:"))
        .stdout(predicate::str::contains(
            "Sorted files:\n\taf_xloper_data.h\n\taf_xloper_conversions.h\n\taf_xloper_registration.h\n\taf_xloper.h",
        ))
        .stdout(predicate::str::contains("Joined file written to"));

    fixture
        .child("af_xloper_single_header/af_xloper.h")
        .assert(predicate::str::contains("void register_all();"));
}
