//! Integration tests for the `expand` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_expand_mask_prints_absolute_paths() {
    let env = TestEnv::with_sample_tree();
    assert_eq!(env.expand(&["src/*.js"]), vec![env.abs("src/a.js")]);
}

#[test]
fn test_expand_directory_relative_output() {
    let env = TestEnv::with_sample_tree();
    assert_eq!(
        env.expand(&["--relative", "src"]),
        vec![
            "src/.hidden.js",
            "src/a.js",
            "src/b.ts",
            "src/nested/c.js",
            "src/nested/d.css",
        ]
    );
}

#[test]
fn test_expand_deduplicates_inputs() {
    let env = TestEnv::with_sample_tree();
    assert_eq!(
        env.expand(&["--relative", "src/nested/*.js", "src/nested", "src/nested/c.js"]),
        vec!["src/nested/c.js", "src/nested/d.css"]
    );
}

#[test]
fn test_expand_no_match_exit_code() {
    let env = TestEnv::with_sample_tree();
    env.command()
        .args(["expand", "src/*.js", "lib/*.js"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot find files by mask lib/*.js"));
}

#[test]
fn test_expand_empty_pattern_is_no_match() {
    let env = TestEnv::with_sample_tree();
    env.command()
        .args(["expand", ""])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot find files by mask"));
}

#[test]
fn test_expand_format_filter() {
    let env = TestEnv::with_sample_tree();
    assert_eq!(
        env.expand(&["--relative", "--format", ".js", "src"]),
        vec!["src/.hidden.js", "src/a.js", "src/nested/c.js"]
    );
    assert_eq!(
        env.expand(&["--relative", "--format", ".ts,.css", "src"]),
        vec!["src/b.ts", "src/nested/d.css"]
    );
}

#[test]
fn test_expand_ignore() {
    let env = TestEnv::with_sample_tree();
    let mut lines = env.expand(&["--relative", "--ignore", "node_modules/**", "**/*.js"]);
    lines.sort();
    assert_eq!(lines, vec!["src/a.js", "src/nested/c.js"]);
}

#[test]
fn test_expand_dot_and_case_insensitive() {
    let env = TestEnv::with_sample_tree();
    let mut lines = env.expand(&["--relative", "--dot", "--case-insensitive", "src/*.JS"]);
    lines.sort();
    assert_eq!(lines, vec!["src/.hidden.js", "src/a.js"]);
}

#[test]
fn test_expand_json_output() {
    let env = TestEnv::with_sample_tree();
    let output = env
        .command()
        .args(["expand", "--relative", "--output", "json", "docs", "src/*.ts"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let paths: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(paths, vec!["docs/readme.md", "src/b.ts"]);
}

#[test]
fn test_expand_null_output() {
    let env = TestEnv::with_sample_tree();
    env.command()
        .args(["expand", "--relative", "--output", "null", "src/nested"])
        .assert()
        .success()
        .stdout("src/nested/c.js\0src/nested/d.css\0");
}

#[test]
fn test_expand_with_root() {
    let env = TestEnv::new();
    env.create_file("app/lib/x.js");
    env.create_file("lib/y.js");

    assert_eq!(
        env.expand(&["--root", "app", "lib/*.js"]),
        vec![env.abs("app/lib/x.js")]
    );
    assert_eq!(
        env.expand(&["--root", "app", "--relative", "lib"]),
        vec!["lib/x.js"]
    );
}

#[test]
fn test_expand_with_working_dir() {
    let env = TestEnv::new();
    env.create_file("project/src/main.rs");

    env.command()
        .args(["-C", "project", "expand", "--relative", "src"])
        .assert()
        .success()
        .stdout("src/main.rs\n");
}

#[test]
fn test_expand_uses_config_file() {
    let env = TestEnv::with_sample_tree();
    env.write(".glob-extra.yaml", "formats: [.css]\n");

    assert_eq!(
        env.expand(&["--relative", "src"]),
        vec!["src/nested/d.css"]
    );
    assert_eq!(
        env.expand(&["--no-config", "--relative", "src/nested"]),
        vec!["src/nested/c.js", "src/nested/d.css"]
    );
}

#[test]
fn test_expand_flags_override_config_file() {
    let env = TestEnv::with_sample_tree();
    env.write(".glob-extra.yaml", "formats: [.css]\n");

    assert_eq!(
        env.expand(&["--relative", "--format", ".ts", "src"]),
        vec!["src/b.ts"]
    );
}

#[test]
fn test_expand_uses_environment() {
    let env = TestEnv::with_sample_tree();
    env.command()
        .env("GLOB_EXTRA_FORMATS", ".md")
        .args(["expand", "--relative", "docs", "src"])
        .assert()
        .success()
        .stdout("docs/readme.md\n");
}

#[test]
fn test_expand_zero_concurrency_is_invalid() {
    let env = TestEnv::with_sample_tree();
    env.command()
        .args(["expand", "--concurrency", "0", "src"])
        .assert()
        .code(4);
}

#[test]
fn test_expand_invalid_ignore_pattern() {
    let env = TestEnv::with_sample_tree();
    env.command()
        .args(["expand", "--ignore", "src/[", "src"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_expand_invalid_format_in_config() {
    let env = TestEnv::with_sample_tree();
    env.write(".glob-extra.yaml", "formats: [js]\n");

    env.command()
        .args(["expand", "src"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("must start with '.'"));
}
