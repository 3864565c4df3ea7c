//! Integration tests for the `color` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_encode() {
    let env = TestEnv::new();

    env.command()
        .args(["color", "encode", "65535", "0", "0"])
        .assert()
        .success()
        .stdout("ff0000\n");

    env.command()
        .args(["color", "encode", "257", "256", "258"])
        .assert()
        .success()
        .stdout("010001\n");
}

#[test]
fn test_decode() {
    let env = TestEnv::new();

    env.command()
        .args(["color", "decode", "ff0000"])
        .assert()
        .success()
        .stdout("65535 0 0\n");

    env.command()
        .args(["color", "decode", "7f7f7f"])
        .assert()
        .success()
        .stdout("32639 32639 32639\n");
}

#[test]
fn test_decode_short_form() {
    let env = TestEnv::new();

    // Missing leading digits are zeros
    env.command()
        .args(["color", "decode", "ff"])
        .assert()
        .success()
        .stdout("0 0 65535\n");
}

#[test]
fn test_decode_rejects_invalid() {
    let env = TestEnv::new();

    for bad in ["#ff0000", "fff0000", "zzzzzz", ""] {
        env.command()
            .args(["color", "decode", bad])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("invalid color"));
    }
}

#[test]
fn test_encode_rejects_out_of_range() {
    let env = TestEnv::new();

    env.command()
        .args(["color", "encode", "65536", "0", "0"])
        .assert()
        .failure();
}

#[test]
fn test_color_does_not_touch_config() {
    let env = TestEnv::new();

    env.command()
        .args(["color", "encode", "1", "2", "3"])
        .assert()
        .success();

    assert!(!env.config_path.exists());
}
