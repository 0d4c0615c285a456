// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn writes_a_png_of_the_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mandel.png");
    Command::cargo_bin("mandelfill")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .args(&["--size", "40x30", "--threads", "3"])
        .assert()
        .success();

    let img = image::open(&output).unwrap().to_rgba();
    assert_eq!(img.dimensions(), (40, 30));
    assert!(img.pixels().all(|p| p[3] == 255));
}

#[test]
fn zero_threads_is_a_render_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mandel.png");
    Command::cargo_bin("mandelfill")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .args(&["--size", "8x8", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure: invalid worker count 0"));
    assert!(!output.exists());
}

#[test]
fn malformed_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("mandelfill")
        .unwrap()
        .arg("--output")
        .arg(dir.path().join("mandel.png"))
        .args(&["--size", "forty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse image size"));
}

#[test]
fn output_is_required() {
    Command::cargo_bin("mandelfill")
        .unwrap()
        .assert()
        .failure();
}
