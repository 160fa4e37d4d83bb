//! Runs the `chroma` binary against images in a temporary directory.

use std::path::Path;
use std::process::{Command, Output};

use image::{GrayImage, RgbImage};
use tempfile::TempDir;

fn chroma(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chroma"))
        .args(args)
        .output()
        .expect("failed to run chroma")
}

fn write_gray(path: &Path, width: u32, height: u32) {
    let img = GrayImage::from_fn(width, height, |x, y| image::Luma([(30 + (x * 5 + y * 3) % 200) as u8]));
    img.save(path).unwrap();
}

fn write_reference(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(150 + x % 90) as u8, (60 + y % 70) as u8, (20 + (x + y) % 50) as u8])
    });
    img.save(path).unwrap();
}

#[test]
fn transfer_global_writes_png() {
    let dir = TempDir::new().unwrap();
    let gray = dir.path().join("gray.png");
    let reference = dir.path().join("ref.png");
    let out = dir.path().join("out.png");
    write_gray(&gray, 24, 16);
    write_reference(&reference, 40, 30);

    let result = chroma(&[
        "transfer",
        gray.to_str().unwrap(),
        reference.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let colored = image::open(&out).unwrap().to_rgb8();
    assert_eq!(colored.dimensions(), (24, 16));
    // Warm reference: red dominates blue somewhere
    assert!(colored.pixels().any(|p| p[0] > p[2]));
}

#[test]
fn transfer_patch_writes_jpeg_and_reports() {
    let dir = TempDir::new().unwrap();
    let gray = dir.path().join("gray.png");
    let reference = dir.path().join("ref.png");
    let out = dir.path().join("out.jpg");
    write_gray(&gray, 40, 40);
    write_reference(&reference, 40, 40);

    let result = chroma(&[
        "-v",
        "transfer",
        gray.to_str().unwrap(),
        reference.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-m",
        "patch",
        "-q",
        "80",
    ]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Grayscale image loaded: 40x40"));
    assert!(stdout.contains("Reference image loaded: 40x40"));
    assert!(stdout.contains("Colorized image saved as"));
    assert_eq!(image::open(&out).unwrap().to_rgb8().dimensions(), (40, 40));
}

#[test]
fn patch_mode_fails_on_size_mismatch() {
    let dir = TempDir::new().unwrap();
    let gray = dir.path().join("gray.png");
    let reference = dir.path().join("ref.png");
    let out = dir.path().join("out.png");
    write_gray(&gray, 10, 10);
    write_reference(&reference, 10, 11);

    let result = chroma(&[
        "transfer",
        gray.to_str().unwrap(),
        reference.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--mode",
        "patch",
    ]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("dimension mismatch"));
    assert!(!out.exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.png");
    let result = chroma(&["transfer", missing.to_str().unwrap(), missing.to_str().unwrap()]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Failed to load"));
}

#[test]
fn unknown_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    let gray = dir.path().join("gray.png");
    write_gray(&gray, 4, 4);
    let path = gray.to_str().unwrap();
    let result = chroma(&["transfer", path, path, "-m", "median"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Unknown mode"));
}

#[test]
fn stats_prints_lab_channels() {
    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("ref.png");
    write_reference(&reference, 8, 8);

    let result = chroma(&["stats", reference.to_str().unwrap()]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    for channel in ["L: mean=", "a: mean=", "b: mean="] {
        assert!(stdout.contains(channel), "{stdout}");
    }
}
