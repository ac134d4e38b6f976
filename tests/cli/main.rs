#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

const BIN: &str = env!("CARGO_BIN_EXE_convert-webp");

// Records its argv next to itself and touches whatever follows `-o`.
const FAKE_TOOL: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$0.args"
while [ $# -gt 0 ]; do
    if [ "$1" = "-o" ]; then
        shift
        : > "$1"
    fi
    shift
done
"#;

const FAILING_TOOL: &str = "#!/bin/sh\necho 'Unsupported image format' >&2\nexit 3\n";

fn write_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn recorded_args(tool: &Path) -> Vec<String> {
    let mut log = tool.as_os_str().to_owned();
    log.push(".args");
    fs::read_to_string(log)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn convert(dir: &Path, cwebp: &Path, dwebp: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env("CONVERT_WEBP_CWEBP", cwebp)
        .env("CONVERT_WEBP_DWEBP", dwebp)
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn missing_file_warns_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let tool = write_tool(dir.path(), "cwebp", FAKE_TOOL);

    let output = convert(dir.path(), &tool, &tool, &["nope.jpg"]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.jpg not found"), "{stderr}");
}

#[test]
fn encodes_jpg_with_quality() {
    let dir = tempfile::tempdir().unwrap();
    let cwebp = write_tool(dir.path(), "cwebp", FAKE_TOOL);
    let dwebp = write_tool(dir.path(), "dwebp", FAKE_TOOL);
    fs::write(dir.path().join("photo.jpg"), b"jpg").unwrap();

    let output = convert(dir.path(), &cwebp, &dwebp, &["-q", "50", "photo.jpg"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");

    let expected = dir.path().join("photo.webp");
    assert!(expected.exists());
    let args = recorded_args(&cwebp);
    assert_eq!(args[..2], ["-q", "50"]);
    assert!(args[2].ends_with("photo.jpg"));
    assert_eq!(args[3], "-o");
    assert!(args[4].ends_with("photo.webp"));
    assert_eq!(args.len(), 5);
}

#[test]
fn second_encode_writes_a_copy() {
    let dir = tempfile::tempdir().unwrap();
    let cwebp = write_tool(dir.path(), "cwebp", FAKE_TOOL);
    fs::write(dir.path().join("photo.png"), b"png").unwrap();
    fs::write(dir.path().join("photo.webp"), b"old").unwrap();

    let output = convert(dir.path(), &cwebp, &cwebp, &["--lossless", "-v", "photo.png"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(dir.path().join("photo (copy).webp").exists());
    assert_eq!(fs::read(dir.path().join("photo.webp")).unwrap(), b"old");

    let args = recorded_args(&cwebp);
    assert_eq!(args.first().map(String::as_str), Some("-lossless"));
    assert_eq!(args.last().map(String::as_str), Some("-v"));
}

#[test]
fn decodes_webp_with_explicit_extension() {
    let dir = tempfile::tempdir().unwrap();
    let cwebp = write_tool(dir.path(), "cwebp", FAKE_TOOL);
    let dwebp = write_tool(dir.path(), "dwebp", FAKE_TOOL);
    fs::write(dir.path().join("img.webp"), b"webp").unwrap();

    let output = convert(dir.path(), &cwebp, &dwebp, &["-E", "png", "-O", "out", "img.webp"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(dir.path().join("out.png").exists());
    assert!(!dir.path().join("cwebp.args").exists());
}

#[test]
fn closed_stdin_cancels_the_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let dwebp = write_tool(dir.path(), "dwebp", FAKE_TOOL);
    fs::write(dir.path().join("img.webp"), b"webp").unwrap();

    let output = convert(dir.path(), &dwebp, &dwebp, &["img.webp"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Choose an extension"));
    assert!(!dir.path().join("dwebp.args").exists());
    assert!(!dir.path().join("img.png").exists());
}

#[test]
fn tool_failure_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let cwebp = write_tool(dir.path(), "cwebp", FAILING_TOOL);
    fs::write(dir.path().join("photo.bmp"), b"bmp").unwrap();

    let output = convert(dir.path(), &cwebp, &cwebp, &["photo.bmp"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported image format"), "{stderr}");
    assert!(stderr.contains("Exiting with error..."), "{stderr}");
}

#[test]
fn extra_arguments_are_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let tool = write_tool(dir.path(), "cwebp", FAKE_TOOL);

    let output = convert(dir.path(), &tool, &tool, &["a.png", "b.png"]);
    assert_eq!(output.status.code(), Some(2));
}
