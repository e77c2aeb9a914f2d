// e2e/cli_integration.rs — `lzo` binary tests.
//
// Runs the built binary as a black box with std::process::Command: mode
// selection, level flags, output naming, overwrite protection and exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Locate the `lzo` binary produced by Cargo.
fn lzo_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lzo"))
}

fn make_temp_input() -> (TempDir, PathBuf, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let content = "Hello, LZO!\n".repeat(341).into_bytes();
    fs::write(&input, &content).unwrap();
    (dir, input, content)
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(lzo_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run lzo")
}

fn run_with_stdin(dir: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(lzo_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lzo");
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

// ── 1. Compress / decompress through files ───────────────────────────────────

#[test]
fn compress_then_decompress_files() {
    let (dir, input, content) = make_temp_input();
    let packed = dir.path().join("out.lzo");
    let restored = dir.path().join("restored.txt");

    let out = run(dir.path(), &["-z", "-o", packed.to_str().unwrap(), input.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(lzo1x::decompress_to_vec(&fs::read(&packed).unwrap()).unwrap(), content);

    let out = run(dir.path(), &["-o", restored.to_str().unwrap(), packed.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&restored).unwrap(), content);
}

// ── 2. Pipes ─────────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_roundtrip() {
    let (dir, _, content) = make_temp_input();
    let out = run_with_stdin(dir.path(), &["-z", "-9"], &content);
    assert!(out.status.success());
    let packed = out.stdout;
    assert!(packed.len() < content.len());

    let out = run_with_stdin(dir.path(), &[], &packed);
    assert!(out.status.success());
    assert_eq!(out.stdout, content);
    // Summaries are suppressed when data goes to stdout.
    assert!(out.stderr.is_empty());
}

/// A pipe opened by path reports a size of zero; the stream must still be
/// read to its end.
#[cfg(unix)]
#[test]
fn pipe_opened_by_path_decompresses() {
    let (dir, _, content) = make_temp_input();
    let packed = lzo1x::compress_best(&content);

    let out = run_with_stdin(dir.path(), &["/dev/stdin"], &packed);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, content);

    let out = run_with_stdin(dir.path(), &["--size", &content.len().to_string(), "/dev/stdin"], &packed);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, content);
}

#[test]
fn levels_produce_valid_streams() {
    let (dir, _, content) = make_temp_input();
    for flag in ["-1", "-2", "-5", "-9", "--fast", "--best"] {
        let out = run_with_stdin(dir.path(), &["-z", flag], &content);
        assert!(out.status.success(), "{flag}");
        assert_eq!(lzo1x::decompress_to_vec(&out.stdout).unwrap(), content, "{flag}");
    }
}

#[test]
fn level_from_environment() {
    let (dir, _, content) = make_temp_input();
    let mut child = Command::new(lzo_bin())
        .arg("-z")
        .env("LZO_CLEVEL", "9")
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&content).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, lzo1x::compress_best(&content));
}

// ── 3. Multiple files ────────────────────────────────────────────────────────

#[test]
fn multiple_files_get_derived_names() {
    let dir = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt"] {
        fs::write(dir.path().join(name), format!("{name} ").repeat(200)).unwrap();
    }
    let out = run(dir.path(), &["-z", "-T", "2", "a.txt", "b.txt", "c.txt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    for name in ["a.txt", "b.txt", "c.txt"] {
        assert!(dir.path().join(format!("{name}.lzo")).exists());
        fs::remove_file(dir.path().join(name)).unwrap();
    }

    let out = run(dir.path(), &["-m", "a.txt.lzo", "b.txt.lzo", "c.txt.lzo"]);
    assert!(out.status.success());
    for name in ["a.txt", "b.txt", "c.txt"] {
        assert_eq!(fs::read_to_string(dir.path().join(name)).unwrap(), format!("{name} ").repeat(200));
    }
}

#[test]
fn concatenated_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("x.lzo"), lzo1x::compress_fast(b"first;")).unwrap();
    fs::write(dir.path().join("y.lzo"), lzo1x::compress_fast(b"second")).unwrap();
    let out = run(dir.path(), &["-c", "x.lzo", "y.lzo"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"first;second");
}

// ── 4. Failures and exit codes ───────────────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let (dir, input, _) = make_temp_input();
    let packed = dir.path().join("out.lzo");
    fs::write(&packed, b"keep me").unwrap();

    let out = run(dir.path(), &["-z", "-o", "out.lzo", input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert_eq!(fs::read(&packed).unwrap(), b"keep me");

    let out = run(dir.path(), &["-z", "-f", "-o", "out.lzo", input.to_str().unwrap()]);
    assert!(out.status.success());
    assert_ne!(fs::read(&packed).unwrap(), b"keep me");
}

#[test]
fn corrupt_input_fails_with_message() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.lzo"), [18u8, b'a', 0x44, 0, 0x11, 0, 0]).unwrap();
    let out = run(dir.path(), &["-c", "bad.lzo"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("lzo: "), "{stderr}");
    assert!(stderr.contains("bad.lzo"), "{stderr}");
}

#[test]
fn size_flag_is_checked() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("s.lzo"), lzo1x::compress_fast(b"12345")).unwrap();
    assert!(run(dir.path(), &["--size", "5", "-c", "s.lzo"]).status.success());
    assert!(!run(dir.path(), &["--size", "6", "-c", "s.lzo"]).status.success());
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["-c", "does-not-exist.lzo"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn bad_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--no-such-flag"]);
    assert!(!out.status.success());
}

#[test]
fn version_and_help_exit_zero() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--version"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("lzo "));
    assert!(run(dir.path(), &["--help"]).status.success());
}

/// Help that cannot be written is a failure, not a silent success.
#[cfg(target_os = "linux")]
#[test]
fn help_to_full_device_fails() {
    let dir = TempDir::new().unwrap();
    let full = fs::OpenOptions::new().write(true).open("/dev/full").unwrap();
    let out = Command::new(lzo_bin())
        .arg("--help")
        .current_dir(dir.path())
        .stdout(full)
        .stderr(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("lzo: "));
}
