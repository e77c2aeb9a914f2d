// Integration tests for file-level compression and decompression.
//
// Coverage:
//   - single-file round-trip at fast and high levels
//   - derived output names
//   - expected-size checking
//   - multi-file runs on the worker pool, with one failing input

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use lzo1x::hc::CompressionLevel;
use lzo1x::io::{
    compress_filename, compress_multiple_filenames, compressed_name, decompress_filename,
    decompress_multiple_filenames, decompressed_name, Prefs,
};

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn single_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input.txt");
    let packed = dir.path().join("input.txt.lzo");
    let restored = dir.path().join("restored.txt");
    let content = "file level round trip\n".repeat(400);
    fs::write(&src, &content).unwrap();

    for level in [CompressionLevel::Fast, CompressionLevel::High(6)] {
        let mut prefs = Prefs::new();
        prefs.set_overwrite(true);
        let c = compress_filename(s(&src), s(&packed), level, &prefs).unwrap();
        assert_eq!(c.bytes_in, content.len() as u64);
        assert!(c.bytes_out < c.bytes_in);

        let d = decompress_filename(s(&packed), s(&restored), &prefs).unwrap();
        assert_eq!(d.bytes_in, c.bytes_out);
        assert_eq!(fs::read_to_string(&restored).unwrap(), content);
    }
}

#[test]
fn names() {
    assert_eq!(compressed_name("x"), "x.lzo");
    assert_eq!(decompressed_name("x.lzo").unwrap(), "x");
    assert_eq!(decompressed_name("x.gz").unwrap_err().kind(), ErrorKind::InvalidInput);
}

#[test]
fn expected_size_is_checked() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("a");
    let packed = dir.path().join("a.lzo");
    fs::write(&src, vec![9u8; 1000]).unwrap();
    compress_filename(s(&src), s(&packed), CompressionLevel::Fast, &Prefs::new()).unwrap();

    let mut prefs = Prefs::new();
    prefs.set_expected_size(999);
    let out = dir.path().join("a.out");
    let err = decompress_filename(s(&packed), s(&out), &prefs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    prefs.set_expected_size(1000);
    decompress_filename(s(&packed), s(&out), &prefs).unwrap();
    assert_eq!(fs::read(&out).unwrap(), vec![9u8; 1000]);
}

#[test]
fn truncated_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("t");
    let packed = dir.path().join("t.lzo");
    fs::write(&src, "truncation ".repeat(100)).unwrap();
    compress_filename(s(&src), s(&packed), CompressionLevel::Fast, &Prefs::new()).unwrap();

    let bytes = fs::read(&packed).unwrap();
    fs::write(&packed, &bytes[..bytes.len() - 1]).unwrap();
    let out = dir.path().join("t.out");
    let err = decompress_filename(s(&packed), s(&out), &Prefs::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(!out.exists());
}

#[test]
fn multiple_files_on_pool() {
    let dir = tempfile::tempdir().unwrap();
    let mut names = Vec::new();
    for i in 0..6 {
        let p = dir.path().join(format!("f{i}.txt"));
        fs::write(&p, format!("file number {i} ").repeat(100 + i)).unwrap();
        names.push(s(&p).to_owned());
    }
    let mut prefs = Prefs::new();
    prefs.set_nb_workers(3);

    let missed = compress_multiple_filenames(&names, CompressionLevel::High(5), &prefs).unwrap();
    assert_eq!(missed, 0);

    let packed: Vec<String> = names.iter().map(|n| compressed_name(n)).collect();
    for n in &names {
        fs::remove_file(n).unwrap();
    }
    let mut with_missing = packed.clone();
    with_missing.push(s(&dir.path().join("missing.lzo")).to_owned());

    let missed = decompress_multiple_filenames(&with_missing, &prefs).unwrap();
    assert_eq!(missed, 1);
    for (i, n) in names.iter().enumerate() {
        assert_eq!(fs::read_to_string(n).unwrap(), format!("file number {i} ").repeat(100 + i));
    }
}
