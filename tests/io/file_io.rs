// Integration tests for source/destination handling.

use std::io::{ErrorKind, Write};

use lzo1x::io::file_io::{open_dst_file, open_src_file, read_src_file};
use lzo1x::io::{Prefs, NUL_MARK};

#[test]
fn source_reports_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data");
    std::fs::write(&path, vec![1u8; 300]).unwrap();
    let src = open_src_file(path.to_str().unwrap()).unwrap();
    assert_eq!(src.len, Some(300));
    assert_eq!(read_src_file(path.to_str().unwrap()).unwrap().len(), 300);
}

#[test]
fn directory_is_not_a_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_src_file(dir.path().to_str().unwrap()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn missing_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");
    let err = open_src_file(path.to_str().unwrap()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn overwrite_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out");
    std::fs::write(&path, b"old").unwrap();
    let name = path.to_str().unwrap();

    let err = open_dst_file(name, &Prefs::new()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    let mut prefs = Prefs::new();
    prefs.set_overwrite(true);
    let mut dst = open_dst_file(name, &prefs).unwrap();
    dst.write_all(b"new").unwrap();
    dst.flush().unwrap();
    drop(dst);
    assert_eq!(std::fs::read(&path).unwrap(), b"new");
}

#[test]
fn null_device_swallows_output() {
    let mut dst = open_dst_file(NUL_MARK, &Prefs::new()).unwrap();
    dst.write_all(b"discarded").unwrap();
    dst.flush().unwrap();
}
