//! Loading a corpus from disk.

use shakesearch::{CorpusIndex, LoadError, Searcher};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_reads_and_lowercases_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "THE TRAGEDY OF ROMEO AND JULIET").unwrap();

    let index = CorpusIndex::load(file.path()).unwrap();
    assert_eq!(index.text(), "the tragedy of romeo and juliet");

    let searcher = Searcher::new(index);
    assert_eq!(searcher.search("Juliet", 0, 20).len(), 1);
}

#[test]
fn load_accepts_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let index = CorpusIndex::load(file.path()).unwrap();
    assert!(index.is_empty());
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("completeworks.txt");

    let err = CorpusIndex::load(&path).unwrap_err();
    let LoadError::Read { path: failed, source } = &err;
    assert_eq!(failed, &path);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("completeworks.txt"));
}

#[test]
fn directory_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(CorpusIndex::load(dir.path()).is_err());
}
