// Joseph Prichard
// 10/16/2026
// Utilities for files, sizes, and conversions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use rand::{distributions::Alphanumeric, Rng};

pub fn get_size_of<T>(_: T) -> usize {
    std::mem::size_of::<T>()
}

// converts a string to a u64 in bytes
pub const fn str_to_u64(str: &str) -> u64 {
    let mut buffer = [0u8; 8];
    let mut i = 0;
    // converts a string to a buffer
    while i < str.len() && i < 8 {
        buffer[i] = str.as_bytes()[i];
        i += 1;
    }
    // converts a buffer to a u64
    u64::from_le_bytes(buffer)
}

// appends an extension to the full file name, keeping any existing extension
pub fn with_added_ext(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

// strips the extension if it matches, otherwise appends the fallback extension
pub fn strip_or_add_ext(path: &Path, ext: &str, fallback: &str) -> PathBuf {
    match path.extension() {
        Some(e) if e == ext => path.with_extension(""),
        _ => with_added_ext(path, fallback),
    }
}

pub fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}

// Writes `data` to a randomly named sibling file and renames it over `path`, so a failed
// write never leaves a partial output behind.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let file_name = path.file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{} is not a file path", path.display())))?;
    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(format!(".{}.tmp", random_name()));
    let temp_path = path.with_file_name(temp_name);

    let result = fs::write(&temp_path, data).and_then(|_| fs::rename(&temp_path, path));
    if result.is_err() {
        // the temp file may not exist if the write itself failed
        let _ = fs::remove_file(&temp_path);
    }
    result
}

pub fn random_dir() -> PathBuf {
    std::env::temp_dir().join(format!("huffpack-{}", random_name()))
}

pub fn create_temp_file(dir: &Path, data: &[u8]) -> io::Result<PathBuf> {
    let name = dir.join(random_name());
    fs::write(&name, data)?;
    Ok(name)
}

pub fn teardown_temp_dir(dir: &Path) -> io::Result<()> {
    fs::remove_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_to_u64() {
        assert_eq!(str_to_u64("hello"), 478560413032);
        assert_eq!(str_to_u64("world"), 431316168567);
    }

    #[test]
    fn test_get_size_of() {
        assert_eq!(get_size_of(0u16), 2);
        assert_eq!(get_size_of(0u64), 8);
    }

    #[test]
    fn test_ext_naming() {
        assert_eq!(with_added_ext(Path::new("foo.txt"), "hpk"), PathBuf::from("foo.txt.hpk"));
        assert_eq!(strip_or_add_ext(Path::new("foo.txt.hpk"), "hpk", "out"), PathBuf::from("foo.txt"));
        assert_eq!(strip_or_add_ext(Path::new("foo.bin"), "hpk", "out"), PathBuf::from("foo.bin.out"));
        assert_eq!(strip_or_add_ext(Path::new("foo"), "hpk", "out"), PathBuf::from("foo.out"));
    }

    #[test]
    fn test_write_atomic() {
        let dir = random_dir();
        fs::create_dir(&dir).expect("Cannot create temp dir");

        let path = dir.join("out.bin");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        // only the final file remains, no temp files are left behind
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);

        // writing into a missing directory fails and creates nothing
        let missing = dir.join("missing").join("out.bin");
        assert!(write_atomic(&missing, b"data").is_err());
        assert!(!missing.exists());

        teardown_temp_dir(&dir).expect("Cannot delete temp dir");
    }

    #[test]
    fn test_temp_files() {
        let dir = random_dir();
        fs::create_dir(&dir).expect("Cannot create temp dir");
        let file = create_temp_file(&dir, b"abc").unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"abc");
        teardown_temp_dir(&dir).expect("Cannot delete temp dir");
        assert!(!dir.exists());
    }
}
