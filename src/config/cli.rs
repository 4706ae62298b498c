use crate::core::{Group, Storage, WordSet};
use crate::utils::error::{AnagramError, Result};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

/// Files on the local disk. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }

    async fn write_lines<L>(&self, path: &str, lines: &[L]) -> std::io::Result<()>
    where
        L: AsRef<str> + Sync,
    {
        let full_path = self.resolve(path);
        let mut writer = BufWriter::new(File::create(&full_path).await?);
        for line in lines {
            writer.write_all(line.as_ref().as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.shutdown().await
    }
}

/// Splits one `\n`-terminated chunk into lines. A lone `\r` also ends a
/// line, and bytes that are not UTF-8 decode to U+FFFD.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = Cow<'_, str>> {
    let body = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    body.split(|&b| b == b'\r').map(String::from_utf8_lossy)
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_words(&self, path: &str) -> Result<WordSet> {
        let full_path = self.resolve(path);
        let file = File::open(&full_path)
            .await
            .map_err(|e| AnagramError::read(path, e))?;

        let mut reader = BufReader::new(file);
        let mut chunk = Vec::new();
        let mut words = WordSet::new();
        let mut line_count = 0usize;
        loop {
            chunk.clear();
            let read = reader
                .read_until(b'\n', &mut chunk)
                .await
                .map_err(|e| AnagramError::read(path, e))?;
            if read == 0 {
                break;
            }
            for line in split_lines(&chunk) {
                words.insert_line(&line);
                line_count += 1;
            }
        }

        tracing::debug!(
            "Read {} lines ({} distinct) from {}",
            line_count,
            words.len(),
            full_path.display()
        );
        Ok(words)
    }

    async fn write_groups(&self, path: &str, groups: &[Group]) -> Result<()> {
        tracing::debug!("Writing {} groups to {}", groups.len(), path);
        let lines: Vec<String> = groups.iter().map(Group::to_line).collect();
        self.write_lines(path, &lines)
            .await
            .map_err(|e| AnagramError::write(path, e))
    }

    async fn write_words(&self, path: &str, words: &[String]) -> Result<()> {
        self.write_lines(path, words)
            .await
            .map_err(|e| AnagramError::generate(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_words_trims_and_deduplicates() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("in.txt"), "dog\n  god \ndog\ncat\r\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let words = storage.read_words("in.txt").await.unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("god"));
        assert!(words.contains("cat"));
    }

    #[tokio::test]
    async fn test_read_words_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("in.txt"), b"dog\ngod\ncaf\xe9\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let words = storage.read_words("in.txt").await.unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("caf\u{FFFD}"));
        let groups = crate::AnagramEngine::new().run(&words);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].words(), ["dog", "god"]);
    }

    #[tokio::test]
    async fn test_read_words_splits_on_carriage_return_and_trims_controls() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("in.txt"), b"dog\rgod\nab\x01\nba\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let words = storage.read_words("in.txt").await.unwrap();

        assert_eq!(words.to_vec(), ["ab", "ba", "dog", "god"]);
        let lines: Vec<String> = crate::AnagramEngine::new()
            .run(&words)
            .iter()
            .map(Group::to_line)
            .collect();
        assert_eq!(lines, ["ab ba ", "dog god "]);
    }

    #[test]
    fn test_split_lines_terminators() {
        let split = |bytes: &[u8]| -> Vec<String> {
            split_lines(bytes).map(Cow::into_owned).collect()
        };
        assert_eq!(split(b"abc\n"), ["abc"]);
        assert_eq!(split(b"abc\r\n"), ["abc"]);
        assert_eq!(split(b"abc"), ["abc"]);
        assert_eq!(split(b"abc\r"), ["abc"]);
        assert_eq!(split(b"a\rb\n"), ["a", "b"]);
        assert_eq!(split(b"a\r\r\n"), ["a", ""]);
        assert_eq!(split(b"\n"), [""]);
    }

    #[test]
    fn test_storage_futures_are_send() {
        fn assert_send<T: Send>(_: &T) {}

        let storage = LocalStorage::default();
        let groups: Vec<Group> = Vec::new();
        let words: Vec<String> = Vec::new();
        assert_send(&storage.read_words("in.txt"));
        assert_send(&storage.write_groups("out.txt", &groups));
        assert_send(&storage.write_words("gen.txt", &words));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_words("missing.txt").await.unwrap_err();
        assert!(matches!(err, AnagramError::ReadError { ref path, .. } if path == "missing.txt"));
    }

    #[tokio::test]
    async fn test_write_groups_format() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let groups = crate::AnagramEngine::new().group_words(&["dog", "god", "tac", "cat"]);

        storage.write_groups("out.txt", &groups).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(content, "tac cat \ndog god \n");
    }

    #[tokio::test]
    async fn test_write_no_groups_gives_empty_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_groups("out.txt", &[]).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage
            .write_groups("no/such/dir/out.txt", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AnagramError::WriteError { .. }));
    }

    #[tokio::test]
    async fn test_write_words_one_per_line() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let words = vec!["ab".to_string(), String::new(), "c".to_string()];

        storage.write_words("gen.txt", &words).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("gen.txt")).unwrap();
        assert_eq!(content, "ab\n\nc\n");
    }
}
