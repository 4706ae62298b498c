use anagram_finder::config::toml_config::TomlConfig;
use anagram_finder::{AnagramError, CliConfig, FilePipeline, JobRunner, LocalStorage};
use clap::Parser;
use tempfile::TempDir;

fn output_lines(dir: &TempDir, name: &str) -> Vec<String> {
    std::fs::read_to_string(dir.path().join(name))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_end_to_end_with_input_and_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("words.txt"),
        "listen\nsilent\n  enlist  \nabc\ngod\ndog\ncat\nlisten\n",
    )
    .unwrap();

    let config = CliConfig::parse_from(["anagrams", "words.txt", "groups.txt"]);
    let storage = LocalStorage::new(temp_dir.path());
    let runner = JobRunner::new(FilePipeline::new(storage, config));

    let output_path = runner.run().await.unwrap();

    assert_eq!(output_path, "groups.txt");
    let lines = output_lines(&temp_dir, "groups.txt");
    assert_eq!(lines, vec!["dog god ", "enlist listen silent "]);
}

#[tokio::test]
async fn test_single_argument_writes_default_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("words.txt"), "ab\nba\n").unwrap();

    let config = CliConfig::parse_from(["anagrams", "words.txt"]);
    let runner = JobRunner::new(FilePipeline::new(LocalStorage::new(temp_dir.path()), config));

    runner.run().await.unwrap();

    assert_eq!(output_lines(&temp_dir, "output.txt"), vec!["ab ba "]);
}

#[tokio::test]
async fn test_empty_input_gives_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("empty.txt"), "").unwrap();

    let config = CliConfig::parse_from(["anagrams", "empty.txt", "out.txt"]);
    let runner = JobRunner::new(FilePipeline::new(LocalStorage::new(temp_dir.path()), config));

    runner.run().await.unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert!(content.is_empty());
}

#[tokio::test]
async fn test_duplicates_and_case_produce_no_groups() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("in.txt"), "a\na\nGod\ndog\n").unwrap();

    let config = CliConfig::parse_from(["anagrams", "in.txt", "out.txt"]);
    let runner = JobRunner::new(FilePipeline::new(LocalStorage::new(temp_dir.path()), config));

    runner.run().await.unwrap();

    assert!(output_lines(&temp_dir, "out.txt").is_empty());
}

#[tokio::test]
async fn test_missing_input_reports_read_error() {
    let temp_dir = TempDir::new().unwrap();

    let config = CliConfig::parse_from(["anagrams", "nope.txt", "out.txt"]);
    let runner = JobRunner::new(FilePipeline::new(LocalStorage::new(temp_dir.path()), config));

    let err = runner.run().await.unwrap_err();

    assert!(matches!(err, AnagramError::ReadError { .. }));
    assert!(err.to_string().starts_with("Error reading the file nope.txt"));
}

#[tokio::test]
async fn test_no_input_generates_test_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = CliConfig::parse_from([
        "anagrams",
        "--word-count",
        "2000",
        "--max-word-length",
        "4",
        "--seed",
        "17",
    ]);
    let runner = JobRunner::new(FilePipeline::new(LocalStorage::new(temp_dir.path()), config));

    let output_path = runner.run().await.unwrap();

    assert_eq!(output_path, "output.txt");
    let generated = std::fs::read_to_string(temp_dir.path().join("test.txt")).unwrap();
    assert_eq!(generated.lines().count(), 2000);

    // 2000 words of at most 3 letters cannot all be distinct anagram classes
    let lines = output_lines(&temp_dir, "output.txt");
    assert!(!lines.is_empty());
    for line in lines {
        assert!(line.ends_with(' '));
        let words: Vec<&str> = line.split_whitespace().collect();
        assert!(words.len() >= 2);
        let mut first: Vec<char> = words[0].chars().collect();
        first.sort();
        for word in &words[1..] {
            let mut chars: Vec<char> = word.chars().collect();
            chars.sort();
            assert_eq!(chars, first);
        }
    }
}

#[tokio::test]
async fn test_toml_config_drives_run() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("words.txt"), "tea\neat\nate\nbee\n").unwrap();

    let config = TomlConfig::from_toml_str(
        r#"
[input]
path = "words.txt"

[output]
path = "toml-out.txt"
"#,
    )
    .unwrap();
    let runner = JobRunner::new(FilePipeline::new(LocalStorage::new(temp_dir.path()), config));

    runner.run().await.unwrap();

    assert_eq!(output_lines(&temp_dir, "toml-out.txt"), vec!["ate eat tea "]);
}
