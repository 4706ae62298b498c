use std::collections::BTreeSet;
use std::fmt;

/// Characters of a word in ascending code-point order. Two words are
/// anagrams iff their signatures are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(Vec<char>);

impl Signature {
    /// Wraps characters that are already in ascending order.
    pub(crate) fn from_sorted(chars: Vec<char>) -> Self {
        debug_assert!(chars.windows(2).all(|w| w[0] <= w[1]));
        Self(chars)
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The signature read back as a word.
    pub fn as_word(&self) -> String {
        self.0.iter().collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_word())
    }
}

/// Words sharing one signature, at least two of them, in the order the
/// stable sort left them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    signature: Signature,
    words: Vec<String>,
}

impl Group {
    pub(crate) fn new(signature: Signature, words: Vec<String>) -> Self {
        debug_assert!(words.len() >= 2);
        Self { signature, words }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Output line for this group: every word followed by one space.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.words.iter().map(|w| w.len() + 1).sum());
        for word in &self.words {
            line.push_str(word);
            line.push(' ');
        }
        line
    }
}

/// Deduplicated, trimmed words.
///
/// Enumeration order is the set's own (lexicographic), not the order the
/// words were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `line` and adds it. Returns false if the word was already present.
    ///
    /// Every character up to U+0020 counts as trimmable, control characters
    /// included; other Unicode whitespace is kept.
    pub fn insert_line(&mut self, line: &str) -> bool {
        self.words.insert(line.trim_matches(|c: char| c <= ' ').to_string())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for line in lines {
            set.insert_line(line.as_ref());
        }
        set
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Fixes the enumeration order into an array.
    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupingResult {
    pub word_count: usize,
    pub groups: Vec<Group>,
}

impl GroupingResult {
    pub fn grouped_word_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}
