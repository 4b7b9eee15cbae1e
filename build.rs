//! Build script to generate the embedded word list
//!
//! Reads `data/words.txt` (one word per line, in round order) and writes a
//! const array. Entries are lowercased; a duplicate or a non-letter entry
//! fails the build so the schedule never silently shifts.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INPUT: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={INPUT}");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let content =
        fs::read_to_string(INPUT).unwrap_or_else(|e| panic!("Failed to read {INPUT}: {e}"));

    let words = schedule_words(&content);
    let source = render(&words);

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

/// Normalized entries in file order
fn schedule_words(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        let word = entry.to_lowercase();
        assert!(
            word.chars().all(char::is_alphabetic),
            "{INPUT}:{}: '{entry}' contains non-letter characters",
            line_no + 1
        );
        assert!(
            seen.insert(word.clone()),
            "{INPUT}:{}: duplicate word '{word}'",
            line_no + 1
        );
        words.push(word);
    }

    assert!(!words.is_empty(), "{INPUT} contains no words");
    words
}

fn render(words: &[String]) -> String {
    let mut source = String::new();
    let _ = writeln!(source, "// Generated from {INPUT}");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// Default word list, in round order");
    let _ = writeln!(source, "pub const WORDS: &[&str] = &[");
    for word in words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// Number of words in WORDS");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len());
    source
}
