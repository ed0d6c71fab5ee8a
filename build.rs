//! Embeds the answer and guess lists
//!
//! Each list in `data/` holds one five-letter word per line; `#` starts a comment line.
//! The script checks every entry and writes a slice constant plus its length to `OUT_DIR`.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

const WORD_LENGTH: usize = 5;

struct WordList {
    source: &'static str,
    target: &'static str,
    name: &'static str,
    doc: &'static str,
}

const LISTS: [WordList; 2] = [
    WordList {
        source: "data/answers.txt",
        target: "answers.rs",
        name: "ANSWERS",
        doc: "Daily answers, in rotation order",
    },
    WordList {
        source: "data/allowed.txt",
        target: "allowed.rs",
        name: "ALLOWED",
        doc: "Words accepted as guesses that never come up as answers",
    },
];

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));

    for list in &LISTS {
        println!("cargo:rerun-if-changed={}", list.source);
        let words = read_words(list.source);
        fs::write(out_dir.join(list.target), render(list, &words))
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", list.target));
    }
}

/// Lowercased entries of `path`, panicking on anything that is not a five-letter word
fn read_words(path: &str) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"));

    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                return None;
            }
            assert!(
                entry.len() == WORD_LENGTH && entry.bytes().all(|b| b.is_ascii_alphabetic()),
                "{path}:{}: {entry:?} is not a {WORD_LENGTH}-letter word",
                index + 1
            );
            Some(entry.to_ascii_lowercase())
        })
        .collect()
}

fn render(list: &WordList, words: &[String]) -> String {
    let WordList { source, name, doc, .. } = list;
    let mut code = format!("// Built from {source}\n\n/// {doc}\npub const {name}: &[&str] = &[\n");
    for word in words {
        let _ = writeln!(code, "    {word:?},");
    }
    let _ = write!(
        code,
        "];\n\n/// Length of [`{name}`]\npub const {name}_COUNT: usize = {};\n",
        words.len()
    );
    code
}
