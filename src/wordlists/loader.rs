//! Word list loading utilities
//!
//! Reads newline-delimited word lists into memory.

use super::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Read words from any buffered source
///
/// Each line is trimmed and lowercased. Blank lines are skipped; order and
/// duplicates are kept.
///
/// # Errors
///
/// Returns an I/O error if reading from the source fails.
///
/// # Examples
/// ```
/// use word_hand::wordlists::loader::load_words;
///
/// let words = load_words("Cat\n  dog \n\nCAT\n".as_bytes()).unwrap();
/// assert_eq!(words, ["cat", "dog", "cat"]);
/// ```
pub fn load_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_hand::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening word list");
    let file = File::open(path)?;
    load_words(BufReader::new(file))
}

/// Load a dictionary from a file behind a terminal spinner
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn load_with_progress<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading word list from file...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let words = match load_from_file(&path) {
        Ok(words) => words,
        Err(e) => {
            spinner.abandon_with_message("Failed to load word list");
            return Err(e);
        }
    };

    let loaded = words.len();
    let dictionary = Dictionary::from_words(words);
    info!(loaded, unique = dictionary.len(), "word list loaded");
    spinner.finish_with_message(format!("{loaded} words loaded."));

    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_words_normalizes_case_and_whitespace() {
        let words = load_words("  Apple\nBANANA  \n\tcherry\n".as_bytes()).unwrap();
        assert_eq!(words, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn load_words_keeps_duplicates_and_order() {
        let words = load_words("zebra\nant\nzebra\n".as_bytes()).unwrap();
        assert_eq!(words, ["zebra", "ant", "zebra"]);
    }

    #[test]
    fn load_words_skips_blank_lines() {
        let words = load_words("\n\ncat\n   \r\ndog".as_bytes()).unwrap();
        assert_eq!(words, ["cat", "dog"]);
    }

    #[test]
    fn load_words_empty() {
        let words = load_words("".as_bytes()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_file_reads_words() -> io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "cat")?;
        writeln!(file, "Dog")?;
        writeln!(file, "sand")?;

        let words = load_from_file(file.path())?;
        assert_eq!(words, ["cat", "dog", "sand"]);
        Ok(())
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_with_progress_builds_dictionary() -> io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "cat")?;
        writeln!(file, "CAT")?;
        writeln!(file, "dog")?;

        let dictionary = load_with_progress(file.path())?;
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("dog"));
        Ok(())
    }

    #[test]
    fn load_with_progress_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_with_progress(dir.path().join("nope.txt")).is_err());
    }
}
