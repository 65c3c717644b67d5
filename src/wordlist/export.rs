//! Download rendering of a generated wordlist.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordlistFormat {
    #[default]
    Txt,
    Csv,
}

impl WordlistFormat {
    pub fn extension(self) -> &'static str {
        match self {
            WordlistFormat::Txt => "txt",
            WordlistFormat::Csv => "csv",
        }
    }
}

/// A rendered wordlist ready to hand to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: String,
    pub format: WordlistFormat,
    /// Number of words in the artifact.
    pub size: usize,
    pub content: String,
}

impl DownloadArtifact {
    pub fn new(words: &[String], filename_base: &str, format: WordlistFormat) -> Self {
        Self {
            filename: sanitize_filename(filename_base, format),
            format,
            size: words.len(),
            content: render_wordlist(words, format),
        }
    }

    /// Content length in bytes.
    pub fn file_size(&self) -> usize {
        self.content.len()
    }
}

/// `txt`: one word per line. `csv`: `password,length` header, every word quoted.
pub fn render_wordlist(words: &[String], format: WordlistFormat) -> String {
    let mut out = String::new();
    match format {
        WordlistFormat::Txt => {
            for word in words {
                out.push_str(word);
                out.push('\n');
            }
        }
        WordlistFormat::Csv => {
            out.push_str("password,length\n");
            for word in words {
                // writing into a String cannot fail
                let _ = writeln!(
                    out,
                    "\"{}\",{}",
                    word.replace('"', "\"\""),
                    word.chars().count()
                );
            }
        }
    }
    out
}

/// Keeps ASCII letters, digits, `_` and `-`; falls back to `wordlist`.
pub fn sanitize_filename(base: &str, format: WordlistFormat) -> String {
    let stem: String = base
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    let stem = if stem.is_empty() { "wordlist".to_string() } else { stem };
    format!("{}.{}", stem, format.extension())
}
