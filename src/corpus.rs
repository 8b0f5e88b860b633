use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

static WORDS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/words");

/// A cached word list the session samples targets from. Loaded once at
/// startup; generation only ever re-samples, never re-reads.
#[derive(Deserialize, Clone, Debug)]
pub struct Corpus {
    pub name: String,
    pub size: usize,
    pub words: Vec<String>,
}

/// The session cannot produce a target from an empty word list, so an
/// empty corpus is a fatal bootstrap error rather than a runtime one.
#[derive(Debug)]
pub enum CorpusError {
    NotFound(String),
    Empty(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::NotFound(name) => write!(f, "corpus `{name}` not found"),
            CorpusError::Empty(name) => write!(f, "corpus `{name}` contains no words"),
            CorpusError::Io(e) => write!(f, "unable to read word list: {e}"),
            CorpusError::Parse(e) => write!(f, "unable to parse corpus: {e}"),
        }
    }
}

impl Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}

impl Corpus {
    /// Load one of the corpora compiled into the binary (`words/<name>.json`).
    pub fn embedded(name: &str) -> Result<Self, CorpusError> {
        let file = WORDS_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| CorpusError::NotFound(name.to_string()))?;

        let contents = file
            .contents_utf8()
            .ok_or_else(|| CorpusError::NotFound(name.to_string()))?;

        let corpus: Corpus = serde_json::from_str(contents).map_err(CorpusError::Parse)?;
        corpus.ensure_non_empty()
    }

    /// Load a user-supplied word list: a newline-separated plain-text file,
    /// read wholesale and trimmed. Blank lines are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let words: Vec<String> = contents
            .trim()
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());

        Corpus {
            name,
            size: words.len(),
            words,
        }
        .ensure_non_empty()
    }

    fn ensure_non_empty(self) -> Result<Self, CorpusError> {
        if self.words.is_empty() {
            return Err(CorpusError::Empty(self.name));
        }
        Ok(self)
    }

    /// Draw `n` words independently and uniformly, with replacement,
    /// lower-cased. The generator is an explicit dependency so callers can
    /// seed it for deterministic sampling.
    pub fn sample<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| self.words[rng.gen_range(0..self.words.len())].to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_embedded_english() {
        let corpus = Corpus::embedded("english").unwrap();

        assert_eq!(corpus.name, "english");
        assert!(!corpus.words.is_empty());
        assert_eq!(corpus.size, corpus.words.len());
    }

    #[test]
    fn test_embedded_programming() {
        let corpus = Corpus::embedded("programming").unwrap();

        assert_eq!(corpus.name, "programming");
        assert!(!corpus.words.is_empty());
    }

    #[test]
    fn test_embedded_missing_corpus() {
        let err = Corpus::embedded("klingon").unwrap_err();
        assert!(matches!(err, CorpusError::NotFound(_)));
    }

    #[test]
    fn test_from_file_newline_separated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta\n\n  gamma  \n").unwrap();

        let corpus = Corpus::from_file(file.path()).unwrap();

        assert_eq!(corpus.words, vec!["alpha", "beta", "gamma"]);
        assert_eq!(corpus.size, 3);
    }

    #[test]
    fn test_from_file_empty_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();

        let err = Corpus::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Empty(_)));
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Corpus::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
    }

    #[test]
    fn test_sample_draws_requested_count() {
        let corpus = Corpus::embedded("english").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let words = corpus.sample(&mut rng, 25);
        assert_eq!(words.len(), 25);
        for word in &words {
            assert!(corpus.words.iter().any(|w| w.to_lowercase() == *word));
        }
    }

    #[test]
    fn test_sample_is_lowercase() {
        let corpus = Corpus {
            name: "caps".into(),
            size: 2,
            words: vec!["Hello".into(), "WORLD".into()],
        };
        let mut rng = StdRng::seed_from_u64(1);

        for word in corpus.sample(&mut rng, 10) {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn test_sample_with_replacement_from_single_word() {
        let corpus = Corpus {
            name: "one".into(),
            size: 1,
            words: vec!["only".into()],
        };
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(corpus.sample(&mut rng, 4), vec!["only"; 4]);
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let corpus = Corpus::embedded("english").unwrap();

        let a = corpus.sample(&mut StdRng::seed_from_u64(42), 10);
        let b = corpus.sample(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
    }
}
