//! Named bit patterns used to compose boundary conditions.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::read_and_join;

/// Maps pattern names to their bit strings.
#[derive(Debug, Default, Clone)]
pub struct PatternLibrary {
    patterns: HashMap<String, String>,
}

impl PatternLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every regular file in `dir`. The file name is the pattern name
    /// and the joined lines of the file are its bits.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut library = Self::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                return Err(Error::Validation(format!(
                    "pattern file name is not valid UTF-8: {}",
                    path.display()
                )));
            };
            library.insert(name, read_and_join(&path)?)?;
        }
        Ok(library)
    }

    /// Adds a pattern. Names must be unique.
    pub fn insert(&mut self, name: impl Into<String>, bits: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.patterns.contains_key(&name) {
            return Err(Error::Validation(format!("duplicate pattern {name:?}")));
        }
        self.patterns.insert(name, bits.into());
        Ok(())
    }

    /// Looks up a pattern's bits.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.patterns
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::NotFound(name.to_owned()))
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if no patterns are loaded.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PatternLibrary {
    /// Later duplicates replace earlier ones; use [`PatternLibrary::insert`]
    /// to reject them instead.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            patterns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One parsed token of a composition spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRef {
    pub repeats: usize,
    pub name: String,
}

/// Splits a composition spec into pattern references.
///
/// Accepts `name`, `N name` and `Nname`; repeat counts must be positive.
pub fn parse_composition(spec: &str) -> Result<Vec<PatternRef>> {
    let mut refs = vec![];
    let mut tokens = spec.split_whitespace();
    while let Some(token) = tokens.next() {
        let digits = token.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            refs.push(PatternRef {
                repeats: 1,
                name: token.to_owned(),
            });
            continue;
        }

        let (count, rest) = token.split_at(digits);
        let repeats: usize = count
            .parse()
            .map_err(|_| Error::Validation(format!("repeat count {count:?} is too large")))?;
        if repeats == 0 {
            return Err(Error::Validation(format!(
                "repeat count must be positive in {token:?}"
            )));
        }
        let name = if rest.is_empty() {
            tokens.next().ok_or_else(|| {
                Error::Validation(format!("repeat count {count} is not followed by a pattern"))
            })?
        } else {
            rest
        };
        refs.push(PatternRef {
            repeats,
            name: name.to_owned(),
        });
    }
    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(repeats: usize, name: &str) -> PatternRef {
        PatternRef {
            repeats,
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_parse_tokens() {
        let refs = parse_composition("2 glider other\n 3ether\tA").unwrap();
        assert_eq!(
            refs,
            vec![
                pattern(2, "glider"),
                pattern(1, "other"),
                pattern(3, "ether"),
                pattern(1, "A"),
            ]
        );
        assert!(parse_composition("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_counts() {
        assert!(matches!(
            parse_composition("0 glider"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            parse_composition("glider 4"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_library_lookup() {
        let mut library: PatternLibrary = [("glider", "10")].into_iter().collect();
        assert_eq!(library.get("glider").unwrap(), "10");
        assert!(matches!(library.get("missing"), Err(Error::NotFound(n)) if n == "missing"));
        assert!(matches!(
            library.insert("glider", "11"),
            Err(Error::Validation(_))
        ));
        library.insert("other", "0").unwrap();
        assert_eq!(library.names(), ["glider", "other"]);
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ether"), "1111100\n0100110\n").unwrap();
        fs::write(dir.path().join("A"), "111110").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let library = PatternLibrary::load(dir.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.get("ether").unwrap(), "11111000100110");
        assert_eq!(library.get("A").unwrap(), "111110");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_load_rejects_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ether"), "1111100").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"gl\xffider")), "10").unwrap();

        match PatternLibrary::load(dir.path()) {
            Err(Error::Validation(msg)) => assert!(msg.contains("not valid UTF-8"), "{msg}"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            PatternLibrary::load(dir.path().join("absent")),
            Err(Error::Io { .. })
        ));
    }
}
