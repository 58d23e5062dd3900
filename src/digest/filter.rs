use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Extensions kept when `--exts` is not given.
pub const DEFAULT_EXTENSIONS: &str = "js,ts,html";

/// Case-insensitive set of file extensions to keep, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated list. Items are trimmed and lower-cased;
    /// empty items are dropped.
    pub fn parse(list: &str) -> Self {
        let extensions = list
            .split(',')
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// The lower-cased extension of `name` if the entry should be digested.
    pub fn select(&self, name: &str) -> Option<String> {
        entry_extension(name).filter(|ext| self.contains(ext))
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::parse(DEFAULT_EXTENSIONS)
    }
}

impl FromStr for ExtensionFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extensions.join(","))
    }
}

/// Lower-cased text after the last `.` of an entry name.
///
/// Directory markers (trailing `/`) and names without any `.` have no
/// extension. The whole path is considered, so `v1.2/README` yields
/// `2/readme`, which no sensible filter matches.
pub fn entry_extension(name: &str) -> Option<String> {
    if name.ends_with('/') {
        return None;
    }
    let lower = name.to_lowercase();
    lower.rsplit_once('.').map(|(_, ext)| ext.to_string())
}
