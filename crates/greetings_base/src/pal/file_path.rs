use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// Path relative to the PAL's base directory.
///
/// ```
/// use greetings_base::FilePath;
///
/// let config = FilePath::from("greetings.toml");
/// assert_eq!(config.to_string(), "greetings.toml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(RelativePathBuf);

impl FilePath {
    /// Returns the underlying RelativePath.
    pub fn as_relative(&self) -> &RelativePath {
        &self.0
    }

    /// Converts to a regular Path without a base directory.
    pub fn as_path(&self) -> &Path {
        Path::new(self.0.as_str())
    }

    /// Resolves this path against `base`, producing a filesystem path.
    pub fn to_path(&self, base: &Path) -> PathBuf {
        self.as_relative().to_path(base)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self(RelativePathBuf::from(s))
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self(RelativePathBuf::from(s))
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_from_str() {
        let path = FilePath::from("conf/greetings.toml");
        assert_eq!(path.as_path(), Path::new("conf/greetings.toml"));
    }

    #[test]
    fn test_file_path_from_string() {
        let path = FilePath::from(String::from("greetings.toml"));
        assert_eq!(path.as_relative(), RelativePath::new("greetings.toml"));
    }

    #[test]
    fn test_file_path_to_path_joins_base() {
        let path = FilePath::from("conf/greetings.toml");
        let resolved = path.to_path(Path::new("/srv/app"));
        assert_eq!(resolved, Path::new("/srv/app").join("conf").join("greetings.toml"));
    }

    #[test]
    fn test_file_path_display() {
        let path = FilePath::from("conf/greetings.toml");
        assert_eq!(path.to_string(), "conf/greetings.toml");
    }
}
