//! Locating the JDK tools the pipeline shells out to.

use std::path::{Path, PathBuf};

use super::error::{Error, Result};

/// A JDK installation, reduced to the `bin` directory holding its tools.
#[derive(Clone, Debug)]
pub struct JavaToolchain {
    bin: PathBuf,
}

impl JavaToolchain {
    /// Builds a toolchain from a JDK home directory.
    pub fn from_java_home(home: impl Into<PathBuf>) -> Self {
        Self {
            bin: home.into().join("bin"),
        }
    }

    /// Locates a JDK from the environment.
    ///
    /// Prefers `JAVA_HOME`; falls back to finding `jlink` on the `PATH` and
    /// using its parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolchainNotFound`] when neither source yields a JDK.
    pub fn detect() -> Result<Self> {
        if let Ok(home) = std::env::var("JAVA_HOME")
            && !home.is_empty()
        {
            return Ok(Self::from_java_home(home));
        }
        let jlink = which::which("jlink").map_err(|_| Error::ToolchainNotFound)?;
        let bin = jlink.parent().ok_or(Error::ToolchainNotFound)?;
        Ok(Self {
            bin: bin.to_path_buf(),
        })
    }

    /// Returns the path to the jlink tool.
    pub fn jlink(&self) -> PathBuf {
        self.tool("jlink")
    }

    /// Returns the path to the jdeps tool.
    pub fn jdeps(&self) -> PathBuf {
        self.tool("jdeps")
    }

    fn tool(&self, name: &str) -> PathBuf {
        let mut path = self.bin.join(name);
        if cfg!(target_os = "windows") {
            path.set_extension("exe");
        }
        path
    }
}

impl AsRef<Path> for JavaToolchain {
    fn as_ref(&self) -> &Path {
        &self.bin
    }
}
