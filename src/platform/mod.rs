//! The closed catalog of native target platforms.
//!
//! A [`Platform`] is an operating system plus a pointer width. The catalog is
//! fixed: exactly four platforms exist for the lifetime of a build, and
//! unknown OS/architecture combinations fail fast instead of silently
//! defaulting.
//!
//! Each platform also maps onto the classifier strings of three external
//! artifact-naming schemes (WPILib, JavaCPP, JavaFX). Those mappings are
//! total functions; because the catalog is closed they have no error case.

use std::fmt;

use crate::error::PlatformError;

/// A supported operating-system-plus-architecture target for native builds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    /// 32-bit Windows
    Win32,
    /// 64-bit Windows
    Win64,
    /// 64-bit macOS
    Mac,
    /// 64-bit Linux
    Linux,
}

impl Platform {
    /// Every member of the catalog, in declaration order.
    pub const ALL: [Platform; 4] = [
        Platform::Win32,
        Platform::Win64,
        Platform::Mac,
        Platform::Linux,
    ];

    /// Returns the identity name of this platform.
    ///
    /// This is the token used to name dependency buckets and to select a
    /// platform from build scripts and config files.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Win64 => "win64",
            Platform::Mac => "mac64",
            Platform::Linux => "linux64",
        }
    }

    /// Looks up a platform by its identity name.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::UnknownPlatform`] when the name matches no
    /// catalog member.
    pub fn for_name(name: &str) -> Result<Platform, PlatformError> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.name() == name)
            .ok_or_else(|| PlatformError::UnknownPlatform {
                name: name.to_string(),
            })
    }

    /// Resolves a platform from an OS name and an architecture string.
    ///
    /// This is a pure function of its inputs. OS names are matched by
    /// case-insensitive substring (windows/mac/linux); architectures are
    /// matched by substring, with `x86_64` and `amd64` mapping to the 64-bit
    /// variants and any other `x86` string mapping to the 32-bit ones.
    ///
    /// # Errors
    ///
    /// Fails when either string matches no recognized pattern, or when the
    /// recognized combination names no catalog member (32-bit mac or linux).
    pub fn from_os_and_arch(os_name: &str, arch: &str) -> Result<Platform, PlatformError> {
        let lowered = os_name.to_lowercase();
        let os = if lowered.contains("windows") {
            "win"
        } else if lowered.contains("mac") {
            "mac"
        } else if lowered.contains("linux") {
            "linux"
        } else {
            return Err(PlatformError::UnsupportedOs {
                os: os_name.to_string(),
            });
        };

        // Check the 64-bit substrings first: "x86_64" also contains "x86".
        let bits = if arch.contains("x86_64") || arch.contains("amd64") {
            "64"
        } else if arch.contains("x86") {
            "32"
        } else {
            return Err(PlatformError::UnsupportedArch {
                arch: arch.to_string(),
            });
        };

        Platform::for_name(&format!("{os}{bits}")).map_err(|_| PlatformError::UnsupportedPlatform {
            os: os_name.to_string(),
            arch: arch.to_string(),
        })
    }

    /// Resolves the platform of the machine running the build.
    ///
    /// # Errors
    ///
    /// Fails when the host OS or architecture is outside the catalog.
    pub fn build_platform() -> Result<Platform, PlatformError> {
        Platform::from_os_and_arch(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Returns the classifier for a platform-specific WPILib artifact.
    pub fn wpilib_classifier(self) -> &'static str {
        match self {
            Platform::Win32 => "windowsx86",
            Platform::Win64 => "windowsx86-64",
            Platform::Mac => "osxx86-64",
            Platform::Linux => "linuxx86-64",
        }
    }

    /// Returns the classifier for a platform-specific JavaCPP artifact.
    pub fn javacpp_classifier(self) -> &'static str {
        match self {
            Platform::Win32 => "windows-x86",
            Platform::Win64 => "windows-x86_64",
            Platform::Mac => "macosx-x86_64",
            Platform::Linux => "linux-x86_64",
        }
    }

    /// Returns the classifier for a platform-specific JavaFX artifact.
    pub fn javafx_classifier(self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Win64 => "win",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
