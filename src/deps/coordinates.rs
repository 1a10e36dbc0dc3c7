//! Artifact coordinate parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::DependencyError;

/// Coordinates of a published artifact: `group:name:version[:classifier]`.
///
/// The classifier is how platform-specific variants of one artifact are told
/// apart; the three classifier schemes on [`crate::platform::Platform`]
/// produce the strings that go in that position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArtifactCoordinates {
    /// Group identifier, e.g. `org.openjfx`
    pub group: String,
    /// Artifact name within the group
    pub name: String,
    /// Version string (wildcards are passed through as written)
    pub version: String,
    /// Optional platform classifier
    pub classifier: Option<String>,
}

impl ArtifactCoordinates {
    /// Builds coordinates with a classifier attached.
    pub fn classified(group: &str, name: &str, version: &str, classifier: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            classifier: Some(classifier.to_string()),
        }
    }
}

impl FromStr for ArtifactCoordinates {
    type Err = DependencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| DependencyError::MalformedCoordinates {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = value.split(':').collect();
        if parts.len() < 3 || parts.len() > 4 {
            return Err(malformed("expected group:name:version[:classifier]"));
        }
        if parts.iter().any(|part| part.is_empty()) {
            return Err(malformed("empty coordinate segment"));
        }

        Ok(Self {
            group: parts[0].to_string(),
            name: parts[1].to_string(),
            version: parts[2].to_string(),
            classifier: parts.get(3).map(|classifier| classifier.to_string()),
        })
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_classifier() {
        let coordinates: ArtifactCoordinates = "org.openjfx:javafx-base:11".parse().unwrap();
        assert_eq!(coordinates.group, "org.openjfx");
        assert_eq!(coordinates.name, "javafx-base");
        assert_eq!(coordinates.version, "11");
        assert_eq!(coordinates.classifier, None);
    }

    #[test]
    fn test_parse_with_classifier() {
        let coordinates: ArtifactCoordinates =
            "org.openjfx:javafx-base:11:linux".parse().unwrap();
        assert_eq!(coordinates.classifier.as_deref(), Some("linux"));
    }

    #[test]
    fn test_too_few_segments_is_malformed() {
        assert!(matches!(
            "org.openjfx:javafx-base".parse::<ArtifactCoordinates>(),
            Err(DependencyError::MalformedCoordinates { .. })
        ));
    }

    #[test]
    fn test_empty_segment_is_malformed() {
        assert!(matches!(
            "org.openjfx::11".parse::<ArtifactCoordinates>(),
            Err(DependencyError::MalformedCoordinates { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for value in ["a:b:1.0", "a:b:1.0:linux-x86_64"] {
            let coordinates: ArtifactCoordinates = value.parse().unwrap();
            assert_eq!(coordinates.to_string(), value);
        }
    }
}
