//! Platform-scoped dependency routing.
//!
//! A [`Project`] owns a set of named dependency buckets. Five ambient buckets
//! exist from the start (`compile`, `compileOnly`, `runtime`, `runtimeOnly`,
//! `testCompile`); [`Project::create_platform_buckets`] adds one bucket per
//! catalog platform. The bucket named after the build platform is linked into
//! the ambient compile-only/runtime-only/test-compile buckets through an
//! "extends" edge, so platform-neutral build steps transparently see the
//! right native dependencies. Every other platform bucket stays isolated.
//!
//! Extends relationships are kept as an explicit adjacency list on each
//! bucket (bucket name to the names it draws from); [`Project::resolve`]
//! walks that graph transitively.
//!
//! All of these operations mutate project-scoped shared state and define no
//! rollback: a configuration-time error (for example a malformed artifact
//! coordinate) must fail the whole configuration pass.

mod coordinates;

pub use coordinates::ArtifactCoordinates;

use std::collections::{BTreeMap, HashSet};

use crate::error::DependencyError;
use crate::platform::Platform;

/// Name of the ambient compile bucket.
pub const COMPILE: &str = "compile";
/// Name of the ambient compile-only bucket.
pub const COMPILE_ONLY: &str = "compileOnly";
/// Name of the ambient runtime bucket.
pub const RUNTIME: &str = "runtime";
/// Name of the ambient runtime-only bucket.
pub const RUNTIME_ONLY: &str = "runtimeOnly";
/// Name of the ambient test-compile bucket.
pub const TEST_COMPILE: &str = "testCompile";

const AMBIENT_BUCKETS: [&str; 5] = [COMPILE, COMPILE_ONLY, RUNTIME, RUNTIME_ONLY, TEST_COMPILE];

/// A single dependency declaration inside a bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Dependency {
    /// A published artifact, resolved by coordinates.
    Artifact(ArtifactCoordinates),

    /// Output of a sibling sub-project.
    Project {
        /// Path of the target project, e.g. `:native`
        path: String,
        /// Bucket of the target project to depend on; `None` selects the
        /// target's default output
        bucket: Option<String>,
    },
}

impl Dependency {
    fn project(path: &str, bucket: Option<&str>) -> Self {
        Dependency::Project {
            path: path.to_string(),
            bucket: bucket.map(|bucket| bucket.to_string()),
        }
    }
}

/// A named collection of dependency declarations.
///
/// Structure is fixed after creation; declarations may still be appended.
/// Appending a declaration that is already present is a no-op.
#[derive(Clone, Debug)]
pub struct DependencyBucket {
    name: String,
    declarations: Vec<Dependency>,
    extends_from: Vec<String>,
}

impl DependencyBucket {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            declarations: Vec::new(),
            extends_from: Vec::new(),
        }
    }

    /// Returns the bucket name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declarations made directly on this bucket.
    pub fn declarations(&self) -> &[Dependency] {
        &self.declarations
    }

    /// Returns the names of the buckets this one draws from.
    pub fn extends_from(&self) -> &[String] {
        &self.extends_from
    }

    fn declare(&mut self, dependency: Dependency) {
        if !self.declarations.contains(&dependency) {
            self.declarations.push(dependency);
        }
    }

    fn extend_from(&mut self, other: &str) {
        if !self.extends_from.iter().any(|name| name == other) {
            self.extends_from.push(other.to_string());
        }
    }
}

/// A project with named dependency buckets.
///
/// Owned by the build for the lifetime of one configuration pass; shared by
/// every build step that contributes or consumes platform-specific
/// dependencies.
#[derive(Clone, Debug)]
pub struct Project {
    name: String,
    buckets: BTreeMap<String, DependencyBucket>,
}

impl Project {
    /// Creates a project with the five ambient buckets.
    pub fn new(name: &str) -> Self {
        let mut project = Self {
            name: name.to_string(),
            buckets: BTreeMap::new(),
        };
        for bucket in AMBIENT_BUCKETS {
            project.ensure_bucket(bucket);
        }
        project
    }

    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bucket with the given name, if it exists.
    pub fn bucket(&self, name: &str) -> Option<&DependencyBucket> {
        self.buckets.get(name)
    }

    /// Creates one bucket per catalog platform. Idempotent.
    ///
    /// Only the bucket named after `build_platform` is linked into the
    /// ambient compile-only/runtime-only/test-compile buckets, so local
    /// compiling, running, and testing resolve the native dependencies of
    /// the machine performing the build. The other platform buckets are
    /// never linked into the ambient ones.
    pub fn create_platform_buckets(&mut self, build_platform: Platform) {
        for platform in Platform::ALL {
            self.ensure_bucket(platform.name());
            if platform == build_platform {
                for ambient in [COMPILE_ONLY, RUNTIME_ONLY, TEST_COMPILE] {
                    if let Some(bucket) = self.buckets.get_mut(ambient) {
                        bucket.extend_from(platform.name());
                    }
                }
            }
        }
        log::debug!(
            "created platform buckets on {}, build platform {build_platform}",
            self.name
        );
    }

    /// Adds a platform-specific artifact to that platform's bucket.
    ///
    /// # Errors
    ///
    /// Fails when the coordinates are malformed or the platform bucket has
    /// not been created yet.
    pub fn add_platform_artifact(
        &mut self,
        platform: Platform,
        coordinates: &str,
    ) -> Result<(), DependencyError> {
        let artifact: ArtifactCoordinates = coordinates.parse()?;
        self.bucket_mut(platform.name())?
            .declare(Dependency::Artifact(artifact));
        Ok(())
    }

    /// Adds one platform-specific variant of an artifact to every platform
    /// bucket, using `classifier` to derive the per-platform classifier.
    ///
    /// # Errors
    ///
    /// Fails when any platform bucket has not been created yet.
    pub fn add_platform_artifacts(
        &mut self,
        group: &str,
        name: &str,
        version: &str,
        classifier: impl Fn(Platform) -> &'static str,
    ) -> Result<(), DependencyError> {
        for platform in Platform::ALL {
            let artifact =
                ArtifactCoordinates::classified(group, name, version, classifier(platform));
            self.bucket_mut(platform.name())?
                .declare(Dependency::Artifact(artifact));
        }
        Ok(())
    }

    /// Adds a dependency on a sibling project that itself carries
    /// platform-specific dependencies, wiring every platform.
    ///
    /// # Errors
    ///
    /// Fails when any platform bucket has not been created yet.
    pub fn add_platform_project(
        &mut self,
        path: &str,
        build_platform: Platform,
    ) -> Result<(), DependencyError> {
        for platform in Platform::ALL {
            self.add_platform_project_for(path, platform, build_platform)?;
        }
        Ok(())
    }

    /// Adds a dependency on one platform's output of a sibling project.
    ///
    /// The platform bucket gains a dependency on the sibling's same-named
    /// bucket, and `compile` gains a dependency on the sibling's plain
    /// compile output. Only when `platform` is the build platform, the
    /// sibling's default output is additionally added to the ambient
    /// compile-only/runtime/test-compile buckets so the current project's
    /// run and test tasks can load the platform-specific code.
    ///
    /// # Errors
    ///
    /// Fails when the platform bucket has not been created yet.
    pub fn add_platform_project_for(
        &mut self,
        path: &str,
        platform: Platform,
        build_platform: Platform,
    ) -> Result<(), DependencyError> {
        self.bucket_mut(platform.name())?
            .declare(Dependency::project(path, Some(platform.name())));
        self.bucket_mut(COMPILE)?
            .declare(Dependency::project(path, Some(COMPILE)));
        if platform == build_platform {
            for ambient in [COMPILE_ONLY, RUNTIME, TEST_COMPILE] {
                self.bucket_mut(ambient)?
                    .declare(Dependency::project(path, None));
            }
        }
        Ok(())
    }

    /// Resolves a bucket to its full dependency list.
    ///
    /// The result contains the bucket's own declarations followed by the
    /// declarations of every bucket reachable over extends edges, depth
    /// first, with duplicates removed.
    ///
    /// # Errors
    ///
    /// Fails when no bucket has the given name.
    pub fn resolve(&self, bucket_name: &str) -> Result<Vec<&Dependency>, DependencyError> {
        if !self.buckets.contains_key(bucket_name) {
            return Err(DependencyError::UnknownBucket {
                name: bucket_name.to_string(),
            });
        }
        let mut visited = HashSet::new();
        let mut resolved = Vec::new();
        self.collect(bucket_name, &mut visited, &mut resolved);
        Ok(resolved)
    }

    fn collect<'a>(
        &'a self,
        name: &str,
        visited: &mut HashSet<&'a str>,
        resolved: &mut Vec<&'a Dependency>,
    ) {
        let Some(bucket) = self.buckets.get(name) else {
            return;
        };
        if !visited.insert(bucket.name.as_str()) {
            return;
        }
        for dependency in &bucket.declarations {
            if !resolved.contains(&dependency) {
                resolved.push(dependency);
            }
        }
        for parent in &bucket.extends_from {
            self.collect(parent, visited, resolved);
        }
    }

    fn ensure_bucket(&mut self, name: &str) {
        self.buckets
            .entry(name.to_string())
            .or_insert_with(|| DependencyBucket::new(name));
    }

    fn bucket_mut(&mut self, name: &str) -> Result<&mut DependencyBucket, DependencyError> {
        self.buckets
            .get_mut(name)
            .ok_or_else(|| DependencyError::UnknownBucket {
                name: name.to_string(),
            })
    }
}
