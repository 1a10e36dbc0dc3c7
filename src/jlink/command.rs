//! Translation from options to the jlink argument vector.

use std::path::Path;

use super::options::JlinkOptions;

/// Renders the jlink invocation for the given options and module set.
///
/// `modules` is the already-resolved list: either the explicitly configured
/// modules or the discovery result, never a mix of both.
///
/// Flag ordering is fixed and stable across runs. Reproducible builds and
/// snapshot tests depend on the literal argument list, so a change in
/// ordering here is a bug, not a style choice.
pub fn build_command(jlink: &Path, options: &JlinkOptions, modules: &[String]) -> Vec<String> {
    let mut command = Vec::new();
    command.push(jlink.to_string_lossy().into_owned());

    command.push("--add-modules".to_string());
    command.push(modules.join(","));

    if !options.module_path().is_empty() {
        command.push("--module-path".to_string());
        command.push(options.module_path().to_string());
    }

    if options.bind_services() {
        command.push("--bind-services".to_string());
    }

    command.push(format!("--compress={}", options.compression().flag_value()));

    if let Some(endian) = options.endianness().flag_value() {
        command.push("--endian".to_string());
        command.push(endian.to_string());
    }

    if options.ignore_signing_information() {
        command.push("--ignore-signing-information".to_string());
    }

    if options.exclude_header_files() {
        command.push("--no-header-files".to_string());
    }

    if options.exclude_man_pages() {
        command.push("--no-man-pages".to_string());
    }

    if options.strip_debug() {
        command.push("--strip-debug".to_string());
    }

    if options.optimize_class_for_name() {
        command.push("--class-for-name".to_string());
    }

    command.push("--output".to_string());
    command.push(options.output().to_string_lossy().into_owned());

    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jlink::options::{CompressionLevel, Endianness, JlinkOptions};

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_minimal_command() {
        let options = JlinkOptions::default();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        assert_eq!(
            command,
            [
                "jlink",
                "--add-modules",
                "java.base",
                "--compress=0",
                "--output",
                "build/jlink"
            ]
        );
    }

    #[test]
    fn test_modules_are_comma_joined_before_output() {
        let options = JlinkOptions::default();
        let command = build_command(
            Path::new("jlink"),
            &options,
            &modules(&["java.base", "java.logging"]),
        );
        let add_modules = command
            .iter()
            .position(|argument| argument == "--add-modules")
            .unwrap();
        assert_eq!(command[add_modules + 1], "java.base,java.logging");
        assert_eq!(
            command
                .iter()
                .filter(|argument| *argument == "--add-modules")
                .count(),
            1
        );
        let output = command
            .iter()
            .position(|argument| argument == "--output")
            .unwrap();
        assert!(add_modules < output);
    }

    #[test]
    fn test_flag_ordering_is_stable() {
        // Ordering must not depend on the order the options were set.
        let options = JlinkOptions::builder()
            .strip_debug(true)
            .bind_services(true)
            .build();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        let position = |flag: &str| {
            command
                .iter()
                .position(|argument| argument == flag)
                .unwrap_or_else(|| panic!("missing {flag}"))
        };
        assert!(position("--bind-services") < position("--strip-debug"));
        assert!(position("--strip-debug") < position("--output"));
    }

    #[test]
    fn test_zip_compression_renders_ordinal_two() {
        let options = JlinkOptions::builder()
            .compression(CompressionLevel::Zip)
            .build();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        assert!(command.contains(&"--compress=2".to_string()));
    }

    #[test]
    fn test_system_default_endianness_is_elided() {
        let options = JlinkOptions::default();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        assert!(!command.iter().any(|argument| argument == "--endian"));

        let options = JlinkOptions::builder().endianness(Endianness::Little).build();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        let endian = command
            .iter()
            .position(|argument| argument == "--endian")
            .unwrap();
        assert_eq!(command[endian + 1], "little");
    }

    #[test]
    fn test_module_path_is_included_only_when_set() {
        let options = JlinkOptions::default();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        assert!(!command.iter().any(|argument| argument == "--module-path"));

        let options = JlinkOptions::builder().module_path("libs").build();
        let command = build_command(Path::new("jlink"), &options, &modules(&["java.base"]));
        let module_path = command
            .iter()
            .position(|argument| argument == "--module-path")
            .unwrap();
        assert_eq!(command[module_path + 1], "libs");
    }

    #[test]
    fn test_every_flag_in_declared_order() {
        let options = JlinkOptions::builder()
            .module_path("libs")
            .bind_services(true)
            .compression(CompressionLevel::ConstantStringSharing)
            .endianness(Endianness::Big)
            .ignore_signing_information(true)
            .exclude_header_files(true)
            .exclude_man_pages(true)
            .strip_debug(true)
            .optimize_class_for_name(true)
            .output("dist/image")
            .build();
        let command = build_command(
            Path::new("/jdk/bin/jlink"),
            &options,
            &modules(&["java.base"]),
        );
        assert_eq!(
            command,
            [
                "/jdk/bin/jlink",
                "--add-modules",
                "java.base",
                "--module-path",
                "libs",
                "--bind-services",
                "--compress=1",
                "--endian",
                "big",
                "--ignore-signing-information",
                "--no-header-files",
                "--no-man-pages",
                "--strip-debug",
                "--class-for-name",
                "--output",
                "dist/image"
            ]
        );
    }
}
