//! Installed packages and library builders.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Type tag of an installed package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Toolchain,
    Framework,
    Library,
    Tool,
    Uploader,
}

impl PackageKind {
    /// Whether this package carries compiler headers worth scanning.
    pub fn is_toolchain(self) -> bool {
        matches!(self, PackageKind::Toolchain)
    }
}

/// A package installed into the build environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledPackage {
    pub name: String,
    pub kind: PackageKind,
    /// Installed directory; absent when the package is registered but
    /// not materialized on disk.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// A library builder registered with the environment.
///
/// Builders are kept in registration order; their include directories
/// feed the include-path dump after the explicit project paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibBuilder {
    pub name: String,
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_kind_tags() {
        let pkg: InstalledPackage = toml::from_str(
            r#"
name = "toolchain-gccarmnoneeabi"
kind = "toolchain"
dir = "/opt/gcc-arm"
"#,
        )
        .unwrap();

        assert!(pkg.kind.is_toolchain());
        assert_eq!(pkg.dir, Some(PathBuf::from("/opt/gcc-arm")));
    }

    #[test]
    fn test_package_dir_optional() {
        let pkg: InstalledPackage = toml::from_str(
            r#"
name = "framework-arduino-avr"
kind = "framework"
"#,
        )
        .unwrap();

        assert_eq!(pkg.kind, PackageKind::Framework);
        assert!(pkg.dir.is_none());
        assert!(!pkg.kind.is_toolchain());
    }

    #[test]
    fn test_lib_builder_defaults() {
        let lb: LibBuilder = toml::from_str("name = \"SPI\"\n").unwrap();
        assert_eq!(lb.name, "SPI");
        assert!(lb.include_dirs.is_empty());
    }
}
