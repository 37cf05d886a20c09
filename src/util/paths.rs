//! Path normalization helpers.

use std::path::{Path, MAIN_SEPARATOR_STR};

use glob::Pattern;

/// Rewrite both separator styles in a path string to the host's native one.
///
/// Snapshot files may be written on a different OS than the one consuming
/// them, so debugger executables and arguments can arrive with either `/`
/// or `\` separators.
pub fn fix_path_sep(path: &str) -> String {
    path.replace(['/', '\\'], MAIN_SEPARATOR_STR)
}

/// [`fix_path_sep`] applied to every entry of a list.
pub fn fix_path_seps(paths: &[String]) -> Vec<String> {
    paths.iter().map(|p| fix_path_sep(p)).collect()
}

/// Glob patterns that locate the system include directories shipped
/// inside a toolchain package.
///
/// Covers the target-prefixed layout (`avr/include`, `arm-none-eabi/include`)
/// and the GCC internal headers (`lib/gcc/<target>/<version>/include`,
/// `include-fixed`). The package directory itself is glob-escaped so
/// metacharacters in the path match literally.
pub fn toolchain_include_patterns(toolchain_dir: &Path) -> [String; 2] {
    let escaped = Pattern::escape(&toolchain_dir.to_string_lossy());
    let root = Path::new(&escaped);
    [
        root.join("*").join("include*").to_string_lossy().into_owned(),
        root.join("lib")
            .join("gcc")
            .join("*")
            .join("*")
            .join("include*")
            .to_string_lossy()
            .into_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_path_sep_forward() {
        assert_eq!(
            fix_path_sep("bin/openocd"),
            format!("bin{}openocd", MAIN_SEPARATOR_STR)
        );
    }

    #[test]
    fn test_fix_path_sep_backward() {
        assert_eq!(
            fix_path_sep("scripts\\board\\st_nucleo.cfg"),
            format!(
                "scripts{0}board{0}st_nucleo.cfg",
                MAIN_SEPARATOR_STR
            )
        );
    }

    #[test]
    fn test_fix_path_sep_mixed() {
        assert_eq!(
            fix_path_sep("bin/sub\\dir"),
            format!("bin{0}sub{0}dir", MAIN_SEPARATOR_STR)
        );
    }

    #[test]
    fn test_fix_path_seps_list() {
        let fixed = fix_path_seps(&["-f".to_string(), "board\\nucleo.cfg".to_string()]);
        assert_eq!(fixed[0], "-f");
        assert_eq!(fixed[1], format!("board{}nucleo.cfg", MAIN_SEPARATOR_STR));
    }

    #[test]
    fn test_toolchain_include_patterns_shape() {
        let [first, second] = toolchain_include_patterns(Path::new("/opt/toolchain"));
        assert!(first.starts_with("/opt/toolchain"));
        assert!(first.ends_with("include*"));
        assert!(second.contains("gcc"));
        assert!(second.ends_with("include*"));
    }

    #[test]
    fn test_toolchain_include_patterns_escape_metacharacters() {
        let [first, _] = toolchain_include_patterns(Path::new("/opt/tool[1]"));
        // The bracket in the directory must match literally, not as a class.
        assert!(first.contains("[[]1[]]"), "got pattern: {}", first);
    }
}
