//! Debug tool settings.

use serde::{Deserialize, Serialize};

use crate::core::env::Var;

/// Settings of the debug tool selected for the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugToolSettings {
    /// Tool identifier, e.g. `blackmagic` or `avr-stub`.
    pub name: String,

    /// Initialization commands for the debugger client. A scalar is
    /// treated as a single command.
    #[serde(default)]
    pub gdbinit: Option<Var>,

    /// Default debug port, used when the environment has none set.
    #[serde(default)]
    pub port: Option<String>,

    /// Debug server launch settings, for tools that need one running.
    #[serde(default)]
    pub server: Option<ServerSettings>,
}

/// Launch settings for a debug server process.
///
/// `package` and `executable` are both required for a usable server;
/// the dump operations drop the server block when either is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Package whose installed directory is the server working dir.
    #[serde(default)]
    pub package: Option<String>,

    /// Server executable, relative to the package directory.
    #[serde(default)]
    pub executable: Option<String>,

    /// Arguments passed on launch. A scalar is a single argument.
    #[serde(default)]
    pub arguments: Option<Var>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tool_settings() {
        let tool: DebugToolSettings = toml::from_str(
            r#"
name = "stlink"
gdbinit = ["target extended-remote $DEBUG_PORT", "monitor reset halt"]
port = ":3333"

[server]
package = "tool-openocd"
executable = "bin/openocd"
arguments = ["-f", "board/st_nucleo_f4.cfg"]
"#,
        )
        .unwrap();

        assert_eq!(tool.name, "stlink");
        assert_eq!(tool.gdbinit.unwrap().into_list().len(), 2);
        assert_eq!(tool.port.as_deref(), Some(":3333"));
        let server = tool.server.unwrap();
        assert_eq!(server.package.as_deref(), Some("tool-openocd"));
        assert_eq!(server.executable.as_deref(), Some("bin/openocd"));
        assert_eq!(server.arguments.unwrap().into_list().len(), 2);
    }

    #[test]
    fn test_scalar_gdbinit() {
        let tool: DebugToolSettings = toml::from_str(
            r#"
name = "avr-stub"
gdbinit = "set remotetimeout 10"
"#,
        )
        .unwrap();

        assert_eq!(
            tool.gdbinit.unwrap().into_list(),
            vec!["set remotetimeout 10".to_string()]
        );
        assert!(tool.server.is_none());
    }

    #[test]
    fn test_minimal_tool() {
        let tool: DebugToolSettings = toml::from_str("name = \"jlink\"\n").unwrap();
        assert_eq!(tool.name, "jlink");
        assert!(tool.gdbinit.is_none());
        assert!(tool.port.is_none());
        assert!(tool.server.is_none());
    }
}
