//! Extraction of IDE metadata from a build environment.
//!
//! Four operations, each a read-only projection of environment state:
//! include paths, preprocessor defines, the debug descriptor, and the
//! assembled [`IdeData`] record. Values that cannot be resolved become
//! absent or empty fields; nothing in this module returns an error.

use std::path::PathBuf;

use tracing::warn;

use crate::core::env::{define_flags, BuildEnv, DEFINE_FLAGS_VAR, Var};
use crate::core::ide::{DebugInfo, DebugServer, IdeData};
use crate::core::pkg::PackageKind;
use crate::core::tool::ServerSettings;
use crate::util::paths::{fix_path_sep, fix_path_seps, toolchain_include_patterns};
use crate::util::search::where_is_program;

/// Platform identifier of the 8-bit AVR family, which gets a synthetic
/// device define appended to its define list.
const AVR_PLATFORM: &str = "atmelavr";

/// Template for the rendered C compiler flag string.
const C_FLAGS_TEMPLATE: &str = "$CFLAGS $CCFLAGS $CPPFLAGS $_CPPDEFFLAGS";

/// Template for the rendered C++ compiler flag string.
const CXX_FLAGS_TEMPLATE: &str = "$CXXFLAGS $CCFLAGS $CPPFLAGS $_CPPDEFFLAGS";

/// Collect include search directories.
///
/// Order is explicit project paths first, then library builder
/// directories in registration order, then toolchain header
/// directories discovered by globbing each toolchain package.
pub fn dump_includes(env: &dyn BuildEnv) -> Vec<PathBuf> {
    let mut includes: Vec<PathBuf> = Vec::new();

    for entry in env.include_paths() {
        includes.push(PathBuf::from(env.subst(&entry)));
    }

    for builder in env.lib_builders() {
        includes.extend(builder.include_dirs.iter().cloned());
    }

    for name in env.installed_packages() {
        if !env.package_kind(&name).is_some_and(PackageKind::is_toolchain) {
            continue;
        }
        let dir = match env.package_dir(&name) {
            Some(dir) => dir,
            None => continue,
        };
        for pattern in toolchain_include_patterns(&dir) {
            let matches = match glob::glob(&pattern) {
                Ok(matches) => matches,
                Err(err) => {
                    warn!("invalid toolchain include pattern `{}`: {}", pattern, err);
                    continue;
                }
            };
            for entry in matches {
                match entry {
                    Ok(path) => includes.push(path),
                    Err(err) => warn!("skipping unreadable toolchain include: {}", err),
                }
            }
        }
    }

    includes
}

/// Collect preprocessor defines.
///
/// Each entry is substituted and stripped of any trailing
/// line-continuation backslash. On the AVR platform, a synthetic
/// device define derived from the board MCU is appended.
pub fn dump_defines(env: &dyn BuildEnv) -> Vec<String> {
    let mut defines: Vec<String> = Vec::new();

    for entry in env.defines() {
        let substituted = env.subst(&entry);
        defines.push(substituted.trim_end_matches('\\').to_string());
    }

    if env.platform_name() == Some(AVR_PLATFORM) {
        if let Some(mcu) = board_mcu(env) {
            defines.push(avr_mcu_define(&mcu));
        }
    }

    defines
}

fn board_mcu(env: &dyn BuildEnv) -> Option<String> {
    if let Some(var) = env.var("BOARD_MCU") {
        let mcu = var.render();
        if !mcu.is_empty() {
            return Some(mcu);
        }
    }
    env.board_config()
        .and_then(|board| board.get_str("build.mcu"))
        .map(str::to_string)
}

/// Build the avr-libc device macro for an MCU name, e.g. `atmega328p`
/// becomes `__AVR_ATmega328P__`. Fixed behavior for one platform, not
/// a general naming scheme.
fn avr_mcu_define(mcu: &str) -> String {
    let name = mcu
        .to_uppercase()
        .replace("ATMEGA", "ATmega")
        .replace("ATTINY", "ATtiny");
    format!("__AVR_{}__", name)
}

/// Assemble the debug descriptor, or `None` when the environment has
/// no debug configuration at all.
///
/// Port autodetection runs before anything reads `$DEBUG_PORT`, so
/// init commands referencing the port render against the final value.
pub fn dump_debug(env: &mut dyn BuildEnv) -> Option<DebugInfo> {
    let tool = env.debug_tool_settings().cloned();

    // An override that normalizes to no commands counts as unset.
    let gdbinit_override = env
        .var("DEBUG_GDBINIT")
        .map(Var::into_list)
        .filter(|commands| !commands.is_empty());

    if tool.is_none() && gdbinit_override.is_none() && env.var("GDB").is_none() {
        return None;
    }

    env.autodetect_debug_port();

    let gdbinit = gdbinit_override
        .or_else(|| tool.as_ref().and_then(|t| t.gdbinit.clone().map(Var::into_list)))
        .map(|commands| {
            commands
                .iter()
                .map(|cmd| fix_path_sep(&env.subst(cmd)))
                .collect::<Vec<_>>()
        });

    let server = tool
        .as_ref()
        .and_then(|t| t.server.as_ref())
        .and_then(|server| dump_server(&*env, server));

    Some(DebugInfo {
        gdb_path: where_is_program(&env.subst("$GDB"), env.search_path().as_deref()),
        prog_path: env.subst("$PROG_PATH"),
        tool: tool.map(|t| t.name),
        gdbinit,
        port: env.subst("$DEBUG_PORT"),
        server,
    })
}

/// Build the server launch block. Requires a package name, a non-empty
/// executable, and a resolvable package directory; anything missing
/// drops the block.
fn dump_server(env: &dyn BuildEnv, server: &ServerSettings) -> Option<DebugServer> {
    let package = server.package.as_deref().filter(|p| !p.is_empty())?;
    let executable = server.executable.as_deref().filter(|e| !e.is_empty())?;

    let cwd = match env.package_dir(package) {
        Some(dir) => dir,
        None => {
            warn!("debug server package `{}` has no installed directory", package);
            return None;
        }
    };

    let arguments = server
        .arguments
        .clone()
        .map(|args| fix_path_seps(&args.into_list()));

    Some(DebugServer {
        cwd,
        executable: fix_path_sep(executable),
        arguments,
    })
}

/// Assemble the full IDE metadata record for one environment.
pub fn dump_ide_data(env: &mut dyn BuildEnv) -> IdeData {
    let libsource_dirs: Vec<PathBuf> = env
        .libsource_dirs()
        .iter()
        .map(|dir| PathBuf::from(env.subst(dir)))
        .collect();
    let defines = dump_defines(&*env);
    let includes = dump_includes(&*env);
    let debug = dump_debug(&mut *env);

    // Flag strings get a shell-escaped rendition of the defines; the
    // `defines` field above keeps the raw form.
    let overrides = [(DEFINE_FLAGS_VAR, escaped_define_flags(&*env))];
    let search_path = env.search_path();

    IdeData {
        libsource_dirs,
        defines,
        includes,
        debug,
        cc_flags: env.subst_with(C_FLAGS_TEMPLATE, &overrides),
        cxx_flags: env.subst_with(CXX_FLAGS_TEMPLATE, &overrides),
        cc_path: where_is_program(&env.subst("$CC"), search_path.as_deref()),
        cxx_path: where_is_program(&env.subst("$CXX"), search_path.as_deref()),
    }
}

/// Render the define list as `-D` flags with IDE-style escaping:
/// literal `\"` becomes `"`, then embedded spaces become `\ `.
fn escaped_define_flags(env: &dyn BuildEnv) -> String {
    let escaped: Vec<String> = env.defines().iter().map(|d| escape_define(d)).collect();
    define_flags(&escaped)
}

fn escape_define(item: &str) -> String {
    let item = item.replace("\\\"", "\"");
    if item.contains(' ') {
        item.replace(' ', "\\ ")
    } else {
        item
    }
}
