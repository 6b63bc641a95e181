//! Executable resolution over contribution metadata.

use std::path::Path;

use tether_proto::{BridgeError, DebuggerContribution, ExecutableDescriptor, PlatformRecord};

use crate::system::OsKind;

/// The platform key a contribution's metadata is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKey {
    /// 32-bit process on a 64-bit Windows.
    WindowsX86OnX64,
    Windows,
    MacOs,
    Linux,
}

/// Map an OS kind and the WOW64 environment marker to a platform key.
///
/// Pure; unit-testable without process environment access. Returns `None`
/// for an unknown OS, in which case only the unqualified metadata fields
/// apply.
pub fn resolve_platform(os: OsKind, x86_on_x64_marker: bool) -> Option<PlatformKey> {
    match os {
        OsKind::Windows if x86_on_x64_marker => Some(PlatformKey::WindowsX86OnX64),
        OsKind::Windows => Some(PlatformKey::Windows),
        OsKind::MacOs => Some(PlatformKey::MacOs),
        OsKind::Linux => Some(PlatformKey::Linux),
        OsKind::Unknown => None,
    }
}

/// Resolve the concrete executable for a contribution on a platform.
///
/// Selects the matching platform record, merging each field over the
/// contribution's unqualified program/args/runtime; a missing record
/// falls back to the unqualified fields entirely. A relative runtime
/// beginning with `./` is resolved against the plugin root. With a
/// runtime the command is the runtime and the argument list is
/// `[...runtimeArgs, program, ...args]`; without one the command is the
/// program and the arguments are the program args alone.
///
/// Fails with [`BridgeError::NotConfigured`] when no program can be
/// determined.
pub fn resolve_executable(
    contribution: &DebuggerContribution,
    plugin_path: &Path,
    platform: Option<PlatformKey>,
) -> Result<ExecutableDescriptor, BridgeError> {
    let record = platform_record(contribution, platform);

    let program = merge_field(
        record.and_then(|r| r.program.as_ref()),
        contribution.program.as_ref(),
    );
    let args = merge_field(
        record.and_then(|r| r.args.as_ref()),
        contribution.args.as_ref(),
    )
    .unwrap_or_default();
    let runtime = merge_field(
        record.and_then(|r| r.runtime.as_ref()),
        contribution.runtime.as_ref(),
    );
    let runtime_args = merge_field(
        record.and_then(|r| r.runtime_args.as_ref()),
        contribution.runtime_args.as_ref(),
    )
    .unwrap_or_default();

    let Some(program) = program else {
        tracing::warn!(debug_type = %contribution.debug_type, "no adapter program in metadata");
        return Err(BridgeError::NotConfigured {
            debug_type: contribution.debug_type.clone(),
        });
    };

    match runtime {
        Some(runtime) => {
            let runtime = resolve_local_runtime(&runtime, plugin_path);
            let mut full_args = runtime_args;
            full_args.push(program);
            full_args.extend(args);
            Ok(ExecutableDescriptor::Command {
                command: runtime,
                args: full_args,
            })
        }
        None => Ok(ExecutableDescriptor::Command {
            command: program,
            args,
        }),
    }
}

/// The platform record for a key. Windows-x86 prefers the `winx86` record
/// and falls back to the `win` default.
fn platform_record<'a>(
    contribution: &'a DebuggerContribution,
    platform: Option<PlatformKey>,
) -> Option<&'a PlatformRecord> {
    match platform? {
        PlatformKey::WindowsX86OnX64 => contribution.winx86.as_ref().or(contribution.win.as_ref()),
        PlatformKey::Windows => contribution.win.as_ref(),
        PlatformKey::MacOs => contribution.osx.as_ref(),
        PlatformKey::Linux => contribution.linux.as_ref(),
    }
}

/// Platform record fields shadow the contribution's unqualified fields.
fn merge_field<T: Clone>(record: Option<&T>, base: Option<&T>) -> Option<T> {
    record.or(base).cloned()
}

/// Resolve a `./`-relative runtime against the plugin root.
fn resolve_local_runtime(runtime: &str, plugin_path: &Path) -> String {
    match runtime.strip_prefix("./") {
        Some(relative) => plugin_path.join(relative).to_string_lossy().into_owned(),
        None => runtime.to_string(),
    }
}
