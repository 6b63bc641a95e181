//! The resolved executable descriptor consumed by the process launcher.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// How to launch a debug-adapter process. Exactly one of the two shapes
/// is valid; anything else is rejected by [`ExecutableDescriptor::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExecutableDescriptor {
    /// Spawn a program directly.
    Command {
        /// The program to run.
        command: String,
        /// Arguments passed to the program.
        #[serde(default)]
        args: Vec<String>,
    },
    /// Spawn a module under a module-aware launcher.
    Module {
        /// Path of the module to run.
        #[serde(rename = "modulePath")]
        module_path: String,
        /// Arguments passed to the module.
        #[serde(default)]
        args: Vec<String>,
    },
}

impl ExecutableDescriptor {
    /// Validate a loose JSON value into a descriptor.
    ///
    /// Contributions hand descriptors across the boundary as plain data;
    /// this is the single validation point. A value carrying neither
    /// `command` nor `modulePath` — or both — is rejected with
    /// [`BridgeError::UnsupportedExecutable`].
    pub fn from_value(value: &serde_json::Value) -> Result<Self, BridgeError> {
        let object = value.as_object().ok_or_else(|| unsupported(value))?;
        let has_command = object.contains_key("command");
        let has_module = object.contains_key("modulePath");
        if has_command == has_module {
            return Err(unsupported(value));
        }
        serde_json::from_value(value.clone()).map_err(|e| BridgeError::UnsupportedExecutable {
            detail: e.to_string(),
        })
    }

    /// The argument list, regardless of shape.
    pub fn args(&self) -> &[String] {
        match self {
            Self::Command { args, .. } | Self::Module { args, .. } => args,
        }
    }
}

fn unsupported(value: &serde_json::Value) -> BridgeError {
    BridgeError::UnsupportedExecutable {
        detail: format!("expected {{command, args}} or {{modulePath, args}}, got {value}"),
    }
}
