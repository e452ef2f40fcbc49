//! Configuration for diagnostic rendering.
//!
//! This module defines the settings that shape how instructions are printed in
//! testbench failure messages. It provides:
//! 1. **Defaults:** Baseline formatting constants.
//! 2. **Structures:** Disassembly and failure-report settings.
//! 3. **Enums:** Register naming style.
//!
//! Configuration never changes encode/decode results. It is supplied as JSON
//! by the test harness or built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::CodecError;

/// Default configuration constants.
mod defaults {
    /// Width of the field-name column in field tables.
    pub const COLUMN_WIDTH: usize = 12;

    /// Mnemonics are printed upper-case, matching the testbench logs.
    pub const UPPERCASE: bool = true;

    /// Failure reports include the field table of the offending instruction.
    pub const SHOW_FIELD_TABLE: bool = true;

    /// Failure reports include the field-grouped machine code.
    pub const SHOW_MACHINE_CODE: bool = true;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use toothless_isa::config::{Config, RegisterNaming};
///
/// let json = r#"{
///     "disasm": { "register_names": "Abi", "uppercase": false },
///     "report": { "show_machine_code": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.disasm.register_names, RegisterNaming::Abi);
/// assert!(!config.disasm.uppercase);
/// assert_eq!(config.disasm.column_width, 12);
/// assert!(config.report.show_field_table);
/// assert!(!config.report.show_machine_code);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Disassembly settings.
    #[serde(default)]
    pub disasm: DisasmConfig,
    /// Failure-report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(|e| CodecError::syntax("<config>", e.to_string()))
    }
}

/// How registers are named in assembly strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RegisterNaming {
    /// `x0`..`x31`.
    #[default]
    #[serde(alias = "numeric")]
    Numeric,
    /// `zero`, `ra`, `sp`, ...
    #[serde(alias = "abi", alias = "ABI")]
    Abi,
}

/// Disassembly settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisasmConfig {
    /// Register naming style.
    #[serde(default)]
    pub register_names: RegisterNaming,

    /// Print mnemonics upper-case (`ADDI`) rather than lower-case (`addi`).
    #[serde(default = "DisasmConfig::default_uppercase")]
    pub uppercase: bool,

    /// Width of the field-name column in field tables.
    #[serde(default = "DisasmConfig::default_column_width")]
    pub column_width: usize,
}

impl DisasmConfig {
    fn default_uppercase() -> bool {
        defaults::UPPERCASE
    }

    fn default_column_width() -> usize {
        defaults::COLUMN_WIDTH
    }
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            register_names: RegisterNaming::Numeric,
            uppercase: defaults::UPPERCASE,
            column_width: defaults::COLUMN_WIDTH,
        }
    }
}

/// Failure-report settings used by [`crate::diag`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Append the field table of the current instruction.
    #[serde(default = "ReportConfig::default_show_field_table")]
    pub show_field_table: bool,

    /// Append the field-grouped binary machine code of the current instruction.
    #[serde(default = "ReportConfig::default_show_machine_code")]
    pub show_machine_code: bool,
}

impl ReportConfig {
    fn default_show_field_table() -> bool {
        defaults::SHOW_FIELD_TABLE
    }

    fn default_show_machine_code() -> bool {
        defaults::SHOW_MACHINE_CODE
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_field_table: defaults::SHOW_FIELD_TABLE,
            show_machine_code: defaults::SHOW_MACHINE_CODE,
        }
    }
}
