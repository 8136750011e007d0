use serde::Serialize;
use std::process::ExitStatus;

/// Compiler, linker and binding-filter settings for one platform.
///
/// Every field is always serialized, even when empty.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfigDescriptor {
    pub include_paths: &'static [&'static str],
    pub header_paths: &'static [&'static str],
    pub library_search_paths: &'static [&'static str],
    pub library_names: &'static [&'static str],
    pub defines: &'static [&'static str],
    pub blacklist_item_regexes: &'static [&'static str],
    pub whitelist_function_regexes: &'static [&'static str],
    pub whitelist_type_regexes: &'static [&'static str],
    pub whitelist_variable_regexes: &'static [&'static str],
}

/// What the package-query tool said about the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Tool exited successfully; flags are split from its stdout.
    Available { cflags: Vec<String>, libs: Vec<String> },
    /// Tool ran but exited non-zero.
    Unavailable { status: ExitStatus, stderr: String },
}

impl ProbeOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Available { .. })
    }
}

/// The JSON document printed by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cflags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libs: Option<Vec<String>>,
}

impl ProbeReport {
    /// Flags are dropped unless `emit_flags` is set.
    pub fn from_outcome(outcome: ProbeOutcome, emit_flags: bool) -> Self {
        let enable = outcome.is_available();
        if !emit_flags {
            return Self {
                enable,
                cflags: None,
                libs: None,
            };
        }

        let (cflags, libs) = match outcome {
            ProbeOutcome::Available { cflags, libs } => (cflags, libs),
            ProbeOutcome::Unavailable { .. } => (Vec::new(), Vec::new()),
        };

        Self {
            enable,
            cflags: Some(cflags),
            libs: Some(libs),
        }
    }
}

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub program: String,
    pub library: String,
    pub emit_flags: bool,
    pub pretty: bool,
}
