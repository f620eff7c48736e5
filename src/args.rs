//! Startup argument summary and configuration formatting
//!
//! The framework logs, at launch, one line describing the arguments the
//! current process was started with, and rewrites worker configuration text
//! so that port placeholders hold concrete numbers before the worker sees
//! it. Both operations live on [`ArgFormatter`], which holds its two
//! collaborators by value: construct it once at startup and share it freely.

use tracing::info;

use crate::errors::Result;
use crate::ports::{EphemeralPortResolver, PortResolver};

/// Source of the startup arguments of the running process.
///
/// Queried fresh on every call. Entries that could not be decoded are
/// `None`; they are skipped when the summary line is rendered.
pub trait RuntimeArgs {
    fn input_arguments(&self) -> Vec<Option<String>>;
}

/// Reads the argument vector of the current process.
///
/// The leading program path is dropped; the summary covers the flags the
/// process was launched with, not the binary name. Arguments that are not
/// valid Unicode come back as absent entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsArgs;

impl RuntimeArgs for OsArgs {
    fn input_arguments(&self) -> Vec<Option<String>> {
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.into_string().ok())
            .collect()
    }
}

/// Join the present entries with single spaces, skipping absent ones
fn join_present(args: &[Option<String>]) -> String {
    args.iter()
        .filter_map(|arg| arg.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Launch-time formatting: argument summary and port-token substitution.
#[derive(Debug)]
pub struct ArgFormatter<A, P> {
    args: A,
    resolver: P,
}

impl<A: RuntimeArgs, P: PortResolver> ArgFormatter<A, P> {
    pub fn new(args: A, resolver: P) -> Self {
        Self { args, resolver }
    }

    /// Render the startup arguments as a single labeled line.
    ///
    /// Present entries are joined with single spaces; absent entries are
    /// skipped. An empty argument vector yields just the label.
    pub fn input_arguments_summary(&self) -> String {
        let arguments = self.args.input_arguments();
        format!("JVM Input Arguments: {}", join_present(&arguments))
    }

    /// Replace port tokens in the given configuration text.
    ///
    /// Absent text maps to the empty string without consulting the
    /// resolver. Present text is handed to the resolver and its result is
    /// returned unmodified, failures included.
    pub fn format_configuration(&self, text: Option<&str>) -> Result<String> {
        match text {
            Some(text) => self.resolver.replace_port_tokens(text),
            None => Ok(String::new()),
        }
    }

    /// Log the argument summary at `info` level
    pub fn log_launch_info(&self) {
        info!("{}", self.input_arguments_summary());
    }
}

impl Default for ArgFormatter<OsArgs, EphemeralPortResolver> {
    /// Formatter wired to the OS argument vector and an ephemeral-port
    /// resolver.
    fn default() -> Self {
        Self::new(OsArgs, EphemeralPortResolver::new())
    }
}
