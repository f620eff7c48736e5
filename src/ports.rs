//! Port-token resolution
//!
//! Configuration text handed to a worker process may reference network ports
//! that are only known once the process is about to launch. Such references
//! are written as placeholder tokens:
//!
//! - `${PORT_<name>}` - a free TCP port, where `<name>` is one or more ASCII
//!   letters, digits or underscores
//!
//! Every distinct token name is assigned one port; repeated occurrences of
//! the same name (within one string or across calls on the same resolver)
//! render the same number. Text containing no tokens passes through
//! unchanged, which also makes resolved output a fixed point: resolving it a
//! second time changes nothing.

use std::net::TcpListener;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::Result;

// Cached regex pattern to avoid recompilation at every launch
static PORT_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{PORT_([A-Za-z0-9_]+)\}").unwrap()
});

/// Replaces port-placeholder tokens in configuration text.
///
/// Synchronous, text in, text out. Input without tokens must come back
/// unchanged. Failures surface through the crate's [`Result`]; callers
/// forward them without wrapping.
pub trait PortResolver {
    fn replace_port_tokens(&self, input: &str) -> Result<String>;
}

/// Assigns OS-chosen free ports to `${PORT_<name>}` tokens.
///
/// Assignments are cached per token name for the life of the resolver, so a
/// name resolves to the same port no matter how often it appears. The cache
/// is concurrent; one resolver can be shared across threads.
#[derive(Debug, Default)]
pub struct EphemeralPortResolver {
    assigned: DashMap<String, u16>,
}

impl EphemeralPortResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port for a token name, assigning a fresh one on first sight
    fn port_for(&self, name: &str) -> Result<u16> {
        if let Some(port) = self.assigned.get(name) {
            return Ok(*port);
        }

        let port = find_free_port()?;
        self.assigned.insert(name.to_string(), port);
        debug!(token = %name, port = port, "Assigned free port to token");
        Ok(port)
    }
}

impl PortResolver for EphemeralPortResolver {
    fn replace_port_tokens(&self, input: &str) -> Result<String> {
        let mut resolved = String::with_capacity(input.len());
        let mut last = 0;

        for cap in PORT_TOKEN_RE.captures_iter(input) {
            let token = cap.get(0).unwrap();
            let name = cap.get(1).unwrap().as_str();
            let port = self.port_for(name)?;

            resolved.push_str(&input[last..token.start()]);
            resolved.push_str(&port.to_string());
            last = token.end();
        }

        resolved.push_str(&input[last..]);
        Ok(resolved)
    }
}

/// Find an available local port
fn find_free_port() -> Result<u16> {
    // Bind to port 0 to let the OS assign an available port
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}
