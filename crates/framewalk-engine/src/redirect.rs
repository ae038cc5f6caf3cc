//! Redirect tables: the keyed egress-port map and the source-MAC rewrite
//! parameters.
//!
//! Both are small read-mostly tables populated by a control plane; the
//! engine only ever reads them.

use std::collections::HashMap;

use framewalk_core::MacAddr;

use crate::fib::IfIndex;

/// Egress-port table: interface index to the slot key frames are
/// redirected through.
///
/// An interface missing from this table can still be redirected to
/// directly ([`Disposition::RedirectInterface`](crate::Disposition)); the
/// table only controls which interfaces go through the keyed port path.
pub struct TxPortTable {
    ports: HashMap<IfIndex, u32>,
}

impl TxPortTable {
    pub fn new() -> Self {
        Self {
            ports: HashMap::new(),
        }
    }

    /// Map an interface to an egress slot key.
    pub fn insert(&mut self, ifindex: IfIndex, key: u32) {
        self.ports.insert(ifindex, key);
    }

    /// The slot key for an interface, if it is mapped.
    #[must_use]
    pub fn lookup(&self, ifindex: IfIndex) -> Option<u32> {
        self.ports.get(&ifindex).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl Default for TxPortTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Source-MAC keyed rewrite parameters: which destination MAC a frame
/// from a given sender should be rewritten to before redirecting.
pub struct RedirectParams {
    entries: HashMap<MacAddr, MacAddr>,
}

impl RedirectParams {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a rewrite: frames from `src` get destination `dst`.
    pub fn insert(&mut self, src: MacAddr, dst: MacAddr) {
        self.entries.insert(src, dst);
    }

    /// The rewrite destination for a sender, if one is registered.
    #[must_use]
    pub fn lookup(&self, src: &MacAddr) -> Option<MacAddr> {
        self.entries.get(src).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RedirectParams {
    fn default() -> Self {
        Self::new()
    }
}
