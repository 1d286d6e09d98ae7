//! Single-link reachability probing.
//!
//! Non-probeable targets (mail, local files, loopback hosts, non-HTTP
//! schemes) are classified as ignored without touching the network.
//! Everything else gets a HEAD request through a shared agent: 5 second
//! connect timeout, redirects followed, IPv4 resolution only. Any HTTP
//! response counts as reachable; transport failures are retried a fixed
//! number of times before the link is declared unreachable.

use std::fmt;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;
use url::{Host, Url};

/// Connect timeout for one probe attempt.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Retries after the first attempt, on transport failure only. No backoff.
const PROBE_RETRIES: usize = 3;

/// Redirect hops followed per attempt.
const MAX_REDIRECTS: u32 = 10;

/// Reachability classification of one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reachable,
    Unreachable,
    Ignored,
}

impl Verdict {
    /// Fixed status tag for report lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Verdict::Reachable => "PASSED",
            Verdict::Unreachable => "FAILED",
            Verdict::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Classify a target that must not be probed, without any network call.
/// Returns `None` when the target needs a real probe.
pub fn classify_static(url: &str) -> Option<Verdict> {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return Some(Verdict::Ignored),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        // mailto:, file:, ftp: and friends are not HTTP-probeable
        _ => return Some(Verdict::Ignored),
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return Some(Verdict::Ignored);
            }
        }
        Some(Host::Ipv4(addr)) => {
            if addr.is_loopback() || addr.is_unspecified() {
                return Some(Verdict::Ignored);
            }
        }
        Some(Host::Ipv6(addr)) => {
            if addr.is_loopback() || addr.is_unspecified() {
                return Some(Verdict::Ignored);
            }
        }
        None => return Some(Verdict::Ignored),
    }

    None
}

/// Resolver restricting lookups to IPv4 addresses.
struct Ipv4Only;

impl ureq::Resolver for Ipv4Only {
    fn resolve(&self, netloc: &str) -> io::Result<Vec<SocketAddr>> {
        Ok(netloc
            .to_socket_addrs()?
            .filter(SocketAddr::is_ipv4)
            .collect())
    }
}

/// Reusable link prober holding the configured HTTP agent.
pub struct Prober {
    agent: ureq::Agent,
}

impl Prober {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .redirects(MAX_REDIRECTS)
            .resolver(Ipv4Only)
            .build();
        Self { agent }
    }

    /// Determine the verdict for one URL. Exactly one probe sequence per
    /// non-ignored target.
    pub fn probe(&self, url: &str) -> Verdict {
        if let Some(verdict) = classify_static(url) {
            return verdict;
        }

        for _attempt in 0..=PROBE_RETRIES {
            match self.agent.head(url).call() {
                Ok(_) => return Verdict::Reachable,
                // The server answered; the target exists even when access
                // is denied or the resource moved
                Err(ureq::Error::Status(_, _)) => return Verdict::Reachable,
                Err(ureq::Error::Transport(_)) => continue,
            }
        }

        Verdict::Unreachable
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}
