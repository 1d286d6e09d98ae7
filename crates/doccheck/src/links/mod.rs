//! External link checking: discovery, classification, probing, fan-out.

mod expand;
mod extract;
mod pool;
mod probe;

pub use expand::{ensure_xmllint, expand_includes};
pub use extract::extract_links;
pub use pool::probe_all;
pub use probe::{classify_static, Prober, Verdict};
