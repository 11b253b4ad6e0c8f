mod analysis;
mod host;
mod service;
mod vuln;

pub use analysis::*;
pub use host::*;
pub use service::*;
pub use vuln::*;
