//! Library components of the `regionshell` host.

pub mod logging;
pub mod session;
