//! Objetos del host: modelo de valores, colecciones y hojas estándar.

pub mod collections;
pub mod env_scan;
pub mod leaf;
pub mod value;

pub use collections::{HostList, HostMap};
pub use env_scan::{scan_env, scan_vars};
pub use leaf::{HostBuffer, HostEnum, HostOpaque, HostTimestamp};
pub use value::{identity, HostMapping, HostObject, HostRef, HostSequence, HostValue};
