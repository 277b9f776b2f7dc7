//! Default value functions for serde deserialization.

pub fn enabled() -> bool {
    true
}

pub fn id_prefix() -> String {
    crate::graph::DEFAULT_ID_PREFIX.to_string()
}
