//! Window & session handling defaults.

pub fn default_profile() -> Option<String> {
    None
}

pub fn bool_true() -> bool {
    true
}
