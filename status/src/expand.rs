//! Shell expansion of configuration values.
//!
//! Environment variables and the tilde `~` are replaced by their
//! values. Expansion never fails: on error, the original value is
//! kept and a warning is emitted.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub fn path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    let Some(path_str) = path.to_str() else {
        warn!("cannot expand path {path:?}: cannot convert path to string");
        return path.to_owned();
    };

    match shellexpand::full(path_str) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            warn!("cannot shell expand path {path_str}: {err}");
            debug!("{err:?}");
            path.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    #[test]
    fn expand_env_var() {
        std::env::set_var("STATUS_EXPAND_TEST_DIR", "/tmp/mail");
        assert_eq!(
            super::path("$STATUS_EXPAND_TEST_DIR/inbox"),
            PathBuf::from("/tmp/mail/inbox")
        );
    }

    #[test]
    fn keep_unknown_var() {
        assert_eq!(
            super::path("$STATUS_EXPAND_UNSET_VAR/inbox"),
            PathBuf::from("$STATUS_EXPAND_UNSET_VAR/inbox")
        );
    }
}
