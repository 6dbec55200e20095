//! Consumer of `buildstamp`: the build script snapshots a fixed set of
//! Cargo environment variables, captures timestamps, and emits the
//! generated unit into `OUT_DIR`, which is included below. Building this
//! crate is also the proof that emitted units are valid Rust.

include!(concat!(env!("OUT_DIR"), "/build_stamp.rs"));

pub use demo::build_stamp;

/// Ready-to-print banner for a binary: `<name> <version> | built <when>`.
pub fn formatted_banner() -> String {
    format!(
        "{} {} | built {}",
        build_stamp::get("CARGO_PKG_NAME").unwrap_or("unknown"),
        build_stamp::get("CARGO_PKG_VERSION").unwrap_or("unknown"),
        build_stamp::time()
    )
}

#[cfg(test)]
mod tests {
    use super::build_stamp;

    #[test]
    fn lookup_returns_captured_values() {
        assert_eq!(build_stamp::get("CARGO_PKG_NAME"), Some("buildstamp-demo"));
        assert!(build_stamp::get("PROFILE").is_some());
    }

    #[test]
    fn lookup_misses_return_none() {
        assert_eq!(build_stamp::get("NO_SUCH_PROPERTY"), None);
    }

    #[test]
    fn key_set_matches_lookups() {
        let keys = build_stamp::key_set();
        assert!(keys.contains("CARGO_PKG_NAME"));
        assert!(keys.contains("TARGET"));
        for key in keys {
            assert!(build_stamp::get(key).is_some());
        }
    }

    #[test]
    fn timestamp_views_agree() {
        assert_eq!(
            build_stamp::zoned_date_time().naive_local(),
            build_stamp::local_date_time()
        );
    }

    #[test]
    fn banner_names_the_package() {
        assert!(super::formatted_banner().starts_with("buildstamp-demo 0.1.0 | built "));
    }
}
