//! Default configuration values and the fixed InterMine source layout

/// Upstream InterMine repository
pub const DEFAULT_REPO: &str = "https://github.com/intermine/intermine.git";

/// Default branch to build
pub const DEFAULT_BRANCH: &str = "master";

/// Prefix for the scoped temporary directory holding the clone
pub const TMPDIR_PREFIX: &str = "intermine_boot_";

/// Name of the clone directory inside the temporary directory
pub const CLONE_DIR: &str = "intermine";

/// Module subdirectories in build order.
///
/// Later modules resolve artifacts that earlier modules' `install` task
/// publishes to the local repository, so this order must not change.
pub const MODULE_BUILD_ORDER: &[&[&str]] = &[
    &["plugin"],
    &["intermine"],
    &["bio"],
    &["bio", "sources"],
    &["bio", "postprocess"],
];

/// Build file carrying the core InterMine version
pub const IM_VERSION_FILE: &[&str] = &["intermine", "build.gradle"];

/// Build file carrying the bio layer version
pub const BIO_VERSION_FILE: &[&str] = &["bio", "build.gradle"];
