//! Constants used throughout the Helix generator

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["helix.json", "helix.yaml", "helix.yml"];

/// Default placeholder file suffix
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".template";

/// Ignore file name
pub const IGNORE_FILE: &str = ".helixignore";

/// Identity manifest produced by the upstream generators
pub const MANIFEST_FILE: &str = "package.json";

/// Environment file receiving injected variables
pub const ENV_FILE: &str = ".env";

/// Environment variable pointing at the packaged templates directory
pub const TEMPLATES_DIR_ENV: &str = "HELIX_TEMPLATES_DIR";

/// Name of the packaged templates directory
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Project target meaning "generate into the working directory"
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// Template identifier used when none is given
pub const DEFAULT_TEMPLATE: &str = "basicapp";

/// Placeholder tokens
pub mod tokens {
    pub const PROJECT_NAME: &str = "{{PROJECT_NAME}}";
    pub const DEFAULT_THEME: &str = "{{DEFAULT_THEME}}";
    pub const DEFAULT_MODE: &str = "{{DEFAULT_MODE}}";
}

/// Fixed values written by the manifest merge
pub mod manifest {
    pub const MODULE_TYPE: &str = "module";
    pub const LEGACY_MODULE_TYPE: &str = "commonjs";
    pub const DESCRIPTION: &str =
        "Fullstack React + Express application generated with Helix";
    pub const KEYWORD: &str = "helix-fullstack";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
