//! Configuration: schema, defaults and loading

pub mod macros;
mod schemas;
mod utils;

pub use schemas::*;
pub use utils::{
    apply_env_overrides, load_config_from_path, parse_config, read_config_file, unknown_keys,
    CONFIG_FILE_PATH,
};
