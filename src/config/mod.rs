//! Run settings and path helpers.
//!
//! Settings are optional: everything can also be given on the command line,
//! and command-line values win.

mod path;
mod settings;

pub use path::{expand_home, home_dir, resolve_path};
pub use settings::{ConfigFormat, Settings, load_settings, load_settings_from_str};
