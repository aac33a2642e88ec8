//! Config serialization to TOML
//!
//! Single source of truth for the config file format: the template written
//! on first run and by `config --reset` both come from here.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let session = match &self.session_cookie {
            Some(cookie) => format!("session_cookie = {:?}\n", cookie),
            None => "# session_cookie = \"session=...\"\n".to_string(),
        };

        format!(
            r#"# rosterview configuration
# Environment variables override these values (see each option)

# Dashboard base URL; the roster is fetched from <base_url>/api/dashboard/kelompok
# Env: ROSTER_BASE_URL
base_url = {base_url:?}

# Cookie header sent with the roster request
# Env: ROSTER_SESSION
{session}
# Theme: Night, Paper, Terminal
# Env: ROSTER_THEME
theme = {theme:?}

[logging]
# Level: trace, debug, info, warn, error (RUST_LOG overrides)
level = {level:?}
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = {file_dir:?}
# Rotation: hourly, daily, never
file_rotation = {file_rotation:?}
file_prefix = {file_prefix:?}
"#,
            base_url = self.base_url,
            session = session,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
