/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `monitor-keeper init` to create a starter config file
/// that users can immediately edit.
pub fn generate_config() -> String {
    r##"# Monitor Keeper configuration
# Location: ~/.config/monitor-keeper/config.toml

[monitors]
# Largest monitor count a window layout is remembered for (2 to 16).
# Layouts are saved separately for every count from 2 up to this value.
max_monitors = 5

[timing]
# Milliseconds to wait after the last window move before saving positions.
capture_delay_ms = 200
# Milliseconds to wait after the last display change before checking
# the monitor count and restoring windows.
transition_delay_ms = 500

[logging]
# Enable file logging to ~/.config/monitor-keeper/logs/monitor-keeper.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
# "debug" logs every saved and restored window position.
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
