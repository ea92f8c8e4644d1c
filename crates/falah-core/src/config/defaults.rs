// --- Default value functions ---

pub(super) fn default_name() -> String {
    "Al Falah".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}
