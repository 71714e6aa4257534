// Centralized magic values & default locations
pub const DEFAULT_FRAMEWORK_DIR: &str = "/system/framework/";
