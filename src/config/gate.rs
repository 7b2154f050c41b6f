use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static routing rules for the edge gate, fixed at startup.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct GateConfig {
    /// Leading path segments treated as redundant language codes.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    /// Path prefixes that need the auth cookie, checked in order.
    #[serde(default = "default_protected_prefixes")]
    pub protected_prefixes: Vec<String>,
    /// Name of the cookie whose presence satisfies the auth check.
    #[serde(default = "default_auth_cookie")]
    pub auth_cookie: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Query parameter carrying the originally requested path to the login flow.
    #[serde(default = "default_return_param")]
    pub return_param: String,
}

fn default_locales() -> Vec<String> {
    vec!["vi".to_string(), "en".to_string()]
}

fn default_protected_prefixes() -> Vec<String> {
    vec!["/checkout".to_string(), "/account".to_string()]
}

fn default_auth_cookie() -> String {
    "auth_token".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_return_param() -> String {
    "returnUrl".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            protected_prefixes: default_protected_prefixes(),
            auth_cookie: default_auth_cookie(),
            login_path: default_login_path(),
            return_param: default_return_param(),
        }
    }
}
