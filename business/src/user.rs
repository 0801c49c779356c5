use serde::{Deserialize, Serialize};

/// A user record as served by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identity assigned by the server.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Bare host name, e.g. `hildegard.org`.
    pub website: String,
}

impl User {
    /// Link target for the website column.
    ///
    /// The endpoint serves bare host names, so `http://` is prefixed unless a
    /// scheme is already present.
    pub fn website_url(&self) -> String {
        if self.website.starts_with("http://") || self.website.starts_with("https://") {
            self.website.clone()
        } else {
            format!("http://{}", self.website)
        }
    }
}
