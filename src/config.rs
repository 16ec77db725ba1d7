/// Identity the application presents to remote servers.
///
/// Built once at startup and handed to every fetch by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    name: String,
    user_agent: String,
}

impl AppIdentity {
    /// Identity whose `User-Agent` is `"{name}/{version}"`.
    pub fn new(name: &str, version: &str) -> Self {
        AppIdentity {
            name: name.to_string(),
            user_agent: format!("{}/{}", name, version),
        }
    }

    pub fn with_user_agent(name: &str, user_agent: &str) -> Self {
        AppIdentity {
            name: name.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for AppIdentity {
    fn default() -> Self {
        AppIdentity::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
