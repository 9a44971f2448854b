use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuxOptions {
    /// Redirect `/tree` to `/tree/` when only the latter is registered.
    pub redirect_trailing_slash: bool,
    /// Redirect requests whose path is not in canonical form.
    pub redirect_unclean_paths: bool,
    /// Consult host-qualified patterns before path-only ones.
    pub host_routing: bool,
}

impl Default for MuxOptions {
    fn default() -> Self {
        Self {
            redirect_trailing_slash: true,
            redirect_unclean_paths: true,
            host_routing: true,
        }
    }
}

impl MuxOptions {
    pub fn builder() -> MuxOptionsBuilder {
        MuxOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MuxOptionsBuilder {
    options: MuxOptions,
}

impl MuxOptionsBuilder {
    pub fn redirect_trailing_slash(mut self, value: bool) -> Self {
        self.options.redirect_trailing_slash = value;
        self
    }

    pub fn redirect_unclean_paths(mut self, value: bool) -> Self {
        self.options.redirect_unclean_paths = value;
        self
    }

    pub fn host_routing(mut self, value: bool) -> Self {
        self.options.host_routing = value;
        self
    }

    pub fn build(self) -> MuxOptions {
        self.options
    }
}
