use serde::Serialize;

/// Default version assigned when a plugin manifest omits one.
pub const DEFAULT_PLUGIN_VERSION: &str = "0.1";

/// Default description assigned when a plugin manifest omits one.
pub const DEFAULT_PLUGIN_DESCRIPTION: &str = "No description provided";

/// Static identity and scheduling metadata for a plugin.
///
/// The descriptor is supplied at registration time and never changes
/// afterwards. `name` is the unique registry key; `priority` orders
/// plugins that share no dependency relationship (lower value runs
/// earlier); `dependencies` lists the names of plugins that must be
/// initialized and executed before this one, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginDescriptor {
    /// Unique registry key
    pub name: String,

    /// Plugin version (informational)
    pub version: String,

    /// Plugin description (informational)
    pub description: String,

    /// Alternate lookup names; metadata only, the resolver and scheduler
    /// operate on canonical names
    pub aliases: Vec<String>,

    /// Scheduling priority; lower value = scheduled earlier among
    /// independent plugins
    pub priority: i32,

    /// Names of plugins that must run before this one, in declaration order
    pub dependencies: Vec<String>,

    /// Whether the plugin can maintain session state (metadata only;
    /// session storage is out of scope)
    pub sessionable: bool,
}

impl PluginDescriptor {
    /// Create a descriptor with the given name and default metadata
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: DEFAULT_PLUGIN_VERSION.to_string(),
            description: DEFAULT_PLUGIN_DESCRIPTION.to_string(),
            aliases: Vec::new(),
            priority: 0,
            dependencies: Vec::new(),
            sessionable: false,
        }
    }

    /// Set the plugin version
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Set the plugin description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Add an alternate lookup name
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Set the scheduling priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a dependency on another plugin by name
    pub fn with_dependency(mut self, name: &str) -> Self {
        self.dependencies.push(name.to_string());
        self
    }

    /// Mark the plugin as session-capable
    pub fn with_sessionable(mut self, sessionable: bool) -> Self {
        self.sessionable = sessionable;
        self
    }
}

impl std::fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (v{}): {}", self.name, self.version, self.description)
    }
}
