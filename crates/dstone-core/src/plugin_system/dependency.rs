use thiserror::Error;

/// Error that can occur when resolving plugin dependencies
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DependencyError {
    /// A plugin referenced by name is not a registry key
    #[error("Plugin not found: {0}")]
    PluginNotFound(String),

    /// A declared dependency cannot be found in the registry. Carries both
    /// names for diagnostics.
    #[error("Dependency '{dependency}' for plugin '{plugin}' not found")]
    MissingDependency {
        plugin: String,
        dependency: String,
    },

    /// A dependency chain revisited a plugin already on the current
    /// resolution path. Names the full cycle.
    #[error("Circular dependency detected: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),
}

impl DependencyError {
    /// Build a [`DependencyError::CyclicDependency`] from a resolution path
    /// stack and the name that closed the cycle.
    ///
    /// The reported cycle starts at the first occurrence of `name` on the
    /// path and ends with `name` again, e.g. `A -> B -> A`.
    pub fn cycle_from_path(path: &[String], name: &str) -> Self {
        let start = path.iter().position(|p| p == name).unwrap_or(0);
        let mut cycle: Vec<String> = path[start..].to_vec();
        cycle.push(name.to_string());
        DependencyError::CyclicDependency(cycle)
    }
}
