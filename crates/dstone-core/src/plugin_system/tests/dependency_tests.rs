use crate::plugin_system::dependency::DependencyError;

#[test]
fn cycle_from_path_names_the_full_cycle() {
    let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let err = DependencyError::cycle_from_path(&path, "b");
    assert_eq!(
        err,
        DependencyError::CyclicDependency(vec![
            "b".to_string(),
            "c".to_string(),
            "b".to_string(),
        ])
    );
    assert_eq!(err.to_string(), "Circular dependency detected: b -> c -> b");
}

#[test]
fn missing_dependency_names_both_plugins() {
    let err = DependencyError::MissingDependency {
        plugin: "charts".to_string(),
        dependency: "datasource".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Dependency 'datasource' for plugin 'charts' not found"
    );
}
