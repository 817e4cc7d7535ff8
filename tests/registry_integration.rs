//! Registry mounting tests: default name, operator-chosen alias, isolated
//! registry instances, custom datasets

use std::sync::Arc;

use heroicons_render::{
    register_icon_component, ComponentRegistry, IconSet, RegistryConfig, RegistryError,
    RenderRequest,
};

#[test]
fn test_default_registration() {
    let mut registry = ComponentRegistry::new();
    register_icon_component(&mut registry, &RegistryConfig::default()).unwrap();

    let component = registry.get("icon").expect("Should be registered");
    let icon = component
        .resolve(&RenderRequest::new("ellipsis-vertical"))
        .unwrap();
    assert!(!icon.paths.is_empty());
}

#[test]
fn test_icon_with_custom_component_name() {
    let mut registry = ComponentRegistry::new();
    let config = RegistryConfig::new().with_component_name("my_icon");
    register_icon_component(&mut registry, &config).unwrap();

    assert!(!registry.contains("icon"));
    let component = registry.get("my_icon").expect("Should be registered");
    let icon = component
        .resolve(&RenderRequest::new("ellipsis-vertical").with_color("teal"))
        .unwrap();
    assert_eq!(icon.attrs.get("stroke").map(String::as_str), Some("teal"));
}

#[test]
fn test_icon_with_custom_registry() {
    // Mounting into one registry leaves another untouched.
    let mut custom_registry = ComponentRegistry::new();
    let default_registry = ComponentRegistry::new();

    register_icon_component(&mut custom_registry, &RegistryConfig::default()).unwrap();

    assert!(custom_registry.contains("icon"));
    assert!(!default_registry.contains("icon"));
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = ComponentRegistry::new();
    register_icon_component(&mut registry, &RegistryConfig::default()).unwrap();

    let result = register_icon_component(&mut registry, &RegistryConfig::default());
    assert!(matches!(result, Err(RegistryError::Duplicate { .. })));
}

#[test]
fn test_reregister_after_unregister() {
    let mut registry = ComponentRegistry::new();
    register_icon_component(&mut registry, &RegistryConfig::default()).unwrap();

    registry.unregister("icon").unwrap();
    assert!(!registry.contains("icon"));

    // A fresh mount under the same name works once the slot is free.
    register_icon_component(&mut registry, &RegistryConfig::default()).unwrap();
    assert!(registry.contains("icon"));
}

#[test]
fn test_unregister_missing_errors() {
    let mut registry = ComponentRegistry::new();
    let result = registry.unregister("icon");
    assert!(matches!(result, Err(RegistryError::NotRegistered { .. })));
}

#[test]
fn test_custom_dataset_component() {
    let icons = IconSet::from_str(
        r#"
[icons]
outline_dot = [{ d = "M12 12h.01" }]
"#,
    )
    .expect("Should parse");

    let mut registry = ComponentRegistry::new();
    let config = RegistryConfig::new()
        .with_component_name("dot_icon")
        .with_icons(Arc::new(icons));
    register_icon_component(&mut registry, &config).unwrap();

    let component = registry.get("dot_icon").expect("Should be registered");
    let icon = component.resolve(&RenderRequest::new("dot")).unwrap();
    assert_eq!(
        icon.paths[0].get("d").map(String::as_str),
        Some("M12 12h.01")
    );

    // Bundled names are not visible through the custom dataset.
    let result = component.resolve(&RenderRequest::new("heart"));
    assert!(result.is_err());
}

#[test]
fn test_component_names_listing() {
    let mut registry = ComponentRegistry::new();
    register_icon_component(&mut registry, &RegistryConfig::default()).unwrap();
    register_icon_component(
        &mut registry,
        &RegistryConfig::new().with_component_name("hero"),
    )
    .unwrap();

    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["hero", "icon"]);
}
