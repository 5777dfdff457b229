use crate::theme::organizer::{SortOrder, color_family, organize, sort_order_for};
use crate::theme::variable::{DeclarationSequence, RawVariable, VariableType};

fn sequence(entries: &[(&str, &str)]) -> DeclarationSequence {
    entries
        .iter()
        .map(|(name, value)| RawVariable::new(*name, *value))
        .collect()
}

fn short_names(result: &crate::theme::variable::OrganizedVariables, namespace: &str) -> Vec<String> {
    result
        .get(namespace)
        .unwrap_or_default()
        .iter()
        .map(|v| v.name.clone())
        .collect()
}

#[test]
fn test_color_type_from_oklch() {
    let result = organize(&[sequence(&[("--color-brand-500", "oklch(0.65 0.20 200)")])]);

    let color = result.get("color").unwrap();
    assert_eq!(color[0].variable_type, VariableType::Color);
    assert_eq!(color[0].name, "brand-500");
    assert_eq!(color[0].var_name, "--color-brand-500");
    assert_eq!(color[0].namespace, "color");
    assert_eq!(color[0].resolved_value, None);
}

#[test]
fn test_size_type_from_rem() {
    let result = organize(&[sequence(&[
        ("--spacing-4", "1rem"),
        ("--spacing-custom", "2.5rem"),
    ])]);

    let spacing = result.get("spacing").unwrap();
    assert_eq!(spacing.len(), 2);
    assert!(spacing.iter().all(|v| v.variable_type == VariableType::Size));
}

#[test]
fn test_font_type_from_quoted_string() {
    let result = organize(&[sequence(&[("--font-sans", r#""Inter", system-ui, sans-serif"#)])]);

    let font = result.get("font").unwrap();
    assert_eq!(font[0].variable_type, VariableType::Font);
    assert_eq!(font[0].name, "sans");
}

#[test]
fn test_reference_resolved_to_color() {
    let result = organize(&[sequence(&[
        ("--color-base", "oklch(0.5 0.2 240)"),
        ("--color-hover", "var(--color-base)"),
    ])]);

    let color = result.get("color").unwrap();
    assert_eq!(color.len(), 2);

    let hover = color.iter().find(|v| v.name == "hover").unwrap();
    assert_eq!(hover.variable_type, VariableType::Color);
    assert_eq!(hover.value, "var(--color-base)");
    assert_eq!(hover.resolved_value.as_deref(), Some("oklch(0.5 0.2 240)"));
    assert_eq!(hover.effective_value(), "oklch(0.5 0.2 240)");
}

#[test]
fn test_forward_reference_across_sequences() {
    // The lookup covers every sequence before resolution starts
    let result = organize(&[
        sequence(&[("--radius-card", "var(--radius-lg)")]),
        sequence(&[("--radius-lg", "0.5rem")]),
    ]);

    let radius = result.get("radius").unwrap();
    let card = radius.iter().find(|v| v.name == "card").unwrap();
    assert_eq!(card.resolved_value.as_deref(), Some("0.5rem"));
    assert_eq!(card.variable_type, VariableType::Size);
}

#[test]
fn test_reference_uses_last_declaration() {
    let result = organize(&[
        sequence(&[
            ("--color-base", "#ff0000"),
            ("--color-link", "var(--color-base)"),
        ]),
        sequence(&[("--color-base", "#00ff00")]),
    ]);

    let color = result.get("color").unwrap();
    let link = color.iter().find(|v| v.name == "link").unwrap();
    assert_eq!(link.resolved_value.as_deref(), Some("#00ff00"));
}

#[test]
fn test_unresolved_reference_is_reference_type() {
    let result = organize(&[sequence(&[
        ("--color-a", "var(--color-b)"),
        ("--color-b", "var(--color-a)"),
        ("--shadow-card", "var(--shadow-missing)"),
    ])]);

    for variable in result.get("color").unwrap() {
        assert_eq!(variable.resolved_value, None);
        assert_eq!(variable.variable_type, VariableType::Reference);
    }
    let shadow = result.get("shadow").unwrap();
    assert_eq!(shadow[0].resolved_value, None);
    assert_eq!(shadow[0].variable_type, VariableType::Reference);
}

#[test]
fn test_spacing_sorted_numerically() {
    let result = organize(&[sequence(&[
        ("--spacing-20", "5rem"),
        ("--spacing-4", "1rem"),
        ("--spacing-8", "2rem"),
    ])]);

    assert_eq!(short_names(&result, "spacing"), vec!["4", "8", "20"]);
}

#[test]
fn test_spacing_non_numeric_sorts_first_and_stable() {
    let result = organize(&[sequence(&[
        ("--spacing-8", "2rem"),
        ("--spacing-wide", "3rem"),
        ("--spacing-narrow", "1px"),
        ("--spacing-0", "0px"),
    ])]);

    assert_eq!(
        short_names(&result, "spacing"),
        vec!["wide", "narrow", "0", "8"]
    );
}

#[test]
fn test_color_families_keep_first_seen_order() {
    let result = organize(&[sequence(&[
        ("--color-red-500", "#ef4444"),
        ("--color-blue-200", "#bfdbfe"),
        ("--color-red-100", "#fee2e2"),
    ])]);

    assert_eq!(
        short_names(&result, "color"),
        vec!["red-100", "red-500", "blue-200"]
    );
}

#[test]
fn test_color_families_are_not_alphabetized() {
    let result = organize(&[sequence(&[
        ("--color-zinc-500", "#71717a"),
        ("--color-blue-500", "#3b82f6"),
        ("--color-amber-500", "#f59e0b"),
        ("--color-zinc-50", "#fafafa"),
    ])]);

    assert_eq!(
        short_names(&result, "color"),
        vec!["zinc-50", "zinc-500", "blue-500", "amber-500"]
    );
}

#[test]
fn test_other_namespaces_sorted_alphabetically() {
    let result = organize(&[sequence(&[
        ("--radius-xl", "0.75rem"),
        ("--radius-lg", "0.5rem"),
        ("--radius-sm", "0.25rem"),
    ])]);

    assert_eq!(short_names(&result, "radius"), vec!["lg", "sm", "xl"]);
}

#[test]
fn test_unknown_namespace_is_other() {
    let result = organize(&[sequence(&[("--custom-value", "123")])]);

    let other = result.get("other").unwrap();
    assert_eq!(other[0].namespace, "other");
    assert_eq!(other[0].name, "custom-value");
    assert_eq!(other[0].variable_type, VariableType::Other);
}

#[test]
fn test_empty_input() {
    let result = organize(&[]);
    assert!(result.is_empty());
    assert_eq!(result.total(), 0);

    let result = organize(&[Vec::new(), Vec::new()]);
    assert!(result.is_empty());
}

#[test]
fn test_duplicate_last_wins() {
    let result = organize(&[
        sequence(&[("--color-primary", "#ff0000")]),
        sequence(&[("--color-primary", "#00ff00")]),
    ]);

    let color = result.get("color").unwrap();
    assert_eq!(color.len(), 1);
    assert_eq!(color[0].value, "#00ff00");
}

#[test]
fn test_duplicate_within_one_sequence() {
    let result = organize(&[sequence(&[
        ("--color-primary", "#ff0000"),
        ("--color-primary", "#00ff00"),
    ])]);

    let color = result.get("color").unwrap();
    assert_eq!(color.len(), 1);
    assert_eq!(color[0].value, "#00ff00");
}

#[test]
fn test_short_names() {
    let result = organize(&[sequence(&[
        ("--color-mint-500", "#00ff00"),
        ("--spacing-custom-large", "5rem"),
    ])]);

    assert_eq!(short_names(&result, "color"), vec!["mint-500"]);
    assert_eq!(short_names(&result, "spacing"), vec!["custom-large"]);
}

#[test]
fn test_namespaces_in_first_seen_order() {
    let result = organize(&[sequence(&[
        ("--spacing-4", "1rem"),
        ("--color-red-500", "#f00"),
        ("--spacing-2", "0.5rem"),
        ("--font-sans", "\"Inter\""),
    ])]);

    let namespaces: Vec<&str> = result.namespaces().collect();
    assert_eq!(namespaces, vec!["spacing", "color", "font"]);
    assert_eq!(result.total(), 4);
    assert_eq!(result.len(), 3);
}

#[test]
fn test_json_shape() {
    let result = organize(&[sequence(&[
        ("--spacing-4", "1rem"),
        ("--color-base", "#fff"),
        ("--color-link", "var(--color-base)"),
    ])]);

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        concat!(
            r##"{"spacing":[{"name":"4","varName":"--spacing-4","value":"1rem","type":"size","namespace":"spacing"}],"##,
            r##""color":[{"name":"base","varName":"--color-base","value":"#fff","type":"color","namespace":"color"},"##,
            r##"{"name":"link","varName":"--color-link","value":"var(--color-base)","resolvedValue":"#fff","type":"color","namespace":"color"}]}"##
        )
    );
}

#[test]
fn test_empty_json_is_empty_object() {
    let json = serde_json::to_string(&organize(&[])).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_sort_dispatch() {
    assert_eq!(sort_order_for("spacing"), SortOrder::Numeric);
    assert_eq!(sort_order_for("color"), SortOrder::ColorFamily);
    assert_eq!(sort_order_for("radius"), SortOrder::Alphabetical);
    assert_eq!(sort_order_for("other"), SortOrder::Alphabetical);
}

#[test]
fn test_color_family() {
    assert_eq!(color_family("red-500"), "red");
    assert_eq!(color_family("brand"), "brand");
    assert_eq!(color_family("primary-dark-900"), "primary-dark");
    assert_eq!(color_family("500"), "500");
}
