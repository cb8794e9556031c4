use pathstep::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and return ColoredString
    let label = colors.node_label("A");
    assert!(label.to_string().contains("A"));

    let current = colors.current_node("B");
    assert!(current.to_string().contains("B"));

    let edge = colors.edge_id("ab");
    assert!(edge.to_string().contains("ab"));

    let success = colors.success("Success");
    assert!(success.to_string().contains("Success"));

    let error = colors.error("Error");
    assert!(error.to_string().contains("Error"));

    let step = colors.step_number("Step 1/6");
    assert!(step.to_string().contains("Step 1/6"));

    let unreachable = colors.unreachable("∞");
    assert!(unreachable.to_string().contains("∞"));

    let num = colors.number("21");
    assert!(num.to_string().contains("21"));

    let stats = colors.stats("Stats");
    assert!(stats.to_string().contains("Stats"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.node_label("A").to_string(), "A");
    assert_eq!(colors.current_node("B").to_string(), "B");
    assert_eq!(colors.unreachable("∞").to_string(), "∞");
    assert_eq!(colors.error("Error").to_string(), "Error");
}
