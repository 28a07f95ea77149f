use flexlay::{Axis, ElementSpec, Flexlay, LayoutRect};

/// Border insets the content area on both ends of both axes.
#[test]
fn border_insets_both_axes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut flex = Flexlay::new();
    let container = flex.create_element(ElementSpec {
        bounds: LayoutRect::new(0, 0, 100, 50),
        border: 5,
        spacing: 0,
        ..Default::default()
    });
    let child = flex.create_element(ElementSpec { parent: Some(container), ..Default::default() });

    flex.perform_layout();

    assert_eq!(flex.element_rect(child), LayoutRect::new(5, 5, 90, 40));
}

/// Same inset behavior with a vertical growth axis and a translated origin.
#[test]
fn border_insets_follow_container_origin() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut flex = Flexlay::new();
    let container = flex.create_element(ElementSpec {
        bounds: LayoutRect::new(10, 20, 60, 100),
        border: 4,
        spacing: 0,
        axis: Axis::Vertical,
        ..Default::default()
    });
    let child = flex.create_element(ElementSpec { parent: Some(container), ..Default::default() });

    flex.perform_layout();

    assert_eq!(flex.element_rect(child), LayoutRect::new(14, 24, 52, 92));
}
