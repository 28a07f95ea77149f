use flexlay::{Axis, ElementSpec, Flexlay, LayoutRect};

/// The classic host shell: a vertical root with a fixed-height toolbar row
/// holding three buttons. Grandchildren must be placed from the toolbar's
/// post-layout rectangle, not the root's.
#[test]
fn grandchildren_use_their_parents_computed_rect() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut flex = Flexlay::new();
    let shell = flex.create_element(ElementSpec {
        bounds: LayoutRect::new(10, 10, 236, 220),
        axis: Axis::Vertical,
        ..Default::default()
    });
    let toolbar = flex.create_element(ElementSpec {
        parent: Some(shell),
        bounds: LayoutRect::new(0, 0, 0, 40),
        proportion: 0,
        axis: Axis::Horizontal,
        ..Default::default()
    });
    let open = flex.create_element(ElementSpec {
        parent: Some(toolbar),
        bounds: LayoutRect::new(0, 0, 60, 0),
        proportion: 1,
        ..Default::default()
    });
    let save = flex.create_element(ElementSpec {
        parent: Some(toolbar),
        bounds: LayoutRect::new(0, 0, 60, 0),
        proportion: 0,
        ..Default::default()
    });
    let close = flex.create_element(ElementSpec {
        parent: Some(toolbar),
        bounds: LayoutRect::new(0, 0, 60, 0),
        proportion: 1,
        ..Default::default()
    });

    flex.perform_layout();

    let shell_rect = flex.element_rect(shell);
    let toolbar_rect = flex.element_rect(toolbar);
    assert_eq!(shell_rect, LayoutRect::new(10, 10, 236, 220));
    assert_eq!(toolbar_rect, LayoutRect::new(13, 13, 230, 40));

    let ro = flex.element_rect(open);
    let rs = flex.element_rect(save);
    let rc = flex.element_rect(close);
    assert_eq!(ro, LayoutRect::new(16, 16, 79, 34));
    assert_eq!(rs, LayoutRect::new(98, 16, 57, 34));
    assert_eq!(rc, LayoutRect::new(158, 16, 82, 34));

    // Buttons are positioned and inset relative to the toolbar's computed
    // rect, one level down from the shell.
    assert_eq!(ro.x, toolbar_rect.x + 3);
    assert_eq!(ro.y, toolbar_rect.y + 3);
    assert_eq!(ro.height, toolbar_rect.height - 6);

    // Occupancy never exceeds the container: widths plus the two shrunk
    // spacings plus both border insets add up to at most the toolbar width.
    let occupied = ro.width + rs.width + rc.width + 2 * 3 + 2 * 3;
    assert!(occupied <= toolbar_rect.width);
}
