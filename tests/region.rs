use tile_mouse::pointer::Region;

#[test]
fn containment_is_half_open() {
    let region = Region::new(10, 10, 20, 20);

    assert!(region.contains(10, 10));
    assert!(region.contains(29, 29));
    assert!(!region.contains(30, 29));
    assert!(!region.contains(29, 30));
    assert!(!region.contains(9, 10));
    assert!(!region.contains(10, 9));
}

#[test]
fn empty_region_contains_nothing() {
    let region = Region::new(5, 5, 0, 0);
    assert!(!region.contains(5, 5));
}
