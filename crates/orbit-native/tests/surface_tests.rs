// Host-side tests for surface capability selection.

mod surface {
    include!("../src/surface.rs");
}

use surface::first_supported;

#[test]
fn first_capability_is_chosen() {
    let modes = [3u8, 1, 2];
    assert_eq!(first_supported(&modes, "alpha modes").unwrap(), 3);
}

#[test]
fn empty_capabilities_are_an_error() {
    let none: [u8; 0] = [];
    let err = first_supported(&none, "alpha modes").unwrap_err();
    assert_eq!(err.to_string(), "surface reports no alpha modes");
}
