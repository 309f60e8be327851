#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_is_empty_outside_the_browser() {
    assert_eq!(BrowserStorage.get("mode"), None);
}

#[test]
fn set_is_dropped_outside_the_browser() {
    BrowserStorage.set("mode", "dark");
    assert_eq!(BrowserStorage.get("mode"), None);
}
