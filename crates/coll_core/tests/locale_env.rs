mod common;

use coll_core::{ErrorKind, errors};

use common::english;

// Mutates the process environment, so this binary holds a single test.
#[test]
fn english_catalog_wins_over_locale_env() {
    // SAFETY: no other thread of this test binary reads the environment.
    unsafe { std::env::set_var(coll_resources::LOCALE_ENV, "zh-CN") };
    english();
    let err = errors::collection_modified();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert_eq!(
        err.message(),
        "Collection was modified; enumeration operation may not execute."
    );
}
