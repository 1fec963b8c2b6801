#![allow(dead_code)]

use coll_core::Dict;
use coll_resources::{CatalogConfig, Locale, catalog, install};

/// Pins the process-wide catalog to English so message assertions do not
/// depend on `COLL_LOCALE`. Call it first in any test that can build an
/// error; only the first call installs, later calls check the result.
pub fn english() {
    let _ = install(CatalogConfig::new(Locale::En));
    assert_eq!(
        catalog().locale(),
        Locale::En,
        "catalog was initialized before english() ran"
    );
}

/// {1: "a", 2: "b", 3: "a"}
pub fn abc_dict() -> Dict<i32, String> {
    english();
    Dict::try_from_pairs([(1, "a".to_string()), (2, "b".to_string()), (3, "a".to_string())])
        .expect("distinct keys")
}
