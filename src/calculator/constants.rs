/// Relative tolerance for snapping a package ratio to the nearest whole
/// count, so float noise such as `1.1 / 0.1 = 11.000000000000002` does not
/// buy an extra package while any real excess still does.
pub const PACKAGE_TOLERANCE: f64 = 1e-12;

/// Smallest quantity a menu item entered by hand can have.
pub const MIN_PRODUCT_QUANTITY: u32 = 1;

/// Smallest manual ingredient amount.
pub const MIN_MANUAL_AMOUNT: f64 = 0.0;

/// Unit assumed for selected products when none is given.
pub const DEFAULT_PRODUCT_UNIT: &str = "pcs";

/// Minimum Jaro-Winkler similarity for a fuzzy product match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered to the user.
pub const FUZZY_MATCH_LIMIT: usize = 5;
