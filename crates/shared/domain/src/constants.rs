//! Wire names of the contract.
//!
//! Programme keys are the column headers of the announcement schedule and are
//! kept verbatim, spaces included.

pub const ROUTE: &str = "Route";
pub const STATION: &str = "Station";
pub const ON_APPROACH: &str = "On Approach";
pub const AT_STATION: &str = "At Station";
pub const TERMINATING: &str = "Terminating";
pub const TRANSFER_1: &str = "Transfer 1";
pub const TRANSFER_2: &str = "Transfer 2";
pub const TRANSFER_3: &str = "Transfer 3";
pub const ROOT: &str = "Root";

/// Programme column headers in declaration order.
pub const PROGRAMME_COLUMNS: [&str; 9] = [
    ROUTE,
    STATION,
    ON_APPROACH,
    AT_STATION,
    TERMINATING,
    TRANSFER_1,
    TRANSFER_2,
    TRANSFER_3,
    ROOT,
];

pub const PACK_NAME: &str = "name";
pub const PACK_FILES: &str = "files";

/// Pack keys in declaration order.
pub const PACK_KEYS: [&str; 2] = [PACK_NAME, PACK_FILES];
