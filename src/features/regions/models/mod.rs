mod region;

pub use region::{find_region, is_known_region, Region, REGIONS};
