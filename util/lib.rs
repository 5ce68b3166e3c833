pub mod scenario_util;
pub mod test_util;
