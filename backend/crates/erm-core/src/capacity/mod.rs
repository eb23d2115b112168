pub mod allocation_check;
pub mod allocation_policy;
pub mod capacity_calculator;
pub mod date_range_validator;
