mod allocation_check;
mod allocation_policy;
mod capacity_calculator;
mod date_range_validator;
mod skill_matcher;
