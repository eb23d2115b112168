pub mod skill_matcher;
