mod assignment;
mod calendar;
mod engineer;
mod project;
mod project_status;
mod skill_set;
