pub(crate) mod dof;
pub(crate) mod path;
pub(crate) mod planner;
