pub mod department;
pub mod org_chart;

pub use department::{
    allows_multi_select_assignment, find_node, find_nodal_officer, list_departments,
    resolve_department, DepartmentResolution,
};
pub use org_chart::{flatten, flatten_forest};
