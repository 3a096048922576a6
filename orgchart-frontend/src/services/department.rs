//! Department resolution over a flattened org chart.
//!
//! Departments hang directly under the Nodal Officer group. Each department
//! may have a Head of Department group, whose service-category children are
//! the complaint categories that department handles.
//!
//! Every lookup is first-match in sequence order. Uniqueness of the Nodal
//! Officer, of department names under it and of the HOD per department is
//! not enforced; duplicate Nodal Officers, departments and HODs are logged
//! at `debug`.

use serde::Serialize;

use crate::models::{FlattenedNode, RoleTier};

/// HOD and service categories resolved for one department.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepartmentResolution {
    pub hod: Option<FlattenedNode>,
    pub categories: Vec<FlattenedNode>,
}

impl DepartmentResolution {
    pub fn is_resolved(&self) -> bool {
        self.hod.is_some()
    }
}

/// First node matching `predicate`, and whether a second one exists.
fn first_match<'a, P>(nodes: &'a [FlattenedNode], predicate: P) -> (Option<&'a FlattenedNode>, bool)
where
    P: Fn(&FlattenedNode) -> bool,
{
    let mut matches = nodes.iter().filter(|n| predicate(n));
    let first = matches.next();
    let duplicated = first.is_some() && matches.next().is_some();
    (first, duplicated)
}

/// First node holding the Nodal Officer role.
pub fn find_nodal_officer(nodes: &[FlattenedNode]) -> Option<&FlattenedNode> {
    let (first, duplicated) = first_match(nodes, |n| n.has_role(RoleTier::NodalOfficer));
    if duplicated {
        tracing::debug!(
            nodal_officer_id = ?first.and_then(|n| n.id),
            "Multiple Nodal Officer groups found, using the first"
        );
    }
    first
}

/// First node with the given id.
pub fn find_node(nodes: &[FlattenedNode], id: i64) -> Option<&FlattenedNode> {
    nodes.iter().find(|n| n.id == Some(id))
}

/// Department groups directly under the Nodal Officer, in sequence order.
///
/// Empty when the chart has no Nodal Officer.
pub fn list_departments(nodes: &[FlattenedNode]) -> Vec<&FlattenedNode> {
    match find_nodal_officer(nodes) {
        Some(anchor) => nodes.iter().filter(|n| n.is_child_of(anchor)).collect(),
        None => Vec::new(),
    }
}

/// Resolve the HOD and service categories of `department_name`.
///
/// Returns an empty resolution when the chart has no Nodal Officer, when no
/// group named `department_name` sits directly under it, or when that
/// department has no HOD yet.
#[tracing::instrument(level = "debug", skip(nodes), fields(node_count = nodes.len()))]
pub fn resolve_department(department_name: &str, nodes: &[FlattenedNode]) -> DepartmentResolution {
    let Some(anchor) = find_nodal_officer(nodes) else {
        tracing::debug!("No Nodal Officer group in chart");
        return DepartmentResolution::default();
    };

    let (department, duplicated) = first_match(nodes, |n| {
        n.group_name == department_name && n.is_child_of(anchor)
    });
    let Some(department) = department else {
        tracing::debug!(anchor_id = ?anchor.id, "Department not found under Nodal Officer");
        return DepartmentResolution::default();
    };
    if duplicated {
        tracing::debug!(
            department_id = ?department.id,
            "Multiple department groups share this name, using the first"
        );
    }

    let (hod, duplicated) = first_match(nodes, |n| {
        n.is_child_of(department) && n.has_role(RoleTier::HeadOfDepartment)
    });
    let Some(hod) = hod else {
        tracing::debug!(department_id = ?department.id, "Department has no HOD");
        return DepartmentResolution::default();
    };
    if duplicated {
        tracing::debug!(hod_id = ?hod.id, "Multiple HOD groups in department, using the first");
    }

    let categories = nodes
        .iter()
        .filter(|n| n.is_child_of(hod) && n.is_service_category)
        .cloned()
        .collect();

    DepartmentResolution {
        hod: Some(hod.clone()),
        categories,
    }
}

/// Whether an assignment widget for `node` may select more than one person.
///
/// MD, Nodal Officer and HOD role groups are single-occupant positions.
/// Any other group, role-bearing or not, allows multiple assignees.
pub fn allows_multi_select_assignment(node: Option<&FlattenedNode>) -> bool {
    match node {
        None => false,
        Some(node) => !(node.is_role_group && node.role.is_some_and(RoleTier::is_single_occupant)),
    }
}
