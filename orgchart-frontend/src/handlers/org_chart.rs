//! Org chart handlers.
//!
//! Thin JSON wrappers over the flattening and department resolution
//! services, used by the admin views' department and assignee pickers.

use axum::{Extension, Json};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{FlattenedNode, OrgNode};
use crate::services::{self, DepartmentResolution};
use crate::utils::{jwt::JwtClaims, JsonBody};

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Either a single chart root or a list of top-level groups.
#[derive(Debug)]
pub enum ChartPayload {
    Forest(Vec<OrgNode>),
    Tree(OrgNode),
}

impl<'de> Deserialize<'de> for ChartPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            value @ Value::Array(_) => serde_json::from_value(value)
                .map(ChartPayload::Forest)
                .map_err(D::Error::custom),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(ChartPayload::Tree)
                .map_err(D::Error::custom),
            _ => Err(D::Error::custom(
                "expected an org group object or an array of org groups",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DepartmentsRequest {
    #[serde(default)]
    pub nodes: Vec<FlattenedNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDepartmentRequest {
    pub department_name: String,
    #[serde(default)]
    pub nodes: Vec<FlattenedNode>,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentPolicyRequest {
    #[serde(default)]
    pub node: Option<FlattenedNode>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPolicyResponse {
    pub multi_select: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// Flatten a nested chart.
///
/// POST /api/org-chart/flatten
pub async fn flatten_chart(
    Extension(claims): Extension<JwtClaims>,
    JsonBody(payload): JsonBody<ChartPayload>,
) -> Json<Vec<FlattenedNode>> {
    let flat = match &payload {
        ChartPayload::Tree(root) => services::flatten(root),
        ChartPayload::Forest(roots) => services::flatten_forest(roots),
    };

    tracing::info!(subject = %claims.sub, node_count = flat.len(), "Flattened org chart");
    Json(flat)
}

/// Department groups under the Nodal Officer.
///
/// POST /api/org-chart/departments
pub async fn list_departments(
    JsonBody(req): JsonBody<DepartmentsRequest>,
) -> Json<Vec<FlattenedNode>> {
    let departments = services::list_departments(&req.nodes)
        .into_iter()
        .cloned()
        .collect();

    Json(departments)
}

/// HOD and service categories of one department.
///
/// POST /api/org-chart/departments/resolve
pub async fn resolve_department(
    JsonBody(req): JsonBody<ResolveDepartmentRequest>,
) -> Json<DepartmentResolution> {
    let resolution = services::resolve_department(&req.department_name, &req.nodes);

    tracing::info!(
        department = %req.department_name,
        resolved = resolution.is_resolved(),
        category_count = resolution.categories.len(),
        "Resolved department"
    );

    Json(resolution)
}

/// Whether the assignee picker for a node allows several people.
///
/// POST /api/org-chart/assignment-policy
pub async fn assignment_policy(
    JsonBody(req): JsonBody<AssignmentPolicyRequest>,
) -> Json<AssignmentPolicyResponse> {
    Json(AssignmentPolicyResponse {
        multi_select: services::allows_multi_select_assignment(req.node.as_ref()),
    })
}
