//! Org group model - the nested chart served upstream and its flat form.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use super::RoleTier;

// Upstream charts are not validated: a field that is missing, `null` or of
// an unexpected type falls back to its empty value instead of rejecting the
// whole chart. Numbers sent as strings (and the reverse) are carried through.

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<RoleTier>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_code(deserializer)?.map(RoleTier::from))
}

/// Keep the readable elements of an array; anything else is empty.
fn lenient_seq<'de, D, C>(deserializer: D) -> Result<C, D::Error>
where
    D: Deserializer<'de>,
    C: IntoIterator + FromIterator<<C as IntoIterator>::Item>,
    C::Item: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => std::iter::empty().collect(),
    })
}

/// A person mapped onto an org group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub user_code: String,
    #[serde(deserialize_with = "lenient_string")]
    pub user_detail: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub departments: BTreeSet<String>,
}

/// Org group as served by the upstream directory, with its child groups.
///
/// Every field is optional on the wire. Missing, `null` or wrongly typed
/// values fall back to empty defaults instead of rejecting the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrgNode {
    #[serde(deserialize_with = "lenient_code")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub group_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub is_role_group: bool,
    #[serde(rename = "roleId", deserialize_with = "lenient_role")]
    pub role: Option<RoleTier>,
    #[serde(deserialize_with = "lenient")]
    pub is_service_category: bool,
    #[serde(deserialize_with = "lenient_text")]
    pub unit_id: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub mapped_user: Vec<UserDetails>,
    #[serde(deserialize_with = "lenient_seq")]
    pub child_groups: Vec<OrgNode>,
}

impl OrgNode {
    /// Create a group with no role, users or children.
    pub fn new(id: i64, group_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            group_name: group_name.into(),
            ..Self::default()
        }
    }

    /// Mark this group as a role group of the given tier.
    pub fn with_role(mut self, role: RoleTier) -> Self {
        self.is_role_group = true;
        self.role = Some(role);
        self
    }

    /// Mark this group as a service category leaf.
    pub fn as_service_category(mut self) -> Self {
        self.is_service_category = true;
        self
    }

    pub fn with_child(mut self, child: OrgNode) -> Self {
        self.child_groups.push(child);
        self
    }

    pub fn with_user(mut self, user: UserDetails) -> Self {
        self.mapped_user.push(user);
        self
    }

    /// Number of groups in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.child_groups.iter());
        }
        count
    }
}

/// Org group with its children detached and a link to its parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlattenedNode {
    #[serde(deserialize_with = "lenient_code")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub group_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub is_role_group: bool,
    #[serde(rename = "roleId", deserialize_with = "lenient_role")]
    pub role: Option<RoleTier>,
    #[serde(deserialize_with = "lenient")]
    pub is_service_category: bool,
    #[serde(deserialize_with = "lenient_text")]
    pub unit_id: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub mapped_user: Vec<UserDetails>,
    #[serde(deserialize_with = "lenient_code")]
    pub parent_group_id: Option<i64>,
}

impl FlattenedNode {
    /// Copy the scalar fields of `node`, linking it to `parent_group_id`.
    pub fn from_org_node(node: &OrgNode, parent_group_id: Option<i64>) -> Self {
        Self {
            id: node.id,
            group_name: node.group_name.clone(),
            description: node.description.clone(),
            is_role_group: node.is_role_group,
            role: node.role,
            is_service_category: node.is_service_category,
            unit_id: node.unit_id.clone(),
            mapped_user: node.mapped_user.clone(),
            parent_group_id,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_group_id.is_none()
    }

    pub fn has_role(&self, tier: RoleTier) -> bool {
        self.role == Some(tier)
    }

    /// True when this node's parent link points at `parent`'s id.
    ///
    /// A parent without an id never matches.
    pub fn is_child_of(&self, parent: &FlattenedNode) -> bool {
        parent.id.is_some() && self.parent_group_id == parent.id
    }
}
