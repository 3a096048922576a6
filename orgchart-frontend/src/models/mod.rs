pub mod org_node;
pub mod role;

pub use org_node::{FlattenedNode, OrgNode, UserDetails};
pub use role::RoleTier;
