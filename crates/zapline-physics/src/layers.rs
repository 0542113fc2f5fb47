//! Surface category layers
//!
//! Collision group assignments for level geometry and entities. The ground
//! sensor filters its overlap query by these, so a probe standing on a
//! hazard does not count as grounded.

use rapier2d::geometry::Group;

/// Solid level geometry
pub const GROUND: Group = Group::GROUP_1;
/// One-way platforms (walkable from above)
pub const PLATFORM: Group = Group::GROUP_2;
/// Damaging surfaces, never walkable
pub const HAZARD: Group = Group::GROUP_3;
/// Player hit shapes
pub const PLAYER: Group = Group::GROUP_4;

/// Everything a ground probe counts as standing on
pub const WALKABLE: Group = GROUND.union(PLATFORM);
