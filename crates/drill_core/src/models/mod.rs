pub mod action;
pub mod drill;
pub mod entity;
pub mod field;
pub mod position;

pub use action::{Action, ActionKind, ShotTarget};
pub use drill::Drill;
pub use entity::{
    Ball, Cone, ConeGate, ConeLine, Facing, GateOrientation, Goal, Mannequin, MiniGoal, Player,
    PlayerRole,
};
pub use field::{AttackingDirection, FieldConfig, FieldType, GOAL_CENTER_X};
pub use position::{Position, FIELD_MAX, FIELD_MIN};
