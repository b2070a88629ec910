//! Professions - profession selection and skill gating core
//!
//! Host-agnostic core of a profession mechanic for multiplayer survival
//! games: players pick a bounded set of professions, and experience gain
//! or skill usage outside that set is blocked per a configurable policy.
//! The host game's skill storage is reached only through
//! [`host::SkillProvider`].

pub mod core;
pub mod host;
pub mod profession;
pub mod session;
pub mod ui;
