//! Linq game engine - entities, lifecycle transitions, and events.
//!
//! This module provides the authoritative game state implementation:
//! - Player entity with name, score, role, and submitted words
//! - Lobby lifecycle: join, quit, master election
//! - Round lifecycle: start, role assignment, word submission, abort
//! - Typed event kinds and payloads published on every state change

pub mod config;
pub mod constants;
pub mod engine;
pub mod entities;
pub mod errors;
