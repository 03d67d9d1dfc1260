//! Alien Invaders — core game logic.
//!
//! The modules here are pure simulation: they know nothing about the
//! terminal. All randomness comes through injected `Rng` handles so the
//! whole game can be driven deterministically from tests.

pub mod app;
pub mod bolts;
pub mod config;
pub mod entities;
pub mod formation;
pub mod input;
pub mod wave;
