//! Specdeck - Read-only PRD documentation service.
//!
//! This crate renders a structured product requirements document through a
//! total content pipeline: normalize records, resolve display attributes,
//! render cards, assemble sections, compose pages.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod seed;
