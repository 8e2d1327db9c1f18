//! clubdocs Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Folder`, `Document`, `NavigationPath`, `Clipboard`, `SearchHit`
//! - **Port definitions** - Traits for adapters: `IDocumentGateway`, `ILocationStore`
//! - **Configuration** - Typed YAML configuration with defaults
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement.
//! The browser crate orchestrates domain entities through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
