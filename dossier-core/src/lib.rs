//! Dossier Core
//!
//! Core types for the dossier document search demo.
//!
//! This crate contains:
//! - Domain types: remote entities observed by this client (files, vector
//!   stores, ingest jobs, model responses)
//! - DTOs: request payloads sent to the document service API

pub mod domain;
pub mod dto;
