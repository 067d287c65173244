//! DCTM Enquiry Assistant: a Dioxus chat client that posts questions to the
//! enquiry backend and renders its answers.
//!
//! The framework-free pieces ([`transcript`], [`api`], [`theme`], [`storage`])
//! hold all of the behavior; [`controller`], [`views`] and [`ui`] wire them to
//! Dioxus signals and components.

pub mod api;
pub mod config;
pub mod controller;
pub mod copy;
pub mod format;
pub mod storage;
pub mod theme;
pub mod transcript;
pub mod types;
pub mod ui;
pub mod views;
