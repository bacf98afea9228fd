//! Vectorworx: front-end for the retrieval QA service
//!
//! Logs in against `/token`, then sends questions with a retriever selection
//! to `/ask` and shows the answer with its sources, either in a desktop
//! window or on the command line.

pub mod app;
pub mod backend;
pub mod commands;
pub mod config;
pub mod native;
pub mod session;
pub mod ui;
