pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod events;
pub(crate) mod tasks;

pub(crate) use client::{AnalysisClient, HttpAnalysisClient};
pub(crate) use events::UiEvent;
pub(crate) use tasks::Dispatcher;
