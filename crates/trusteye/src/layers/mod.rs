pub(crate) mod service;
pub(crate) mod ui;
pub(crate) mod view;
