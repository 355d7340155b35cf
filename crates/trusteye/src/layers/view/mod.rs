pub(crate) mod plain;
pub(crate) mod report;

pub(crate) use plain::render_plain;
pub(crate) use report::RiskReport;
