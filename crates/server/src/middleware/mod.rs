mod metrics;
mod validate;

pub use self::metrics::track_metrics;
pub use self::validate::ValidatedJson;
