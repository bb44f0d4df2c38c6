// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `created_at` / `updated_at` stamps for product writes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
