use std::sync::atomic::Ordering;

pub const LOAD_ORDER: Ordering = Ordering::Acquire;
pub const FETCH_ORDER: Ordering = Ordering::AcqRel;
