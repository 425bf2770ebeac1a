//! Crate-level tests exercising the loader, groups, and animation together

mod animation;
