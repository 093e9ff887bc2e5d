//! Schema merge: collapse every occurrence of a named entity into one.
//!
//! The authored graph may declare the same entity several times (once per
//! place it is reached from) and may contain cycles. Merge binds each name to
//! exactly one canonical entity and rewires all holders to it. The result is a
//! [`MergedSchema`], which exposes no mutation.

mod merger;
mod schema;


pub use merger::merge;
pub use schema::MergedSchema;
