//! Serialization backends for a [`VectorDocument`](crate::VectorDocument).

pub mod svg;
