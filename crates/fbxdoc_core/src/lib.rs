//! Public library API for decoding binary FBX files.

/// Binary FBX preamble, property, and record stream decoding.
pub mod fbx;
