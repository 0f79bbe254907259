//! Procedural value noise for the frag-depth pass
//!
//! CPU mirror of the noise in the fragment shader: a sine hash over the
//! integer lattice, smoothstep-weighted trilinear interpolation, and a
//! five-octave fractal sum.

mod value_noise;
mod depth;

pub use value_noise::{random, valuenoise, fbm, OCTAVES, LACUNARITY, FBM_MAX};
pub use depth::{depth_offset, displaced_depth, NOISE_OFFSET, NOISE_TIME_SCALE};
