//! Low-level GPU device and surface ownership.

mod gpu;

pub use gpu::{Gpu, GpuFrame};
