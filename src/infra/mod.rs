//! Инфраструктурный слой вокруг движка: реализации RNG поверх `rand`.

pub mod rng;

pub use rng::*;
