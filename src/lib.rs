//! Блэкджек против казино: движок раунда, доменная модель и API
//! для консольного клиента.
//!
//! Слои:
//! - `domain` – карты, колода, руки, фишки, игрок и казино;
//! - `engine` – машина состояний раунда и расчёт итога;
//! - `infra` – реализации RNG;
//! - `api` – команды, DTO и ошибки для внешнего клиента.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
