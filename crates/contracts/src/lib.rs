//! Типы, общие для frontend и backend: записи каталога и контракт листинга.

pub mod domain;
