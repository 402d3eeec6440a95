// Adapters layer: concrete implementations of the domain ports (store, http, view).

pub mod http;
pub mod storage;
pub mod view;
