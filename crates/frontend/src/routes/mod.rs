pub mod routes;

pub use routes::{use_router, AppRoute, AppRouter, AppRoutes};
