//! End-to-end tests against the assembled router.

mod health_test;
mod helpers;
mod news_test;
mod route_test;
mod user_test;
mod ws_test;
