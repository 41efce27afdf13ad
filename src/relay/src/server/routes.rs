use crate::server::handlers::health::{health, HEALTH_ENDPOINT};
use crate::server::handlers::index::{index, INDEX_ENDPOINT};
use crate::server::handlers::log::{log, LOG_ENDPOINT};
use crate::server::handlers::submit::{submit, SUBMIT_ENDPOINT};
use crate::server::handlers::test_log::{test_log, TEST_LOG_ENDPOINT};
use crate::server::state::RelayState;
use axum::routing::{get, post, MethodRouter};
use std::sync::LazyLock;

pub(super) static ROUTES: LazyLock<Vec<(&'static str, MethodRouter<RelayState>)>> =
    LazyLock::new(|| {
        vec![
            (INDEX_ENDPOINT, get(index)),
            (SUBMIT_ENDPOINT, post(submit)),
            (LOG_ENDPOINT, post(log)),
            (TEST_LOG_ENDPOINT, post(test_log)),
            (HEALTH_ENDPOINT, get(health)),
        ]
    });
