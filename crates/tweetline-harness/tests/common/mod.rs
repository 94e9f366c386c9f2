//! Shared setup for runtime-level tests.

#![allow(dead_code)]

use std::time::Duration;

use tweetline_app::{App, Runtime};
use tweetline_core::{MemoryStore, SessionStore, session::TOKEN_KEY};
use tweetline_harness::{SimDriver, SimPush, SimServer};

pub type SimRuntime = Runtime<SimDriver, SimServer, SimPush, MemoryStore>;

/// How long a step may stay pending before the runtime counts as idle.
const IDLE: Duration = Duration::from_millis(5);

/// Upper bound for any scripted scenario.
pub const DEADLINE: Duration = Duration::from_secs(5);

/// Runtime on the login screen with nothing stored.
pub fn logged_out(server: &SimServer) -> SimRuntime {
    runtime(server, SimDriver::new(), MemoryStore::new())
}

/// Runtime whose store already holds a token for `username`.
pub fn logged_in(server: &SimServer, username: &str) -> SimRuntime {
    let mut store = MemoryStore::new();
    store.store(TOKEN_KEY, server.issue_token(username).as_str()).unwrap();
    runtime(server, SimDriver::new(), store)
}

pub fn runtime(server: &SimServer, driver: SimDriver, store: MemoryStore) -> SimRuntime {
    Runtime::new(driver, server.clone(), server.push_channel(), store)
}

/// Run until no request is in flight and no push event is pending.
pub async fn quiesce(runtime: &mut SimRuntime) {
    tokio::time::timeout(DEADLINE, async {
        loop {
            assert!(!runtime.settle().await.unwrap(), "runtime quit while settling");
            match tokio::time::timeout(IDLE, runtime.step()).await {
                Ok(result) => assert!(!result.unwrap(), "runtime quit while idle"),
                Err(_) if runtime.in_flight() == 0 => break,
                Err(_) => {},
            }
        }
    })
    .await
    .expect("runtime did not go idle");
}

/// Step until `done` holds for the app.
pub async fn step_until(runtime: &mut SimRuntime, done: impl Fn(&App) -> bool) {
    tokio::time::timeout(DEADLINE, async {
        while !done(runtime.app()) {
            assert!(!runtime.step().await.unwrap(), "runtime quit early");
        }
    })
    .await
    .expect("condition never held");
}

/// Start the runtime and wait for the first load.
pub async fn started(mut runtime: SimRuntime) -> SimRuntime {
    runtime.start().unwrap();
    quiesce(&mut runtime).await;
    runtime
}

/// Yield until the server has seen `count` requests.
pub async fn requests_reach(server: &SimServer, count: usize) {
    tokio::time::timeout(DEADLINE, async {
        while server.requests().len() < count {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("request never arrived");
}
