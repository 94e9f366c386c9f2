//! Model-based property tests.
//!
//! Random operation sequences run against the real runtime and a small
//! reference model of the server's post list. After every settled operation
//! the display must match the model and the standard invariants must hold.

mod common;

use common::{logged_in, quiesce, started};
use proptest::prelude::*;
use tweetline_harness::{InvariantRegistry, SimServer, Snapshot};
use tweetline_proto::PostId;

const AUTHORS: [&str; 3] = ["ana", "bo", "cy"];

#[derive(Debug, Clone)]
enum Operation {
    Create { content: String },
    Delete { id: u64 },
    Like { id: u64 },
    Filter { author: Option<usize> },
    Remote { author: usize },
    Refresh,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => "[a-z]{1,8}".prop_map(|content| Operation::Create { content }),
        2 => (1u64..8).prop_map(|id| Operation::Delete { id }),
        2 => (1u64..8).prop_map(|id| Operation::Like { id }),
        2 => prop::option::of(0..AUTHORS.len()).prop_map(|author| Operation::Filter { author }),
        2 => (0..AUTHORS.len()).prop_map(|author| Operation::Remote { author }),
        1 => Just(Operation::Refresh),
    ]
}

/// Reference model: posts in creation order as (id, author, likes).
#[derive(Debug, Default)]
struct Model {
    posts: Vec<(u64, String, u64)>,
    next_id: u64,
    filter: Option<String>,
}

impl Model {
    fn create(&mut self, author: &str) {
        self.next_id += 1;
        self.posts.push((self.next_id, author.to_string(), 0));
    }

    fn visible(&self) -> Vec<(u64, String, u64)> {
        self.posts
            .iter()
            .rev()
            .filter(|(_, author, _)| self.filter.as_ref().is_none_or(|f| f == author))
            .cloned()
            .collect()
    }
}

fn run(operations: Vec<Operation>) -> Result<(), TestCaseError> {
    let executor = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
    executor.block_on(async move {
        let server = SimServer::new();
        let mut model = Model::default();
        let mut runtime = started(logged_in(&server, "ana")).await;
        let registry = InvariantRegistry::standard();

        for (step, op) in operations.into_iter().enumerate() {
            match &op {
                Operation::Create { content } => {
                    runtime.apply(|app| app.create_post(content.clone())).unwrap();
                    model.create("ana");
                },
                Operation::Delete { id } => {
                    runtime.apply(|app| app.delete_post(PostId(*id))).unwrap();
                    model.posts.retain(|(pid, ..)| pid != id);
                },
                Operation::Like { id } => {
                    runtime.apply(|app| app.like_post(PostId(*id))).unwrap();
                    if let Some(post) = model.posts.iter_mut().find(|(pid, ..)| pid == id) {
                        post.2 += 1;
                    }
                },
                Operation::Filter { author } => {
                    let name = author.map(|i| AUTHORS[i]).unwrap_or_default();
                    runtime.apply(|app| app.set_filter(name)).unwrap();
                    model.filter = author.map(|i| AUTHORS[i].to_string());
                },
                Operation::Remote { author } => {
                    server.seed_post(AUTHORS[*author], "remote");
                    server.notify_all();
                    model.create(AUTHORS[*author]);
                },
                Operation::Refresh => {
                    runtime.apply(tweetline_app::App::refresh).unwrap();
                },
            }
            quiesce(&mut runtime).await;

            let snapshot = Snapshot::capture(runtime.app(), Some(&server));
            registry.assert_all(&snapshot, &format!("after step {step} ({op:?})"));

            let shown: Vec<_> = runtime
                .app()
                .posts()
                .iter()
                .map(|p| (p.id.0, p.user.clone(), p.likes))
                .collect();
            prop_assert_eq!(shown, model.visible(), "step {} ({:?})", step, op);
        }
        Ok(())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn display_tracks_model(operations in prop::collection::vec(operation(), 1..12)) {
        run(operations)?;
    }
}
