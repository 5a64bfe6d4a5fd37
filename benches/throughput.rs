use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slircd_lite::config::Config;
use slircd_lite::handlers::{relay, Registry};
use slircd_lite::network::connection::process_line;
use slircd_lite::state::{Chatroom, Client, Matrix, Outbound, SessionState};
use std::sync::Arc;
use tokio::sync::mpsc;

// Fan-out cost of one room line, and the per-line cost of the dispatch
// pipeline. Receivers are drained between iterations so queues never fill.

fn room_with_members(n: usize) -> (Chatroom, Vec<mpsc::Receiver<Outbound>>, Arc<Client>) {
    let matrix = Matrix::new(&Config::default());
    let room = Chatroom::new("#bench");
    let mut receivers = Vec::with_capacity(n);
    let mut first = None;
    for i in 0..n {
        let (client, rx) = Client::new(matrix.client_ids.next(), format!("10.0.0.{i}:1"), 1024);
        client.set_nickname(format!("user{i}"));
        client.set_user(format!("user{i}"), "0".into(), "Bench".into());
        room.add_member(Arc::clone(&client));
        receivers.push(rx);
        first.get_or_insert(client);
    }
    let sender = first.unwrap_or_else(|| Client::new(matrix.client_ids.next(), "x:0", 1).0);
    (room, receivers, sender)
}

fn broadcast_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    for members in [10usize, 100, 1000] {
        let (room, mut receivers, sender) = room_with_members(members);
        group.throughput(Throughput::Elements(members as u64));
        group.bench_with_input(BenchmarkId::from_parameter(members), &members, |b, _| {
            b.iter(|| {
                let line = relay(&sender, "PRIVMSG", "#bench :Hello world");
                room.broadcast_except(sender.id, &line);
                for rx in receivers.iter_mut() {
                    while rx.try_recv().is_ok() {}
                }
            })
        });
    }

    group.finish();
}

fn dispatch_benchmark(c: &mut Criterion) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => panic!("failed to build runtime: {e}"),
    };
    let matrix = Arc::new(Matrix::new(&Config::default()));
    let registry = Registry::new();

    let (alice, mut alice_rx) = Client::new(matrix.client_ids.next(), "10.0.0.1:1", 1024);
    let (bob, mut bob_rx) = Client::new(matrix.client_ids.next(), "10.0.0.2:1", 1024);
    let mut alice_state = SessionState::new();
    let mut bob_state = SessionState::new();

    runtime.block_on(async {
        for line in ["NICK alice", "USER alice 0 * :Alice", "JOIN #bench"] {
            process_line(line, &alice, &matrix, &registry, &mut alice_state).await;
        }
        for line in ["NICK bob", "USER bob 0 * :Bob", "JOIN #bench"] {
            process_line(line, &bob, &matrix, &registry, &mut bob_state).await;
        }
    });

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    group.bench_function("privmsg_room", |b| {
        b.iter(|| {
            runtime.block_on(process_line(
                "PRIVMSG #bench :Hello world",
                &alice,
                &matrix,
                &registry,
                &mut alice_state,
            ));
            while bob_rx.try_recv().is_ok() {}
        })
    });
    while alice_rx.try_recv().is_ok() {}

    group.finish();
}

criterion_group!(benches, broadcast_benchmark, dispatch_benchmark);
criterion_main!(benches);
