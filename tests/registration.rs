//! Integration tests for NICK/USER registration.

mod common;

use common::TestServer;
use std::time::Duration;

fn line(msg: &slirc_lite_proto::Message) -> String {
    msg.to_string().trim_end().to_string()
}

#[tokio::test]
async fn test_welcome_burst() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut alice = server.connect("alice").await.expect("Failed to connect alice");
    let addr = alice.local_addr().unwrap();

    alice.send_raw("NICK alice\r\n").await.unwrap();
    alice.send_raw("USER alice 0 * :Alice A\r\n").await.unwrap();

    let burst = alice.recv_numeric(4).await.expect("No welcome burst");
    let burst: Vec<String> = burst.iter().map(line).collect();
    assert_eq!(burst.len(), 4);
    assert_eq!(
        burst[0],
        format!(":irc.local 001 alice :Welcome to the Internet Relay Network alice!alice@{addr}")
    );
    assert_eq!(
        burst[1],
        ":irc.local 002 alice :Your host is irc.local, running version 1.0"
    );
    assert!(burst[2].starts_with(":irc.local 003 alice :This server was created "));
    assert_eq!(burst[3], ":irc.local 004 alice irc.local 1.0");
}

#[tokio::test]
async fn test_duplicate_nick_exactly_one_winner() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut first = server.connect("bob").await.unwrap();
    let mut second = server.connect("bob").await.unwrap();

    let (a, b) = tokio::join!(first.send_raw("NICK bob"), second.send_raw("NICK bob"));
    a.unwrap();
    b.unwrap();

    let short = Duration::from_millis(500);
    let first_reply = first.recv_timeout(short).await.ok();
    let second_reply = second.recv_timeout(short).await.ok();

    let is_collision = |reply: &Option<slirc_lite_proto::Message>| {
        reply
            .as_ref()
            .is_some_and(|msg| msg.response().is_some_and(|r| r.code() == 433))
    };
    let collisions =
        usize::from(is_collision(&first_reply)) + usize::from(is_collision(&second_reply));
    assert_eq!(collisions, 1, "got {first_reply:?} and {second_reply:?}");
    assert!(first_reply.is_none() || second_reply.is_none());
}

#[tokio::test]
async fn test_nick_errors() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = server.connect("x").await.unwrap();

    client.send_raw("NICK").await.unwrap();
    assert_eq!(
        line(&client.recv().await.unwrap()),
        ":irc.local 431 * :No nickname given"
    );

    client.send_raw("NICK 1abc").await.unwrap();
    assert_eq!(
        line(&client.recv().await.unwrap()),
        ":irc.local 432 * :Erroneous nickname"
    );

    client.send_raw("NICK waytoolongnick").await.unwrap();
    assert_eq!(
        line(&client.recv().await.unwrap()),
        ":irc.local 432 * :Erroneous nickname"
    );
}

#[tokio::test]
async fn test_same_nick_twice_is_silent() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.connect("alice").await.unwrap();
    alice.register().await.unwrap();

    alice.send_raw("NICK alice").await.unwrap();
    alice.expect_silence(Duration::from_millis(300)).await.unwrap();
}

#[tokio::test]
async fn test_user_reregistration_rejected() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.connect("alice").await.unwrap();
    alice.register().await.unwrap();

    alice.send_raw("USER other 0 * :Other").await.unwrap();
    assert_eq!(
        line(&alice.recv().await.unwrap()),
        ":irc.local 462 alice :Unauthorized command (already registered)"
    );
}

#[tokio::test]
async fn test_username_is_unique() {
    let server = TestServer::spawn().await.unwrap();
    let mut first = server.connect("one").await.unwrap();
    let mut second = server.connect("two").await.unwrap();

    first.send_raw("USER shared 0 * :One").await.unwrap();
    first.expect_silence(Duration::from_millis(200)).await.unwrap();

    second.send_raw("USER shared 0 * :Two").await.unwrap();
    assert_eq!(
        line(&second.recv().await.unwrap()),
        ":irc.local 462 * :Unauthorized command (already registered)"
    );
}

#[tokio::test]
async fn test_malformed_user_params() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = server.connect("x").await.unwrap();

    client.send_raw("USER onlyone").await.unwrap();
    assert_eq!(
        line(&client.recv().await.unwrap()),
        ":irc.local 461 * USER :Not enough parameters"
    );
}

#[tokio::test]
async fn test_commands_require_registration() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = server.connect("x").await.unwrap();

    for cmd in ["JOIN #a", "PART #a", "PRIVMSG bob :hi", "WHO *"] {
        client.send_raw(cmd).await.unwrap();
        assert_eq!(
            line(&client.recv().await.unwrap()),
            ":irc.local 451 * :You have not registered",
            "for {cmd}"
        );
    }
}

#[tokio::test]
async fn test_unknown_command() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.connect("alice").await.unwrap();
    alice.register().await.unwrap();

    alice.send_raw("TOPIC #x :hello").await.unwrap();
    assert_eq!(
        line(&alice.recv().await.unwrap()),
        ":irc.local 421 alice TOPIC :Unknown command"
    );
}
