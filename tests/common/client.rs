//! Test IRC client.
//!
//! Provides an IRC client for integration testing that can send commands
//! and assert on received responses.

use slirc_lite_proto::Message;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// A test IRC client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
    nick: String,
}

#[allow(dead_code)]
impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str, nick: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;

        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
            nick: nick.to_string(),
        })
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// The `ip:port` the server sees for this client.
    pub fn local_addr(&self) -> anyhow::Result<String> {
        Ok(self.reader.get_ref().local_addr()?.to_string())
    }

    /// Send a raw IRC line, adding `\r\n` if missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single message from the server.
    pub async fn recv(&mut self) -> anyhow::Result<Message> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a message with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<Message> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("connection closed");
        }

        line.parse::<Message>()
            .map_err(|e| anyhow::anyhow!("Parse error: {e} in {line:?}"))
    }

    /// Receive multiple messages until the given predicate returns true.
    pub async fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<Message>>
    where
        F: FnMut(&Message) -> bool,
    {
        let mut messages = Vec::new();
        loop {
            let msg = self.recv().await?;
            let done = predicate(&msg);
            messages.push(msg);
            if done {
                break;
            }
        }
        Ok(messages)
    }

    /// Receive until a message with the given numeric arrives.
    pub async fn recv_numeric(&mut self, code: u16) -> anyhow::Result<Vec<Message>> {
        self.recv_until(|msg| msg.response().is_some_and(|r| r.code() == code))
            .await
    }

    /// Read and discard whatever arrives within a short window.
    pub async fn drain(&mut self) {
        while self.recv_timeout(Duration::from_millis(100)).await.is_ok() {}
    }

    /// Assert nothing arrives within `dur`.
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        match self.recv_timeout(dur).await {
            Ok(msg) => anyhow::bail!("unexpected message: {msg}"),
            Err(_) => Ok(()),
        }
    }

    /// Register with the server (NICK + USER) and consume the welcome burst.
    pub async fn register(&mut self) -> anyhow::Result<()> {
        self.send_raw(&format!("NICK {}", self.nick)).await?;
        self.send_raw(&format!("USER {} 0 * :Test User {}", self.nick, self.nick))
            .await?;

        let messages = self.recv_numeric(4).await?;
        if messages
            .iter()
            .any(|msg| msg.response().is_some_and(|r| r.code() == 1))
        {
            Ok(())
        } else {
            anyhow::bail!("Registration failed: no RPL_WELCOME received")
        }
    }

    /// Join a room and consume the reply block up to 366.
    pub async fn join(&mut self, room: &str) -> anyhow::Result<Vec<Message>> {
        self.send_raw(&format!("JOIN {room}")).await?;
        self.recv_numeric(366).await
    }

    /// Send a PRIVMSG.
    pub async fn privmsg(&mut self, target: &str, text: &str) -> anyhow::Result<()> {
        self.send_raw(&format!("PRIVMSG {target} :{text}")).await
    }

    /// Send QUIT.
    pub async fn quit(&mut self, reason: Option<&str>) -> anyhow::Result<()> {
        match reason {
            Some(reason) => self.send_raw(&format!("QUIT :{reason}")).await,
            None => self.send_raw("QUIT").await,
        }
    }
}
