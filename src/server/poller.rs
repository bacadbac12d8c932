use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::os::fd::{FromRawFd, IntoRawFd};

use mio::net::{TcpListener, TcpStream};
use mio::{Events, Interest, Poll, Token};
use tokio::runtime::Handle;
use tracing::{debug, error, info};

use crate::config::{Config, ContentConfig};
use crate::http::connection::Connection;

const LISTENER: Token = Token(0);
const EVENT_CAPACITY: usize = 128;

/// Tracks which connections the poll loop currently has an interest in.
///
/// Owned and mutated only by the event loop. An entry is taken out at
/// dispatch time, before the handler owns the stream, so a handler closing
/// its socket can never leave a stale registration behind.
struct ConnectionRegistry {
    connections: HashMap<Token, TcpStream>,
    next_token: usize,
}

impl ConnectionRegistry {
    fn new() -> Self {
        Self {
            connections: HashMap::new(),
            // Token 0 is the listener.
            next_token: 1,
        }
    }

    fn insert(&mut self, stream: TcpStream) -> (Token, &mut TcpStream) {
        let token = Token(self.next_token);
        self.next_token += 1;
        let slot = self.connections.entry(token).or_insert(stream);
        (token, slot)
    }

    fn take(&mut self, token: Token) -> Option<TcpStream> {
        self.connections.remove(&token)
    }
}

/// Edge-triggered single-threaded acceptor.
///
/// The listener and every accepted socket are registered for read
/// readiness; on epoll, mio delivers edge-triggered notifications, so the
/// accept loop must fully drain the backlog on each listener event. Ready
/// connections are handed off to handler tasks on the runtime; the loop
/// itself never reads request bytes.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.server.listen_addr.parse()?;
    let listener = TcpListener::bind(addr)?;
    info!("Polling on {}", addr);

    let content = cfg.content.clone();
    let handle = Handle::current();
    tokio::task::spawn_blocking(move || event_loop(listener, content, handle)).await?
}

fn event_loop(
    mut listener: TcpListener,
    content: ContentConfig,
    handle: Handle,
) -> anyhow::Result<()> {
    let mut poll = Poll::new()?;
    let mut events = Events::with_capacity(EVENT_CAPACITY);
    let mut registry = ConnectionRegistry::new();

    poll.registry()
        .register(&mut listener, LISTENER, Interest::READABLE)?;

    loop {
        poll.poll(&mut events, None)?;

        for event in events.iter() {
            match event.token() {
                LISTENER => loop {
                    match listener.accept() {
                        Ok((stream, peer)) => {
                            debug!("Accepted connection from {}", peer);
                            let (token, slot) = registry.insert(stream);
                            poll.registry().register(slot, token, Interest::READABLE)?;
                        }
                        Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                        Err(e) => return Err(e.into()),
                    }
                },
                token => {
                    let Some(mut stream) = registry.take(token) else {
                        continue;
                    };
                    poll.registry().deregister(&mut stream)?;

                    if event.is_error() {
                        debug!("Dropping connection after socket error event");
                        continue;
                    }

                    dispatch(stream, content.clone(), &handle);
                }
            }
        }
    }
}

/// Hands a ready connection to a handler task. The mio stream is already
/// non-blocking, which is exactly what the tokio adoption requires.
fn dispatch(stream: TcpStream, content: ContentConfig, handle: &Handle) {
    let peer = stream.peer_addr().ok();
    let std_stream = unsafe { std::net::TcpStream::from_raw_fd(stream.into_raw_fd()) };

    handle.spawn(async move {
        let socket = match tokio::net::TcpStream::from_std(std_stream) {
            Ok(socket) => socket,
            Err(e) => {
                error!("Failed to adopt dispatched socket: {}", e);
                return;
            }
        };

        let conn = Connection::new(socket, content);
        if let Err(e) = conn.run().await {
            match peer {
                Some(peer) => error!("Connection error from {}: {}", peer, e),
                None => error!("Connection error: {}", e),
            }
        }
    });
}
