//! Event-driven arbiter session over a single TCP connection.

use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use tracing::{debug, info, warn};

use ninefold_engine::{CellPicker, Player, RandomPicker, SearchConfig, SearchControl};

use crate::error::ClientError;
use crate::message::{Message, parse_message};

/// Connection and engine settings for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Arbiter host name or address.
    pub host: String,
    /// Arbiter port.
    pub port: u16,
    /// Log received messages, search details, and the board after each move at `info`.
    pub trace: bool,
    /// Hard limit on thinking time per move; `None` searches to full depth.
    pub move_time: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 0,
            trace: false,
            move_time: None,
        }
    }
}

impl SessionConfig {
    /// The `host:port` string to connect to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Events processed by the session loop.
enum SessionEvent {
    Received(Result<Message, ClientError>),
    ReadFailed(std::io::Error),
    InputClosed,
}

/// A connection to the arbiter driving one [`Player`].
///
/// A reader thread parses incoming lines and forwards them over a channel;
/// the calling thread owns the player, runs every search, and writes replies.
pub struct Session<P: CellPicker = RandomPicker> {
    config: SessionConfig,
    player: Player<P>,
    active: bool,
}

impl Session<RandomPicker> {
    /// Create a session whose player opens at random.
    pub fn new(config: SessionConfig) -> Self {
        let player = Player::new(SearchConfig { trace: config.trace });
        Self::with_player(config, player)
    }
}

impl<P: CellPicker> Session<P> {
    /// Create a session around an existing player.
    pub fn with_player(config: SessionConfig, player: Player<P>) -> Self {
        Self {
            config,
            player,
            active: true,
        }
    }

    /// The player driven by this session.
    pub fn player(&self) -> &Player<P> {
        &self.player
    }

    /// Connect and play until the arbiter sends `end` or closes the connection.
    pub fn run(mut self) -> Result<(), ClientError> {
        let addr = self.config.addr();
        let mut stream = TcpStream::connect(&addr).map_err(|source| ClientError::Connect {
            addr: addr.clone(),
            source,
        })?;
        info!(%addr, "connected to arbiter");

        let (tx, rx) = mpsc::channel::<SessionEvent>();

        let reader = BufReader::new(stream.try_clone()?);
        let trace = self.config.trace;
        std::thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        if trace {
                            info!(msg = %trimmed, "received");
                        } else {
                            debug!(msg = %trimmed, "received");
                        }
                        let msg = parse_message(trimmed);
                        if tx.send(SessionEvent::Received(msg)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(SessionEvent::ReadFailed(e));
                        return;
                    }
                }
            }
            let _ = tx.send(SessionEvent::InputClosed);
        });

        let result = self.event_loop(&rx, &mut stream);
        let _ = stream.shutdown(Shutdown::Both);
        result
    }

    fn event_loop<W: Write>(
        &mut self,
        rx: &mpsc::Receiver<SessionEvent>,
        out: &mut W,
    ) -> Result<(), ClientError> {
        for event in rx {
            match event {
                SessionEvent::Received(Ok(msg)) => match self.handle(msg, out) {
                    Ok(()) => {}
                    Err(e) if e.is_recoverable() => warn!(error = %e, "message dropped"),
                    Err(e) => return Err(e),
                },
                SessionEvent::Received(Err(e)) if e.is_recoverable() => {
                    warn!(error = %e, "message dropped");
                }
                SessionEvent::Received(Err(e)) => return Err(e),
                SessionEvent::ReadFailed(e) => return Err(e.into()),
                SessionEvent::InputClosed => {
                    info!("arbiter closed the connection");
                    break;
                }
            }
            if !self.active {
                break;
            }
        }
        info!("session finished");
        Ok(())
    }

    /// Apply one message to the player, replying on `out` when a move is due.
    fn handle<W: Write>(&mut self, msg: Message, out: &mut W) -> Result<(), ClientError> {
        match msg {
            Message::Start(mark) => self.player.initiate_game(mark)?,
            Message::SecondMove(mv) => {
                self.player.apply_opponent_move(mv)?;
                self.respond(out)?;
            }
            Message::ThirdMove { own, reply } => {
                self.player.apply_third_move(own, reply)?;
                self.respond(out)?;
            }
            Message::NextMove(cell) => {
                self.player.apply_opponent_reply(cell)?;
                self.respond(out)?;
            }
            Message::Outcome(outcome) => info!(?outcome, "game over"),
            Message::End => {
                self.player.end_game();
                self.active = false;
            }
            Message::Unknown(name) => debug!(%name, "ignoring message"),
        }
        Ok(())
    }

    /// Decide our move and send its cell digit.
    fn respond<W: Write>(&mut self, out: &mut W) -> Result<(), ClientError> {
        let control = SearchControl::with_limit(Arc::new(AtomicBool::new(false)), self.config.move_time);
        let mv = self.player.decide_next_move(&control)?;
        writeln!(out, "{}", mv.cell)?;
        out.flush()?;
        Ok(())
    }
}

impl<P: CellPicker> std::fmt::Debug for Session<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("player", &self.player)
            .field("active", &self.active)
            .finish()
    }
}
