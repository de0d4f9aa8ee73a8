//! Serial console adapter.
//!
//! Implements [`CommandInput`] on top of a fixed-capacity receive buffer.
//! Bytes are pulled from the transport in bulk, queued, and handed out one
//! per [`read_byte`](CommandInput::read_byte) call.  When the queue is full
//! further bytes are dropped.
//!
//! - **`target_os = "espidf"`**: drains UART0 with a zero-tick timeout.
//! - **`not(target_os = "espidf")`**: a background thread reads stdin
//!   and forwards bytes over a channel.

use heapless::Deque;
use log::trace;

use crate::app::ports::CommandInput;

pub const RX_CAPACITY: usize = 64;

pub struct SerialConsole {
    rx: Deque<u8, RX_CAPACITY>,
    dropped: u32,
    #[cfg(not(target_os = "espidf"))]
    source: Option<std::sync::mpsc::Receiver<u8>>,
}

impl SerialConsole {
    /// Console on UART0.  The driver is installed by `hw_init`.
    #[cfg(target_os = "espidf")]
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            dropped: 0,
        }
    }

    /// Console on the process's stdin.
    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        use std::io::Read;

        let (tx, rx) = std::sync::mpsc::channel();
        let spawned = std::thread::Builder::new()
            .name("stdin-console".into())
            .spawn(move || {
                for byte in std::io::stdin().lock().bytes() {
                    let Ok(byte) = byte else { break };
                    if tx.send(byte).is_err() {
                        break;
                    }
                }
            });
        if let Err(e) = spawned {
            log::warn!("console: stdin reader not started ({})", e);
        }
        Self::with_source(rx)
    }

    /// Console fed from an arbitrary byte channel.
    #[cfg(not(target_os = "espidf"))]
    pub fn with_source(source: std::sync::mpsc::Receiver<u8>) -> Self {
        Self {
            rx: Deque::new(),
            dropped: 0,
            source: Some(source),
        }
    }

    /// Bytes discarded because the receive buffer was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    fn enqueue(&mut self, byte: u8) {
        if self.rx.push_back(byte).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
    }

    #[cfg(target_os = "espidf")]
    fn fill(&mut self) {
        let mut buf = [0u8; RX_CAPACITY];
        let room = RX_CAPACITY - self.rx.len();
        let n = crate::drivers::hw_init::uart_read(&mut buf[..room]);
        for &b in &buf[..n] {
            self.enqueue(b);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn fill(&mut self) {
        use std::sync::mpsc::TryRecvError;

        while !self.rx.is_full() {
            let Some(source) = self.source.as_ref() else {
                return;
            };
            match source.try_recv() {
                Ok(b) => self.enqueue(b),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    trace!("console: input closed");
                    self.source = None;
                    return;
                }
            }
        }
    }
}

impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInput for SerialConsole {
    fn read_byte(&mut self) -> Option<u8> {
        if self.rx.is_empty() {
            self.fill();
        }
        let byte = self.rx.pop_front();
        if let Some(b) = byte {
            trace!("console: rx 0x{:02x}", b);
        }
        byte
    }
}
