//! Transport seam between the controller and the physical device.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Device not present or not openable. Pressing buttons with no stick
    /// connected is normal; callers degrade to a no-op instead of failing.
    #[error("device unavailable")]
    Unavailable,

    #[error("transport I/O error: {0}")]
    Io(String),
}

/// One feature-report exchange with the LED device. Implementations must
/// open the device, perform exactly one read or write, and release it on
/// every exit path.
pub trait LedTransport {
    /// Send one assembled LED feature report.
    fn send_report(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Read back the LED feature report, report id byte included.
    fn read_report(&mut self) -> Result<Vec<u8>, TransportError>;
}

pub mod mock {
    use super::{LedTransport, TransportError};
    use std::collections::VecDeque;

    /// Records writes and replays queued reads; single-threaded like the
    /// controller that drives it.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        write_history: Vec<Vec<u8>>,
        read_queue: VecDeque<Vec<u8>>,
        available: bool,
    }

    impl MockTransport {
        pub fn new() -> MockTransport {
            MockTransport {
                available: true,
                ..MockTransport::default()
            }
        }

        /// A transport that behaves like an unplugged stick.
        pub fn unavailable() -> MockTransport {
            MockTransport::default()
        }

        pub fn set_available(&mut self, available: bool) {
            self.available = available;
        }

        pub fn queue_read(&mut self, data: Vec<u8>) {
            self.read_queue.push_back(data);
        }

        pub fn write_history(&self) -> &[Vec<u8>] {
            &self.write_history
        }

        pub fn last_write(&self) -> Option<&[u8]> {
            self.write_history.last().map(Vec::as_slice)
        }
    }

    impl LedTransport for MockTransport {
        fn send_report(&mut self, data: &[u8]) -> Result<(), TransportError> {
            if !self.available {
                return Err(TransportError::Unavailable);
            }
            self.write_history.push(data.to_vec());
            Ok(())
        }

        fn read_report(&mut self) -> Result<Vec<u8>, TransportError> {
            if !self.available {
                return Err(TransportError::Unavailable);
            }
            self.read_queue
                .pop_front()
                .ok_or_else(|| TransportError::Io("no queued report".to_string()))
        }
    }
}
