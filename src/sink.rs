use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// Producer side of the hand-off queue. Clonable so each worker task can
/// carry its own copy; posting never blocks.
#[derive(Clone)]
pub struct SinkHandle {
    tx: Sender<String>,
}

impl SinkHandle {
    pub fn post(&self, message: String) {
        // the receiver only goes away when the whole app is shutting down
        let _ = self.tx.send(message);
    }
}

/// FIFO hand-off queue between worker tasks and the egui thread. The
/// receiver lives on the presentation thread and is polled once per frame.
pub struct ResultSink {
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl ResultSink {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> SinkHandle {
        SinkHandle { tx: self.tx.clone() }
    }

    /// Removes and returns the oldest queued message, if any. Never blocks.
    pub fn drain_once(&self) -> Option<String> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_on_empty_queue_returns_none() {
        let sink = ResultSink::new();
        assert_eq!(sink.drain_once(), None);
    }

    #[test]
    fn messages_are_drained_in_post_order() {
        let sink = ResultSink::new();
        let handle = sink.handle();
        for i in 0..5 {
            handle.post(format!("message {}", i));
        }
        for i in 0..5 {
            assert_eq!(sink.drain_once(), Some(format!("message {}", i)));
        }
        assert_eq!(sink.drain_once(), None);
    }

    #[test]
    fn each_drain_returns_at_most_one_message() {
        let sink = ResultSink::new();
        sink.handle().post("first".to_string());
        sink.handle().post("second".to_string());
        assert_eq!(sink.drain_once(), Some("first".to_string()));
        // "second" is still queued after one drain
        assert_eq!(sink.drain_once(), Some("second".to_string()));
    }

    #[test]
    fn posting_from_another_thread_is_delivered() {
        let sink = ResultSink::new();
        let handle = sink.handle();
        let worker = std::thread::spawn(move || {
            handle.post("from worker".to_string());
        });
        worker.join().unwrap();
        assert_eq!(sink.drain_once(), Some("from worker".to_string()));
    }
}
