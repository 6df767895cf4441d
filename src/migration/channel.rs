//! A `Transport` implementation over in-process channels, connecting
//! islands that run as threads of one process.
//!
//! Channel sends are buffered and never block, so a posted send completes
//! immediately; a posted receive completes once a boat is waiting in this
//! island's inbox. Every boat carries its sender's rank as the tag
//! payload.

use super::Transport;
use crate::genetic::Gene;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

#[derive(Clone, Debug)]
struct Boat {
    from: usize,
    genes: Vec<Gene>,
}

/// One island's endpoint of a fully connected channel mesh.
#[derive(Debug)]
pub struct ChannelTransport {
    rank: usize,
    peers: Vec<Option<Sender<Boat>>>,
    inbox: Receiver<Boat>,
}

/// Builds a fully connected mesh of `islands` endpoints. The endpoint at
/// index `r` has rank `r` and a sender to every other endpoint.
pub fn mesh(islands: usize) -> Vec<ChannelTransport> {
    let (senders, inboxes): (Vec<_>, Vec<_>) = (0..islands).map(|_| channel()).unzip();
    inboxes
        .into_iter()
        .enumerate()
        .map(|(rank, inbox)| ChannelTransport {
            rank,
            peers: senders
                .iter()
                .enumerate()
                .map(|(peer, sender)| {
                    if peer == rank {
                        None
                    } else {
                        Some(sender.clone())
                    }
                })
                .collect(),
            inbox,
        })
        .collect()
}

impl Transport for ChannelTransport {
    type SendRequest = ();
    type RecvRequest = ();

    fn rank(&self) -> usize {
        self.rank
    }

    fn num_islands(&self) -> usize {
        self.peers.len()
    }

    fn post_send(&mut self, buffer: &[Gene], dest: usize) -> Self::SendRequest {
        if let Some(Some(sender)) = self.peers.get(dest) {
            // a vanished peer drops the boat; local evolution is unaffected
            let _ = sender.send(Boat {
                from: self.rank,
                genes: buffer.to_vec(),
            });
        }
    }

    fn post_recv(&mut self, _len: usize) -> Self::RecvRequest {}

    fn test_send(&mut self, _request: &mut Self::SendRequest) -> bool {
        true
    }

    fn test_recv(&mut self, _request: &mut Self::RecvRequest, buffer: &mut [Gene]) -> Option<usize> {
        match self.inbox.try_recv() {
            Ok(boat) => {
                let len = boat.genes.len().min(buffer.len());
                buffer[..len].copy_from_slice(&boat.genes[..len]);
                Some(boat.from)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
