//! The `migration` module lets islands exchange migrants without ever
//! blocking the evolutionary pipeline.
//!
//! The engine keeps one inbound and one outbound boat buffer and at most
//! one outstanding request per direction. All transport operations are
//! non-blocking: a tick posts requests and returns immediately, and
//! progress is made by later ticks testing those requests. A slow peer at
//! most delays this island's next outbound boat by one tick; it cannot
//! stall evaluation, crossover or mutation. A peer that never completes a
//! request leaks that slot until teardown, while local evolution continues
//! unaffected.
//!
//! The single-slot policy is deliberate: it bounds memory, eliminates
//! queue management, and boats that would be posted while the slot is busy
//! are silently dropped that tick.

pub mod channel;
pub mod policy;

use crate::genetic::Gene;
use crate::random::{get_rng, random_seed, Prng, Rng};
use log::debug;
use std::mem;

/// The contract assumed from the message-passing layer.
///
/// Implementations provide non-blocking send, non-blocking receive and a
/// test-for-completion primitive; requests are opaque handles owned by the
/// caller between posting and completion.
pub trait Transport {
    /// Handle of a posted send.
    type SendRequest;
    /// Handle of a posted receive.
    type RecvRequest;

    /// The rank of this island among its peers.
    fn rank(&self) -> usize;

    /// The total number of islands, including this one.
    fn num_islands(&self) -> usize;

    /// Posts a non-blocking send of the buffer to the given destination.
    fn post_send(&mut self, buffer: &[Gene], dest: usize) -> Self::SendRequest;

    /// Posts a non-blocking receive of `len` genes from any source.
    fn post_recv(&mut self, len: usize) -> Self::RecvRequest;

    /// Tests a posted send for completion.
    fn test_send(&mut self, request: &mut Self::SendRequest) -> bool;

    /// Tests a posted receive for completion. On completion the received
    /// genes are stored into `buffer` and the sender's rank is returned.
    fn test_recv(&mut self, request: &mut Self::RecvRequest, buffer: &mut [Gene]) -> Option<usize>;
}

enum Slot<R> {
    Idle,
    Pending(R),
}

/// The per-island emigration and immigration state machines.
///
/// Both machines are driven by one tick per migration interval; neither
/// ever blocks. Destination draws come from a private generator, so
/// migration never consumes the pipeline's random source.
pub struct MigrationEngine<T>
where
    T: Transport,
{
    transport: T,
    inbound_buffer: Vec<Gene>,
    outbound_buffer: Vec<Gene>,
    inbound: Slot<T::RecvRequest>,
    outbound: Slot<T::SendRequest>,
    rng: Prng,
    boats_sent: u64,
    boats_received: u64,
}

impl<T> MigrationEngine<T>
where
    T: Transport,
{
    /// Creates a migration engine with boat buffers of `boat_len` genes
    /// (migrant count × genome length).
    pub fn new(transport: T, boat_len: usize) -> Self {
        MigrationEngine {
            transport,
            inbound_buffer: vec![0.0; boat_len],
            outbound_buffer: vec![0.0; boat_len],
            inbound: Slot::Idle,
            outbound: Slot::Idle,
            rng: get_rng(random_seed()),
            boats_sent: 0,
            boats_received: 0,
        }
    }

    /// Returns the rank of this island.
    pub fn rank(&self) -> usize {
        self.transport.rank()
    }

    /// Returns the total number of islands.
    pub fn num_islands(&self) -> usize {
        self.transport.num_islands()
    }

    /// Returns the number of boats posted so far.
    pub fn boats_sent(&self) -> u64 {
        self.boats_sent
    }

    /// Returns the number of boats received and integrated so far.
    pub fn boats_received(&self) -> u64 {
        self.boats_received
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the underlying transport for mutation.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Runs one tick of the immigration state machine.
    ///
    /// With no receive outstanding, the inbound buffer is zeroed and a
    /// receive from any source is posted. With a receive outstanding, the
    /// request is tested; on completion `on_arrival` is invoked exactly
    /// once with the buffer and the sender's rank, and the slot returns to
    /// idle for the next tick to repost.
    pub fn immigration_tick<F>(&mut self, mut on_arrival: F)
    where
        F: FnMut(&[Gene], usize),
    {
        match mem::replace(&mut self.inbound, Slot::Idle) {
            Slot::Idle => {
                self.inbound_buffer.fill(0.0);
                let request = self.transport.post_recv(self.inbound_buffer.len());
                self.inbound = Slot::Pending(request);
            }
            Slot::Pending(mut request) => {
                match self.transport.test_recv(&mut request, &mut self.inbound_buffer) {
                    Some(source) => {
                        debug!(
                            "island {}: boat of {} genes arrived from island {}",
                            self.transport.rank(),
                            self.inbound_buffer.len(),
                            source
                        );
                        self.boats_received += 1;
                        on_arrival(&self.inbound_buffer, source);
                    }
                    None => self.inbound = Slot::Pending(request),
                }
            }
        }
    }

    /// Runs one tick of the emigration state machine.
    ///
    /// While the previous boat is still in flight the tick is a no-op.
    /// Otherwise a destination is drawn uniformly among all peers excluding
    /// this island, `on_departure` fills the outbound buffer, and a send is
    /// posted.
    pub fn emigration_tick<F>(&mut self, on_departure: F)
    where
        F: FnOnce(&mut [Gene]),
    {
        if self.transport.num_islands() < 2 {
            return;
        }
        match mem::replace(&mut self.outbound, Slot::Idle) {
            Slot::Pending(mut request) => {
                if !self.transport.test_send(&mut request) {
                    debug!(
                        "island {}: previous boat still in flight, emigration skipped",
                        self.transport.rank()
                    );
                    self.outbound = Slot::Pending(request);
                    return;
                }
            }
            Slot::Idle => {}
        }
        let destination = self.random_destination();
        on_departure(&mut self.outbound_buffer);
        let request = self.transport.post_send(&self.outbound_buffer, destination);
        debug!(
            "island {}: boat of {} genes posted to island {}",
            self.transport.rank(),
            self.outbound_buffer.len(),
            destination
        );
        self.boats_sent += 1;
        self.outbound = Slot::Pending(request);
    }

    fn random_destination(&mut self) -> usize {
        let islands = self.transport.num_islands();
        let rank = self.transport.rank();
        let draw = self.rng.gen_range(0..islands - 1);
        if draw >= rank {
            draw + 1
        } else {
            draw
        }
    }
}
