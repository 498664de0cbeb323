/// Trailing-edge debounce keyed by generation rather than wall time.
///
/// Every event calls `poke` and arms a timer carrying the returned ticket.
/// When a timer fires it calls `settle`; only the newest ticket wins, and only
/// once, so a burst of events runs the handler a single time after the
/// timer delay of quiet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
    settled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poke(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.settled = false;
        Ticket(self.generation)
    }

    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.settled || ticket.0 != self.generation {
            return false;
        }
        self.settled = true;
        true
    }
}
