use std::sync::atomic::{AtomicU64, Ordering};

/// Independent load streams; a newer load of one kind never supersedes a
/// load of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Catalog,
    Collections,
    Detail,
    Banner,
}

impl LoadKind {
    const COUNT: usize = 4;

    fn slot(self) -> usize {
        match self {
            LoadKind::Catalog => 0,
            LoadKind::Collections => 1,
            LoadKind::Detail => 2,
            LoadKind::Banner => 3,
        }
    }
}

/// Proof that a load was issued; checked again when the response lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: LoadKind,
    seq: u64,
}

impl Ticket {
    pub fn kind(&self) -> LoadKind {
        self.kind
    }
}

/// Last-issued-wins bookkeeping for overlapping backend loads.
///
/// Requests are not cancelled; a response whose ticket is no longer the
/// latest of its kind is simply not applied.
#[derive(Debug, Default)]
pub struct LoadTickets {
    latest: [AtomicU64; LoadKind::COUNT],
}

impl LoadTickets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, kind: LoadKind) -> Ticket {
        let seq = self.latest[kind.slot()].fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { kind, seq }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.kind.slot()].load(Ordering::Acquire) == ticket.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older_of_same_kind() {
        let tickets = LoadTickets::new();
        let first = tickets.issue(LoadKind::Catalog);
        assert!(tickets.is_current(first));

        let second = tickets.issue(LoadKind::Catalog);
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }

    #[test]
    fn kinds_are_independent() {
        let tickets = LoadTickets::new();
        let catalog = tickets.issue(LoadKind::Catalog);
        let detail = tickets.issue(LoadKind::Detail);
        assert!(tickets.is_current(catalog));
        assert!(tickets.is_current(detail));
        assert_eq!(detail.kind(), LoadKind::Detail);
    }
}
