//! Channel-backed ticket source for match making

use tokio::sync::mpsc;

use super::logic::TicketProvider;
use super::ticket::{BackfillTicket, Ticket};

/// Hands out pool tickets and backfill tickets received over mpsc channels.
pub struct ChannelTicketProvider {
    tickets: Option<mpsc::Receiver<Ticket>>,
    backfill_tickets: Option<mpsc::Receiver<BackfillTicket>>,
}

impl ChannelTicketProvider {
    pub fn new(
        tickets: mpsc::Receiver<Ticket>,
        backfill_tickets: mpsc::Receiver<BackfillTicket>,
    ) -> Self {
        Self {
            tickets: Some(tickets),
            backfill_tickets: Some(backfill_tickets),
        }
    }

    /// Provider plus the senders that feed it.
    pub fn channel(buffer: usize) -> (Self, mpsc::Sender<Ticket>, mpsc::Sender<BackfillTicket>) {
        let (ticket_tx, ticket_rx) = mpsc::channel(buffer);
        let (backfill_tx, backfill_rx) = mpsc::channel(buffer);
        (Self::new(ticket_rx, backfill_rx), ticket_tx, backfill_tx)
    }
}

impl TicketProvider for ChannelTicketProvider {
    fn tickets(&mut self) -> Option<mpsc::Receiver<Ticket>> {
        self.tickets.take()
    }

    fn backfill_tickets(&mut self) -> Option<mpsc::Receiver<BackfillTicket>> {
        self.backfill_tickets.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::matchmaker::{GameRules, MatchLogic, MatchMaker, Scope};

    #[tokio::test]
    async fn test_tickets_flow_through_channels() {
        let (mut provider, ticket_tx, backfill_tx) = ChannelTicketProvider::channel(4);
        ticket_tx.send(Ticket::new("t1")).await.unwrap();
        ticket_tx.send(Ticket::new("t2")).await.unwrap();
        drop(ticket_tx);
        backfill_tx
            .send(BackfillTicket {
                ticket_id: "b1".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut tickets = provider.tickets().unwrap();
        assert_eq!(tickets.recv().await.unwrap().ticket_id, "t1");
        assert_eq!(tickets.recv().await.unwrap().ticket_id, "t2");
        assert!(tickets.recv().await.is_none());

        let mut backfill = provider.backfill_tickets().unwrap();
        assert_eq!(backfill.recv().await.unwrap().ticket_id, "b1");
    }

    #[test]
    fn test_streams_taken_once() {
        let (mut provider, _ticket_tx, _backfill_tx) = ChannelTicketProvider::channel(1);
        assert!(provider.tickets().is_some());
        assert!(provider.tickets().is_none());
        assert!(provider.backfill_tickets().is_some());
        assert!(provider.backfill_tickets().is_none());
    }

    #[test]
    fn test_match_maker_leaves_provider_untouched() {
        let (mut provider, _ticket_tx, _backfill_tx) = ChannelTicketProvider::channel(1);
        let scope = Scope::new("test");
        let rules = GameRules::default();

        assert!(matches!(
            MatchMaker.make_matches(&scope, &mut provider, &rules),
            Err(MatchError::NotImplemented(_))
        ));
        assert!(matches!(
            MatchMaker.backfill_matches(&scope, &mut provider, &rules),
            Err(MatchError::NotImplemented(_))
        ));
        assert!(provider.tickets().is_some());
        assert!(provider.backfill_tickets().is_some());
    }
}
