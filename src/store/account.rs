use chrono::Utc;
use tracing::info;

use crate::catalog::AccountSeed;
use crate::models::{Order, SupportTicket, TicketStatus, User};
use crate::store::error::StoreError;
use crate::store::reference_id;

/// The demo customer account: sign-in state, profile, orders and tickets.
///
/// Orders and tickets are kept newest first.
#[derive(Debug, Clone)]
pub struct Account {
    demo_user: User,
    current_user: Option<User>,
    orders: Vec<Order>,
    tickets: Vec<SupportTicket>,
}

impl Account {
    pub fn from_seed(seed: AccountSeed) -> Self {
        Account {
            demo_user: seed.user,
            current_user: None,
            orders: seed.orders,
            tickets: seed.tickets,
        }
    }

    /// Signs in as the demo user, discarding any edits from an earlier session.
    pub fn sign_in(&mut self) -> &User {
        info!("Signed in as {}", self.demo_user.email);
        self.current_user.insert(self.demo_user.clone())
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("Signed out {}", user.email);
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Replaces the signed-in user's details for this session; the id is kept.
    pub fn update_user(&mut self, details: User) -> Result<&User, StoreError> {
        let current = self.current_user.as_mut().ok_or(StoreError::NotSignedIn)?;
        *current = User {
            id: current.id,
            ..details
        };
        Ok(current)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn tickets(&self) -> &[SupportTicket] {
        &self.tickets
    }

    pub fn record_order(&mut self, order: Order) {
        info!("Recorded order {} ({:.2})", order.id, order.total);
        self.orders.insert(0, order);
    }

    /// Opens a support ticket dated today and puts it at the top of the list.
    pub fn create_ticket(&mut self, subject: &str, message: &str) -> Result<&SupportTicket, StoreError> {
        if subject.trim().is_empty() {
            return Err(StoreError::InvalidTicket { field: "subject" });
        }
        if message.trim().is_empty() {
            return Err(StoreError::InvalidTicket { field: "message" });
        }

        let ticket = SupportTicket {
            id: reference_id("TKT"),
            order_id: None,
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
            date: Utc::now().date_naive(),
            status: TicketStatus::Open,
        };
        info!("Opened support ticket {}", ticket.id);
        self.tickets.insert(0, ticket);
        Ok(&self.tickets[0])
    }
}
