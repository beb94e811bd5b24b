//! OrderComposer - the roster being built at one table
//!
//! # Selection model
//!
//! ```text
//! add_person()          -> appended, becomes selected
//! select_person(id)     -> pointer moves, no validation
//! adjust_quantity(..)   -> selected person only, no-op when the pointer dangles
//! append_detail(..)     -> selected person only, dropped when the pointer dangles
//! submit_order(..)      -> one append to pedidos/{table}, roster kept
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::error::ErrorCode;
use shared::feed::server_timestamp;
use shared::models::Person;
use shared::util::now_millis;

use super::sink::OrderSink;
use crate::utils::{AppError, AppResult};

/// Quantity change requested from the order screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Default)]
pub struct OrderComposer {
    roster: Vec<Person>,
    selected: Option<String>,
    /// Last issued person id (millis), keeps ids unique within the session
    last_id: i64,
}

impl OrderComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.roster
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected person, if the pointer resolves
    pub fn selected_person(&self) -> Option<&Person> {
        let id = self.selected.as_deref()?;
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Seat a new person and select them
    pub fn add_person(&mut self) -> &Person {
        let id = self.next_person_id();
        self.roster.push(Person::new(id.clone()));
        self.selected = Some(id);
        tracing::debug!(persons = self.roster.len(), "Person added");
        &self.roster[self.roster.len() - 1]
    }

    /// Remove a person; returns whether anyone was removed
    pub fn remove_person(&mut self, id: &str) -> bool {
        let before = self.roster.len();
        self.roster.retain(|p| p.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        before != self.roster.len()
    }

    /// Point the selection at `id` without checking the roster
    pub fn select_person(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// Change the selected person's quantity for a dish
    ///
    /// Returns the new quantity (0 once the entry is gone), or `None` when
    /// no valid person is selected.
    pub fn adjust_quantity(&mut self, menu_item_id: &str, direction: Direction) -> Option<u32> {
        let person = self.selected_person_mut()?;
        let quantity = match direction {
            Direction::Increment => {
                let entry = person.selections.entry(menu_item_id.to_string()).or_insert(0);
                *entry = entry.saturating_add(1);
                *entry
            }
            Direction::Decrement => {
                let current = person.quantity_of(menu_item_id);
                if current > 1 {
                    person.selections.insert(menu_item_id.to_string(), current - 1);
                } else {
                    person.selections.remove(menu_item_id);
                }
                current.saturating_sub(1)
            }
        };
        Some(quantity)
    }

    /// Add a note for the selected person, verbatim; returns whether it was kept
    pub fn append_detail(&mut self, text: impl Into<String>) -> bool {
        match self.selected_person_mut() {
            Some(person) => {
                person.details.push(text.into());
                true
            }
            None => false,
        }
    }

    /// Write the roster as one order under `pedidos/{table}`
    ///
    /// The roster stays as it is afterwards.
    pub fn submit_order(&self, table: u32, sink: &dyn OrderSink) -> AppResult<String> {
        if self.roster.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        let record = json!({
            "personas": self.roster,
            "timestamp": server_timestamp(),
        });
        sink.append_order(table, record)
    }

    fn selected_person_mut(&mut self) -> Option<&mut Person> {
        let id = self.selected.as_deref()?;
        self.roster.iter_mut().find(|p| p.id == id)
    }

    fn next_person_id(&mut self) -> String {
        let id = now_millis().max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }
}
