//! Tables (Mesas) and their composing sessions

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::error::{ErrorCategory, ErrorCode};
use shared::models::{Person, SubmittedOrder};

use super::order_composer::OrderComposer;
use super::sink::OrderSink;
use crate::utils::{AppError, AppResult};

/// Prefix of the message left in a session's error slot after a failed submit
pub const SUBMIT_ERROR_PREFIX: &str = "Error al enviar el pedido";

/// One table and the order being composed at it
#[derive(Debug, Clone)]
pub struct TableSession {
    number: u32,
    pub composer: OrderComposer,
    /// Last submit failure, cleared by the next successful operation
    error: Option<String>,
}

impl TableSession {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            composer: OrderComposer::new(),
            error: None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Occupied while anyone is seated
    pub fn is_occupied(&self) -> bool {
        !self.composer.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the roster; feed failures land in the error slot
    pub fn submit(&mut self, sink: &dyn OrderSink) -> AppResult<SubmittedOrder> {
        match self.composer.submit_order(self.number, sink) {
            Ok(id) => {
                self.error = None;
                Ok(SubmittedOrder {
                    id,
                    table: self.number,
                })
            }
            Err(e) => {
                if e.code.category() == ErrorCategory::System {
                    tracing::error!(table = self.number, error = %e, "Order submission failed");
                    self.error = Some(format!("{SUBMIT_ERROR_PREFIX}: {}", e.message));
                }
                Err(e)
            }
        }
    }

    pub fn state(&self) -> TableState {
        TableState {
            number: self.number,
            occupied: self.is_occupied(),
            selected: self.composer.selected_id().map(String::from),
            persons: self.composer.persons().to_vec(),
            error: self.error.clone(),
        }
    }
}

/// Serializable view of a table session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub number: u32,
    pub occupied: bool,
    pub selected: Option<String>,
    pub persons: Vec<Person>,
    pub error: Option<String>,
}

/// All tables of the restaurant
///
/// One session is mutated at a time, under the registry lock.
pub struct TableRegistry {
    tables: Mutex<BTreeMap<u32, TableSession>>,
    sink: Arc<dyn OrderSink>,
}

impl std::fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRegistry")
            .field("tables", &self.tables.lock().len())
            .finish()
    }
}

impl TableRegistry {
    /// Tables `1..=initial` with empty sessions
    pub fn new(initial: u32, sink: Arc<dyn OrderSink>) -> Self {
        let tables = (1..=initial).map(|n| (n, TableSession::new(n))).collect();
        Self {
            tables: Mutex::new(tables),
            sink,
        }
    }

    pub fn list(&self) -> Vec<TableState> {
        self.tables.lock().values().map(TableSession::state).collect()
    }

    pub fn get(&self, number: u32) -> AppResult<TableState> {
        self.with_session(number, |session| session.state())
    }

    /// Add a table numbered one past the highest existing
    pub fn add_table(&self) -> TableState {
        let mut tables = self.tables.lock();
        let number = tables.keys().next_back().map_or(1, |n| n + 1);
        let session = TableSession::new(number);
        let state = session.state();
        tables.insert(number, session);
        tracing::info!(table = number, "Table added");
        state
    }

    pub fn remove_table(&self, number: u32) -> AppResult<()> {
        match self.tables.lock().remove(&number) {
            Some(session) => {
                if session.is_occupied() {
                    tracing::warn!(table = number, "Removed an occupied table");
                } else {
                    tracing::info!(table = number, "Table removed");
                }
                Ok(())
            }
            None => Err(table_not_found(number)),
        }
    }

    /// Run `f` against one session under the registry lock
    pub fn with_session<R>(
        &self,
        number: u32,
        f: impl FnOnce(&mut TableSession) -> R,
    ) -> AppResult<R> {
        let mut tables = self.tables.lock();
        let session = tables.get_mut(&number).ok_or_else(|| table_not_found(number))?;
        Ok(f(session))
    }

    /// Apply one composer mutation; success clears the error slot
    pub fn compose(
        &self,
        number: u32,
        f: impl FnOnce(&mut OrderComposer),
    ) -> AppResult<TableState> {
        self.with_session(number, |session| {
            f(&mut session.composer);
            session.error = None;
            session.state()
        })
    }

    /// Submit the table's roster to the order feed
    pub fn submit(&self, number: u32) -> AppResult<SubmittedOrder> {
        let sink = Arc::clone(&self.sink);
        self.with_session(number, |session| session.submit(sink.as_ref()))?
    }
}

fn table_not_found(number: u32) -> AppError {
    AppError::with_message(ErrorCode::TableNotFound, format!("Table {number} not found"))
        .with_detail("table", number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::Direction;
    use crate::composer::sink::tests::{FailingSink, RecordingSink};

    fn registry(initial: u32) -> (TableRegistry, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (TableRegistry::new(initial, sink.clone()), sink)
    }

    #[test]
    fn test_initial_tables() {
        let (tables, _) = registry(3);
        let numbers: Vec<u32> = tables.list().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(tables.list().iter().all(|t| !t.occupied));
    }

    #[test]
    fn test_add_table_uses_next_number() {
        let (tables, _) = registry(0);
        assert_eq!(tables.add_table().number, 1);
        assert_eq!(tables.add_table().number, 2);

        tables.remove_table(1).unwrap();
        assert_eq!(tables.add_table().number, 3);
    }

    #[test]
    fn test_remove_missing_table() {
        let (tables, _) = registry(2);
        let err = tables.remove_table(7).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert_eq!(tables.get(7).unwrap_err().code, ErrorCode::TableNotFound);
    }

    #[test]
    fn test_table_is_occupied_while_roster_non_empty() {
        let (tables, _) = registry(1);
        let id = tables
            .with_session(1, |s| s.composer.add_person().id.clone())
            .unwrap();
        assert!(tables.get(1).unwrap().occupied);

        tables
            .with_session(1, |s| s.composer.remove_person(&id))
            .unwrap();
        assert!(!tables.get(1).unwrap().occupied);
    }

    #[test]
    fn test_sessions_are_independent() {
        let (tables, _) = registry(2);
        tables
            .with_session(1, |s| {
                s.composer.add_person();
                s.composer.adjust_quantity("d1", Direction::Increment);
            })
            .unwrap();
        assert!(tables.get(2).unwrap().persons.is_empty());
    }

    #[test]
    fn test_submit_empty_table() {
        let (tables, sink) = registry(1);
        let err = tables.submit(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert!(sink.writes().is_empty());
        // validation errors do not fill the error slot
        assert!(tables.get(1).unwrap().error.is_none());
    }

    #[test]
    fn test_submit_keeps_roster() {
        let (tables, sink) = registry(2);
        tables
            .with_session(2, |s| {
                s.composer.add_person();
            })
            .unwrap();

        let submitted = tables.submit(2).unwrap();
        assert_eq!(submitted.table, 2);
        assert_eq!(sink.writes().len(), 1);
        assert_eq!(tables.get(2).unwrap().persons.len(), 1);
    }

    /// Fails until told otherwise
    struct FlakySink {
        failing: Mutex<bool>,
        inner: RecordingSink,
    }

    impl OrderSink for FlakySink {
        fn append_order(&self, table: u32, record: serde_json::Value) -> AppResult<String> {
            if *self.failing.lock() {
                return FailingSink.append_order(table, record);
            }
            self.inner.append_order(table, record)
        }
    }

    #[test]
    fn test_error_slot_set_on_failure_and_cleared_on_success() {
        let sink = Arc::new(FlakySink {
            failing: Mutex::new(true),
            inner: RecordingSink::default(),
        });
        let tables = TableRegistry::new(1, sink.clone());
        tables
            .with_session(1, |s| {
                s.composer.add_person();
            })
            .unwrap();

        assert!(tables.submit(1).is_err());
        assert_eq!(
            tables.get(1).unwrap().error.as_deref(),
            Some("Error al enviar el pedido: permission denied")
        );

        *sink.failing.lock() = false;
        tables.submit(1).unwrap();
        assert!(tables.get(1).unwrap().error.is_none());
    }

    #[test]
    fn test_error_slot_cleared_by_next_composer_change() {
        let tables = TableRegistry::new(1, Arc::new(FailingSink));
        tables
            .compose(1, |composer| {
                composer.add_person();
            })
            .unwrap();
        assert!(tables.submit(1).is_err());
        assert!(tables.get(1).unwrap().error.is_some());

        let state = tables
            .compose(1, |composer| {
                composer.adjust_quantity("d1", Direction::Increment);
            })
            .unwrap();
        assert!(state.error.is_none());
        assert_eq!(state.persons[0].selections.get("d1"), Some(&1));

        assert_eq!(
            tables.compose(4, |_| {}).unwrap_err().code,
            ErrorCode::TableNotFound
        );
    }
}
