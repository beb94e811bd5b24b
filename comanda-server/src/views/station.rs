//! Station views - kitchen and cafeteria displays
//!
//! Flattens table -> order -> person -> selection into rows and keeps the
//! rows whose dish is prepared at the station.

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::feed::{CATEGORIES_PATH, MENU_PATH, ORDERS_PATH, SECTIONS_PATH};
use shared::models::{Order, Station, StationRow};

use super::orders::decode_orders;
use crate::catalog::CatalogSnapshot;
use crate::core::Config;
use crate::feed::FeedStore;
use crate::utils::AppResult;

/// Label shown for a selection whose dish no longer exists
pub const UNKNOWN_DISH_LABEL: &str = "Plato no encontrado";

/// What a station does with a selection whose dish does not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedDish {
    /// Drop the row
    Skip,
    /// Keep the row, labelled [`UNKNOWN_DISH_LABEL`]
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationView {
    pub station: Station,
    /// Section label a dish must carry to show up here
    pub section: String,
    pub unresolved: UnresolvedDish,
}

impl StationView {
    pub fn kitchen(config: &Config) -> Self {
        Self {
            station: Station::Kitchen,
            section: config.kitchen_section.clone(),
            unresolved: UnresolvedDish::Skip,
        }
    }

    pub fn cafeteria(config: &Config) -> Self {
        Self {
            station: Station::Cafeteria,
            section: config.cafeteria_section.clone(),
            unresolved: UnresolvedDish::Placeholder,
        }
    }

    pub fn for_station(station: Station, config: &Config) -> Self {
        match station {
            Station::Kitchen => Self::kitchen(config),
            Station::Cafeteria => Self::cafeteria(config),
        }
    }

    /// Rows for this station, oldest order first
    pub fn rows(&self, orders: &[Order], catalog: &CatalogSnapshot) -> Vec<StationRow> {
        let mut rows = Vec::new();

        for order in orders {
            for person in &order.persons {
                for (dish_id, &quantity) in &person.selections {
                    let (dish_name, category_name) = match catalog.dish(dish_id) {
                        Some(dish) if dish.section == self.section => (
                            dish.name.clone(),
                            catalog.category_name(&dish.category_id).map(String::from),
                        ),
                        Some(_) => continue,
                        None => match self.unresolved {
                            UnresolvedDish::Skip => continue,
                            UnresolvedDish::Placeholder => (UNKNOWN_DISH_LABEL.to_string(), None),
                        },
                    };
                    rows.push(StationRow {
                        order_id: order.id.clone(),
                        table: order.table,
                        timestamp: order.timestamp,
                        person_id: person.id.clone(),
                        dish_id: dish_id.clone(),
                        dish_name,
                        category_name,
                        quantity,
                        details: person.details.clone(),
                    });
                }
            }
        }

        rows.sort_by_key(|row| row.timestamp);
        rows
    }

    /// Rows computed from a snapshot of the whole feed
    pub fn rows_from_root(&self, root: &Value) -> Vec<StationRow> {
        let catalog = CatalogSnapshot::from_feed(
            &root[MENU_PATH],
            &root[CATEGORIES_PATH],
            &root[SECTIONS_PATH],
        );
        self.rows(&decode_orders(&root[ORDERS_PATH]), &catalog)
    }

    /// Current rows read from the feed
    pub fn current(&self, feed: &FeedStore) -> AppResult<Vec<StationRow>> {
        Ok(self.rows_from_root(&feed.get("")?))
    }

    /// Rows now and again after every feed write
    pub fn live(self, feed: FeedStore) -> AppResult<impl Stream<Item = Vec<StationRow>> + Send> {
        let subscription = feed.subscribe("")?;
        Ok(subscription
            .into_stream()
            .map(move |root| self.rows_from_root(&root)))
    }
}
