// ============================================================================
// COLLECTION - Estado genérico de una colección remota
// ============================================================================
// Todos los hooks de recurso comparten esta misma máquina:
// items + paginación + loading + error, parches locales por id y el guard de
// secuencia que descarta respuestas fuera de orden.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Pagination;

#[derive(Clone, PartialEq, Debug)]
pub struct Collection<T: Clone + PartialEq> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Clone + PartialEq> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq> Collection<T> {
    pub fn loaded(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination,
            loading: false,
            error: None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Sustituye exactamente el item con ese id; el resto no se toca.
    /// Devuelve false si el id no está (la lista local quedó atrás).
    pub fn patch_by_id<F>(&mut self, id: &str, id_of: F, replacement: T) -> bool
    where
        F: Fn(&T) -> &str,
    {
        match self.items.iter().position(|item| id_of(item) == id) {
            Some(index) => {
                self.items[index] = replacement;
                true
            }
            None => false,
        }
    }

    /// Quita el item de la lista local y descuenta el total de la
    /// paginación (con suelo en 0). Para solicitudes aprobadas/rechazadas:
    /// salen de la vista de pendientes, nunca se mutan in situ.
    pub fn remove_by_id<F>(&mut self, id: &str, id_of: F) -> bool
    where
        F: Fn(&T) -> &str,
    {
        let before = self.items.len();
        self.items.retain(|item| id_of(item) != id);
        let removed = self.items.len() < before;
        if removed {
            self.pagination.total_items = self.pagination.total_items.saturating_sub(1);
        }
        removed
    }
}

// ----------------------------------------------------------------------------
// Guard de secuencia: cada fetch toma un ticket creciente y solo la
// resolución con el ticket más reciente puede escribir estado
// ----------------------------------------------------------------------------

pub type FetchSeq = Rc<RefCell<u64>>;

pub fn next_fetch_ticket(seq: &FetchSeq) -> u64 {
    let mut counter = seq.borrow_mut();
    *counter += 1;
    *counter
}

pub fn is_latest_ticket(seq: &FetchSeq, ticket: u64) -> bool {
    *seq.borrow() == ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Item {
        id: String,
        value: u32,
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    fn collection_of(items: Vec<Item>) -> Collection<Item> {
        let mut pagination = Pagination::default();
        pagination.total_items = items.len() as u64;
        Collection::loaded(items, pagination)
    }

    #[test]
    fn patch_replaces_exactly_one_item() {
        let mut collection = collection_of(vec![item("a", 1), item("b", 2), item("c", 3)]);
        let untouched_a = collection.items[0].clone();
        let untouched_c = collection.items[2].clone();

        assert!(collection.patch_by_id("b", |i| i.id.as_str(), item("b", 99)));

        assert_eq!(collection.items[0], untouched_a);
        assert_eq!(collection.items[1].value, 99);
        assert_eq!(collection.items[2], untouched_c);
        assert_eq!(collection.items.len(), 3);
    }

    #[test]
    fn patch_unknown_id_is_a_noop() {
        let mut collection = collection_of(vec![item("a", 1)]);
        assert!(!collection.patch_by_id("zz", |i| i.id.as_str(), item("zz", 7)));
        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.items[0].value, 1);
    }

    #[test]
    fn remove_decrements_total_with_floor_at_zero() {
        let mut collection = collection_of(vec![item("a", 1), item("b", 2)]);
        assert_eq!(collection.pagination.total_items, 2);

        assert!(collection.remove_by_id("a", |i| i.id.as_str()));
        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.pagination.total_items, 1);

        // el total ya está a 0 por fuera de la lista: nunca baja de 0
        collection.pagination.total_items = 0;
        assert!(collection.remove_by_id("b", |i| i.id.as_str()));
        assert_eq!(collection.pagination.total_items, 0);

        assert!(!collection.remove_by_id("b", |i| i.id.as_str()));
        assert_eq!(collection.pagination.total_items, 0);
    }

    #[test]
    fn stale_tickets_are_discarded() {
        let seq: FetchSeq = Rc::new(RefCell::new(0));

        let first = next_fetch_ticket(&seq);
        let second = next_fetch_ticket(&seq);

        // la respuesta del primer fetch llega tarde: se descarta
        assert!(!is_latest_ticket(&seq, first));
        assert!(is_latest_ticket(&seq, second));

        let third = next_fetch_ticket(&seq);
        assert!(!is_latest_ticket(&seq, second));
        assert!(is_latest_ticket(&seq, third));
    }

    #[test]
    fn begin_loading_clears_previous_error() {
        let mut collection: Collection<Item> = Collection::default();
        collection.fail("Network error".to_string());
        assert_eq!(collection.error.as_deref(), Some("Network error"));
        assert!(!collection.loading);

        collection.begin_loading();
        assert!(collection.loading);
        assert!(collection.error.is_none());
    }
}
