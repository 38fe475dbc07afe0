use std::sync::Arc;

use contracts::domain::a001_camera::aggregate::Camera;
use contracts::domain::a002_part::aggregate::Part;
use contracts::domain::a003_location::aggregate::Location;
use contracts::domain::a004_part_detection::aggregate::PartDetection;
use tokio::sync::RwLock;

/// Row that can live in a `Table`.
pub trait Record: Clone {
    fn id(&self) -> i64;
    fn is_demo(&self) -> bool;
}

impl Record for Camera {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_demo(&self) -> bool {
        self.is_demo
    }
}

impl Record for Part {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_demo(&self) -> bool {
        self.is_demo
    }
}

impl Record for Location {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_demo(&self) -> bool {
        self.is_demo
    }
}

impl Record for PartDetection {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_demo(&self) -> bool {
        self.is_demo
    }
}

/// Таблица в памяти: строки в порядке вставки, id выдаются по возрастанию
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Table<T> {
    /// All rows, or only those of one partition when `is_demo` is given.
    pub fn list(&self, is_demo: Option<bool>) -> Vec<T> {
        self.rows
            .iter()
            .filter(|r| is_demo.map_or(true, |flag| r.is_demo() == flag))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.iter().find(|&r| pred(r))
    }

    /// Insert a row built from the next free id.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let row = build(self.next_id);
        self.next_id = self.next_id.max(row.id()) + 1;
        self.rows.push(row.clone());
        row
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id() != id);
        self.rows.len() != before
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub cameras: Table<Camera>,
    pub parts: Table<Part>,
    pub locations: Table<Location>,
    pub part_detections: Table<PartDetection>,
}

/// Состояние приложения, разделяемое между обработчиками
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_part::aggregate::PartDto;

    fn part(name: &str, is_demo: bool) -> PartDto {
        PartDto {
            name: name.into(),
            is_demo,
            ..Default::default()
        }
    }

    #[test]
    fn test_ids_are_sequential_and_list_filters() {
        let mut table: Table<Part> = Table::default();
        let a = table.insert_with(|id| Part::from_dto(id, part("A", false)));
        let b = table.insert_with(|id| Part::from_dto(id, part("B", true)));
        assert_eq!((a.id, b.id), (1, 2));

        assert_eq!(table.list(None).len(), 2);
        assert_eq!(table.list(Some(true)), vec![b.clone()]);
        assert_eq!(table.list(Some(false)), vec![a]);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut table: Table<Part> = Table::default();
        table.insert_with(|id| Part::from_dto(id, part("A", false)));
        assert!(table.remove(1));
        assert!(!table.remove(1));
        let next = table.insert_with(|id| Part::from_dto(id, part("B", false)));
        assert_eq!(next.id, 2);
        assert_eq!(table.len(), 1);
    }
}
