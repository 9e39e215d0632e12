use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

// Repository keeps entities in insertion order and looks them up by id with a linear scan
pub trait Repository<Entity: Identifiable>: Send {
    // appends an entity
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // first entity with a matching id
    fn get(&self, id: &str) -> Option<&Entity>;

    fn get_mut(&mut self, id: &str) -> Option<&mut Entity>;

    // deletes an entity and hands it back
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // all entities in insertion order
    fn all(&self) -> Vec<&Entity>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
