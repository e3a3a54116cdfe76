use std::collections::BTreeMap;

use vantage_math::Scalar;

use crate::{
    error::SceneError,
    object::{Behaviour, DrawItem, SceneObject},
    types::EntityId,
};

/// Owns every object in the world being viewed.
#[derive(Debug, Clone, Default)]
pub struct Scene<S> {
    objects: BTreeMap<EntityId, SceneObject<S>>,
}

impl<S: Scalar> Scene<S> {
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Adds an object, running its `init` hook. Returns its new id.
    pub fn spawn(&mut self, object: impl Into<SceneObject<S>>) -> EntityId {
        let id = EntityId::new();
        self.spawn_with_id(id, object);
        id
    }

    /// Adds an object under a caller-chosen id, replacing any previous one.
    pub fn spawn_with_id(&mut self, id: EntityId, object: impl Into<SceneObject<S>>) {
        let mut object = object.into();
        object.init();
        tracing::debug!(%id, kind = object.kind(), "spawned");
        self.objects.insert(id, object);
    }

    pub fn despawn(&mut self, id: EntityId) -> Result<SceneObject<S>, SceneError> {
        let object = self.objects.remove(&id).ok_or(SceneError::NotFound(id))?;
        tracing::debug!(%id, kind = object.kind(), "despawned");
        Ok(object)
    }

    pub fn get(&self, id: EntityId) -> Option<&SceneObject<S>> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut SceneObject<S>> {
        self.objects.get_mut(&id)
    }

    /// Objects in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &SceneObject<S>)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    pub fn update(&mut self, dt: S) {
        for object in self.objects.values_mut() {
            object.update(dt);
        }
    }

    /// Draw items for every object that has something to draw, in id order.
    pub fn draw_list(&self) -> Vec<(EntityId, DrawItem<S>)> {
        self.objects
            .iter()
            .filter_map(|(id, obj)| obj.draw().map(|item| (*id, item)))
            .collect()
    }
}
