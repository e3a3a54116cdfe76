use vantage_math::{Mat4, Scalar, Vec3, Vec4};

use crate::types::Transform;

/// What a renderer needs to draw one object.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem<S> {
    pub shader: &'static str,
    pub model: Mat4<S>,
    pub colour: Vec4<S>,
}

/// Per-object lifecycle hooks driven by the scene.
pub trait Behaviour<S> {
    /// Called once when the object joins a scene.
    fn init(&mut self);
    fn update(&mut self, dt: S);
    /// `None` when there is nothing to draw yet.
    fn draw(&self) -> Option<DrawItem<S>>;
}

/// A coloured cube whose model matrix is rebuilt from its transform every
/// update.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube<S> {
    pub transform: Transform<S>,
    pub colour: Vec4<S>,
    model: Mat4<S>,
    ready: bool,
}

impl<S: Scalar> Cube<S> {
    pub const SHADER: &'static str = "Player";

    pub fn new(position: Vec3<S>) -> Self {
        let five = S::lit(5.0);
        Self {
            transform: Transform {
                scale: Vec3::new(five, five, five),
                ..Transform::at(position)
            },
            colour: Vec4::new(S::lit(0.8), S::zero(), S::lit(0.6), S::one()),
            model: Mat4::identity(),
            ready: false,
        }
    }

    pub fn model(&self) -> Mat4<S> {
        self.model
    }
}

impl<S: Scalar> Behaviour<S> for Cube<S> {
    fn init(&mut self) {
        self.ready = true;
    }

    fn update(&mut self, _dt: S) {
        self.model = self.transform.model_matrix();
    }

    fn draw(&self) -> Option<DrawItem<S>> {
        self.ready.then(|| DrawItem {
            shader: Self::SHADER,
            model: self.model,
            colour: self.colour,
        })
    }
}

/// A point that moves with constant velocity between direction changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Player<S> {
    pub position: Vec3<S>,
    pub velocity: Vec3<S>,
    pub speed: S,
    pub colour: Vec4<S>,
}

impl<S: Scalar> Player<S> {
    pub fn new(position: Vec3<S>, speed: S) -> Self {
        Self {
            position,
            velocity: Vec3::zero(),
            speed,
            colour: Vec4::new(S::one(), S::one(), S::one(), S::one()),
        }
    }

    /// Sets the velocity to `direction * speed`.
    pub fn movement(&mut self, direction: Vec3<S>) {
        self.velocity = direction * self.speed;
    }
}

impl<S: Scalar> Behaviour<S> for Player<S> {
    fn init(&mut self) {}

    fn update(&mut self, dt: S) {
        self.position.increment(self.velocity, dt);
    }

    fn draw(&self) -> Option<DrawItem<S>> {
        Some(DrawItem {
            shader: "Basic",
            model: Mat4::from_translation(self.position),
            colour: self.colour,
        })
    }
}

/// Every kind of object a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject<S> {
    Cube(Cube<S>),
    Player(Player<S>),
}

impl<S: Scalar> SceneObject<S> {
    pub fn position(&self) -> Vec3<S> {
        match self {
            SceneObject::Cube(c) => c.transform.position,
            SceneObject::Player(p) => p.position,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Cube(_) => "cube",
            SceneObject::Player(_) => "player",
        }
    }
}

impl<S: Scalar> Behaviour<S> for SceneObject<S> {
    fn init(&mut self) {
        match self {
            SceneObject::Cube(c) => c.init(),
            SceneObject::Player(p) => p.init(),
        }
    }

    fn update(&mut self, dt: S) {
        match self {
            SceneObject::Cube(c) => c.update(dt),
            SceneObject::Player(p) => p.update(dt),
        }
    }

    fn draw(&self) -> Option<DrawItem<S>> {
        match self {
            SceneObject::Cube(c) => c.draw(),
            SceneObject::Player(p) => p.draw(),
        }
    }
}

impl<S> From<Cube<S>> for SceneObject<S> {
    fn from(cube: Cube<S>) -> Self {
        SceneObject::Cube(cube)
    }
}

impl<S> From<Player<S>> for SceneObject<S> {
    fn from(player: Player<S>) -> Self {
        SceneObject::Player(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_draws_only_after_init() {
        let mut cube = Cube::<f32>::new(Vec3::new(0.0, 0.0, -10.0));
        assert!(cube.draw().is_none());
        cube.init();
        cube.update(1.0 / 60.0);
        let item = cube.draw().unwrap();
        assert_eq!(item.shader, "Player");
        assert_eq!(item.model.m[0][0], 5.0);
        assert_eq!(item.model.m[2][3], -10.0);
    }

    #[test]
    fn cube_model_does_not_accumulate() {
        let mut cube = Cube::<f64>::new(Vec3::new(1.0, 0.0, 0.0));
        cube.transform.rotation = Vec3::new(10.0, 20.0, 30.0);
        cube.update(0.1);
        let first = cube.model();
        cube.update(0.1);
        assert_eq!(cube.model(), first);
    }

    #[test]
    fn player_integrates_velocity() {
        let mut player = Player::<f64>::new(Vec3::zero(), 2.0);
        player.movement(Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(player.velocity, Vec3::new(2.0, 0.0, -2.0));
        player.update(0.5);
        player.update(0.5);
        assert_eq!(player.position, Vec3::new(2.0, 0.0, -2.0));
    }

    #[test]
    fn enum_dispatches_to_variant() {
        let mut obj: SceneObject<f32> = Player::new(Vec3::zero(), 1.0).into();
        obj.init();
        obj.update(1.0);
        assert_eq!(obj.kind(), "player");
        assert_eq!(obj.position(), Vec3::zero());
        assert!(obj.draw().is_some());
    }
}
