use vantage_math::{Scalar, Vec3};

use crate::action::Action;

/// Movement keys, named by the direction they push the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    const ALL: [Key; 6] = [Key::Forward, Key::Back, Key::Left, Key::Right, Key::Up, Key::Down];

    fn index(self) -> usize {
        self as usize
    }

    /// Unit push on the right / up / backward axes.
    fn axis(self) -> [i8; 3] {
        match self {
            Key::Forward => [0, 0, -1],
            Key::Back => [0, 0, 1],
            Key::Left => [-1, 0, 0],
            Key::Right => [1, 0, 0],
            Key::Up => [0, 1, 0],
            Key::Down => [0, -1, 0],
        }
    }
}

/// Held state of the movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    held: [bool; 6],
}

impl MovementKeys {
    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn velocity<S: Scalar>(&self, speed: S) -> Vec3<S> {
        let mut sum = [0i8; 3];
        for key in Key::ALL.into_iter().filter(|k| self.is_held(*k)) {
            for (total, push) in sum.iter_mut().zip(key.axis()) {
                *total += push;
            }
        }
        let scaled = |v: i8| S::lit(f64::from(v)) * speed;
        Vec3::new(scaled(sum[0]), scaled(sum[1]), scaled(sum[2]))
    }

    /// The [`Action::Move`] matching the keys currently held.
    pub fn action<S: Scalar>(&self, speed: S) -> Action<S> {
        let v = self.velocity(speed);
        Action::Move { x: v.x, y: v.y, z: v.z }
    }
}
