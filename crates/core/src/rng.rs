//! RNG module - shape selection for new pieces
//!
//! Pieces are chosen uniformly from the seven shapes. The generator is a
//! small LCG so a seed reproduces a whole game.
//!
//! A fixed sequence picker is also provided for deterministic play.

use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Source of shapes for newly spawned pieces
pub trait ShapePicker {
    fn pick(&mut self) -> Shape;
}

/// Uniform random choice among the seven shapes
#[derive(Debug, Clone)]
pub struct UniformPicker {
    rng: SimpleRng,
    seed: u32,
}

impl UniformPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl ShapePicker for UniformPicker {
    fn pick(&mut self) -> Shape {
        let idx = self.rng.next_range(Shape::ALL.len() as u32) as usize;
        Shape::ALL[idx]
    }
}

/// Repeats a fixed list of shapes forever
#[derive(Debug, Clone)]
pub struct SequencePicker {
    shapes: Vec<Shape>,
    next: usize,
}

impl SequencePicker {
    /// An empty list falls back to `Shape::I`.
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        let mut shapes = shapes.into();
        if shapes.is_empty() {
            shapes.push(Shape::I);
        }
        Self { shapes, next: 0 }
    }

    /// Always the same shape
    pub fn repeat(shape: Shape) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapePicker for SequencePicker {
    fn pick(&mut self) -> Shape {
        let shape = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}

impl<P: ShapePicker + ?Sized> ShapePicker for Box<P> {
    fn pick(&mut self) -> Shape {
        (**self).pick()
    }
}
