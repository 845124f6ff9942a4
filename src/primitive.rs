use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use std::fmt::{Debug, Display, LowerExp};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Scalar type the clustering calculations are performed with.
pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + LowerExp + 'static {}
impl Primitive for f32 {}
impl Primitive for f64 {}
