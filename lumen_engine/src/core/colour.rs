use crate::core::types::Channel;
use crate::{impl_op, impl_op_assign};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::array;
use std::ops::{Deref, Index};
use valuable::{Valuable, Value, Visit};

#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
#[repr(transparent)]
pub struct Colour<const N: usize>(pub [Channel; N]);

pub type ColourRgb = Colour<3>;

impl<const N: usize> Colour<N> {
    /// How many channels there are, for this colour.
    /// RGB is 3 channels.
    pub const CHANNEL_COUNT: usize = N;
}

impl<const N: usize> Default for Colour<N> {
    fn default() -> Self { Self::BLACK }
}

// region Constructors

impl<const N: usize> Colour<N> {
    pub const fn new(val: [Channel; N]) -> Self { Self(val) }
}

// endregion Constructors

// region RGB Impl

impl ColourRgb {
    pub const fn r(&self) -> Channel { self.0[0] }
    pub const fn g(&self) -> Channel { self.0[1] }
    pub const fn b(&self) -> Channel { self.0[2] }
}

impl From<(Channel, Channel, Channel)> for ColourRgb {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self::new([r, g, b]) }
}

// Serialised as a plain `[r, g, b]` array
impl Serialize for ColourRgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> { self.0.serialize(serializer) }
}
impl<'de> Deserialize<'de> for ColourRgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[Channel; 3]>::deserialize(deserializer).map(Self::new)
    }
}

// endregion RGB Impl

// Logged as a plain list of channels
impl<const N: usize> Valuable for Colour<N> {
    fn as_value(&self) -> Value<'_> { self.0.as_value() }
    fn visit(&self, visit: &mut dyn Visit) { self.0.visit(visit) }
}

// region Known Colours

impl<const N: usize> Colour<N> {
    pub const BLACK: Self = Self::new([0.; N]);
    pub const WHITE: Self = Self::new([1.; N]);
}

impl ColourRgb {
    pub const RED: Self = Self::new([1., 0., 0.]);
    pub const GREEN: Self = Self::new([0., 1., 0.]);
    pub const BLUE: Self = Self::new([0., 0., 1.]);
    pub const YELLOW: Self = Self::new([1., 1., 0.]);
    pub const CYAN: Self = Self::new([0., 1., 1.]);
    pub const MAGENTA: Self = Self::new([1., 0., 1.]);
    pub const GRAY: Self = Self::new([0.5, 0.5, 0.5]);
}

// endregion Known Colours

// region To/From impls

impl<const N: usize> From<[Channel; N]> for Colour<N> {
    fn from(val: [Channel; N]) -> Self { Self::new(val) }
}
impl<const N: usize> From<Colour<N>> for [Channel; N] {
    fn from(col: Colour<N>) -> Self { col.0 }
}

// endregion To/From impls

// region Iterating/Indexing

impl<const N: usize> IntoIterator for Colour<N> {
    type Item = Channel;
    type IntoIter = array::IntoIter<Channel, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<const N: usize> Deref for Colour<N> {
    type Target = [Channel; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<const N: usize> Index<usize> for Colour<N> {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

// endregion Iterating/Indexing

// region Operators

impl<const N: usize> Colour<N> {
    /// Maps each element of the colour with the given closure, and returns the new colour
    #[inline]
    pub fn map(&self, op: impl Fn(Channel) -> Channel) -> Self { self.0.map(op).into() }
    /// Maps each element of the colour with the given closure, with the element of another, and returns the new colour.
    #[inline]
    pub fn map2(&self, other: &Self, mut op: impl FnMut(Channel, Channel) -> Channel) -> Self {
        array::from_fn(|i| op(self[i], other[i])).into()
    }
    /// Same as [Self::map2], but acts in_place
    #[inline]
    pub fn map2_assign(&mut self, other: &Self, mut op: impl FnMut(&mut Channel, Channel)) {
        self.0.iter_mut().zip_eq(other.0).for_each(|(s, o)| op(s, o))
    }

    /// Sum of all channels. Handy for quickly checking if a colour is black
    pub fn sum(&self) -> Channel { self.0.iter().sum() }
}

impl_op!(impl {const N: usize} std::ops::Add : fn add(a: Colour<N>, b: Colour<N>) -> Colour<N> { Colour::map2(&a, &b, |x, y| x + y) });
impl_op!(impl {const N: usize} std::ops::Sub : fn sub(a: Colour<N>, b: Colour<N>) -> Colour<N> { Colour::map2(&a, &b, |x, y| x - y) });
impl_op!(impl {const N: usize} std::ops::Mul : fn mul(a: Colour<N>, b: Colour<N>) -> Colour<N> { Colour::map2(&a, &b, |x, y| x * y) });
impl_op!(impl {const N: usize} std::ops::Div : fn div(a: Colour<N>, b: Colour<N>) -> Colour<N> { Colour::map2(&a, &b, |x, y| x / y) });

impl_op!(impl {const N: usize} std::ops::Mul : fn mul(a: Colour<N>, b: Channel) -> Colour<N> { a.map(|c| c * b) });
impl_op!(impl {const N: usize} std::ops::Div : fn div(a: Colour<N>, b: Channel) -> Colour<N> { a.map(|c| c / b) });

impl_op_assign!(impl {const N: usize} std::ops::AddAssign : fn add_assign(a: Colour<N>, b: Colour<N>) { Colour::map2_assign(&mut a, &b, |x, y| *x += y) });
impl_op_assign!(impl {const N: usize} std::ops::SubAssign : fn sub_assign(a: Colour<N>, b: Colour<N>) { Colour::map2_assign(&mut a, &b, |x, y| *x -= y) });
impl_op_assign!(impl {const N: usize} std::ops::MulAssign : fn mul_assign(a: Colour<N>, b: Colour<N>) { Colour::map2_assign(&mut a, &b, |x, y| *x *= y) });
impl_op_assign!(impl {const N: usize} std::ops::DivAssign : fn div_assign(a: Colour<N>, b: Colour<N>) { Colour::map2_assign(&mut a, &b, |x, y| *x /= y) });

// endregion
